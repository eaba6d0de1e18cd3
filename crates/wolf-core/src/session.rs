//! Session Facade
//!
//! Wraps a [`GameEngine`] behind a mutex and owns the wall-clock timer
//! task. The engine itself never touches a clock: this layer invokes
//! `tick()` on a fixed period and is the single place that knows about
//! real time.
//!
//! The timer task and the decision intake serialize through the same
//! mutex, so a decision's transcript entries land in the order received
//! relative to tick-driven entries, with no partial mutation visible.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use wolf_events::{GameSnapshot, HumanDecision};

use crate::broadcast::ListenerId;
use crate::config::EngineConfig;
use crate::engine::{GameEngine, TickOutcome};
use crate::error::DecisionError;

/// One game session: an engine plus its scheduler.
///
/// There is at most one active ticker per session; starting while one is
/// active is a no-op, and the ticker halts itself permanently when the
/// game ends.
pub struct GameSession {
    engine: Arc<Mutex<GameEngine>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl GameSession {
    /// Creates a session around a fresh engine.
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self {
            engine: Arc::new(Mutex::new(GameEngine::new(config, seed))),
            ticker: Mutex::new(None),
        }
    }

    /// Returns the current state without side effects.
    pub fn initial_state(&self) -> GameSnapshot {
        self.lock_engine().snapshot()
    }

    /// Registers a snapshot listener.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: FnMut(GameSnapshot) + Send + 'static,
    {
        self.lock_engine().subscribe(listener)
    }

    /// Removes a listener; unknown ids are no-ops.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.lock_engine().unsubscribe(id);
    }

    /// Begins ticking. Idempotent: a second call while the loop is active
    /// (or after the game has ended) does nothing.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_loop(&self) {
        let mut ticker = self
            .ticker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if ticker.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return;
        }

        let period = {
            let mut engine = self.lock_engine();
            if engine.snapshot().winner.is_some() {
                // A finished game stays finished until reset
                return;
            }
            engine.start();
            Duration::from_millis(engine.config().tick_interval_ms)
        };

        let engine = Arc::clone(&self.engine);
        *ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick completes immediately; consume it so
            // a full period elapses before the first game tick.
            interval.tick().await;
            loop {
                interval.tick().await;
                let outcome = {
                    let mut engine = engine
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner());
                    engine.tick()
                };
                if outcome == TickOutcome::Finished {
                    tracing::info!("game over, ticker halting");
                    break;
                }
            }
        }));
    }

    /// Stops the ticker and reinitializes the engine with a fresh game.
    ///
    /// The ticker is cancelled before teardown, so no tick can observe or
    /// mutate the discarded state. Callable from any state.
    pub fn reset(&self) {
        let handle = self
            .ticker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
        self.lock_engine().reset();
    }

    /// Forwards a human decision to the engine, serialized with ticks.
    pub fn submit_decision(&self, decision: &HumanDecision) -> Result<(), DecisionError> {
        self.lock_engine().submit_decision(decision)
    }

    /// Returns true while the ticker task is live.
    pub fn is_running(&self) -> bool {
        self.ticker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Waits for the ticker task to halt (game over). Returns immediately
    /// if no ticker is active.
    pub async fn run_to_completion(&self) {
        let handle = self
            .ticker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(handle) = handle {
            // Abort-on-reset surfaces as a JoinError; both exits are normal.
            let _ = handle.await;
        }
    }

    fn lock_engine(&self) -> std::sync::MutexGuard<'_, GameEngine> {
        self.engine
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        let handle = self
            .ticker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}
