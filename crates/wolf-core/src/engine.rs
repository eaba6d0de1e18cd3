//! Simulation Scheduler
//!
//! Drives the phase state machine one tick at a time. The tick operation is
//! pure state advancement: the wall-clock timer lives in the session layer
//! and only invokes [`GameEngine::tick`] periodically, which is what makes
//! the engine's properties testable without real waits.
//!
//! Active cycle: DayAnnounce -> DayDiscuss -> DayVote -> NightWolf ->
//! DayAnnounce. Night sub-phases fall through to DayAnnounce until
//! night-role actions are implemented.

use wolf_events::{Faction, GameSnapshot, HumanDecision, LogKind, Phase, SeatId};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::broadcast::{Broadcast, ListenerId};
use crate::config::EngineConfig;
use crate::error::DecisionError;
use crate::rng::SimRng;
use crate::setup::build_roster;
use crate::speech::{CannedSpeech, SpeechProvider};
use crate::state::GameState;

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game continues; schedule another tick.
    Running,
    /// A winner is set; the scheduler must halt permanently.
    Finished,
}

/// One game session's simulation engine.
///
/// Explicitly owned and instantiable: independent sessions are independent
/// `GameEngine` values, and external collaborators only ever receive
/// [`GameSnapshot`] copies.
pub struct GameEngine {
    config: EngineConfig,
    rng: SimRng,
    state: GameState,
    channel: Broadcast,
    speech: Box<dyn SpeechProvider>,
    started: bool,
}

impl GameEngine {
    /// Creates an engine with the default canned speech pool.
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self::with_speech(config, seed, Box::new(CannedSpeech::default()))
    }

    /// Creates an engine with a custom speech provider.
    pub fn with_speech(config: EngineConfig, seed: u64, speech: Box<dyn SpeechProvider>) -> Self {
        let mut rng = SimRng::seed_from_u64(seed);
        let seats = build_roster(&config, &mut rng);
        let countdown = config.phase_duration(Phase::DayAnnounce);
        Self {
            config,
            rng,
            state: GameState::new(seats, countdown),
            channel: Broadcast::new(),
            speech,
            started: false,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the current state without side effects.
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Registers a snapshot listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(GameSnapshot) + Send + 'static,
    {
        self.channel.subscribe(listener)
    }

    /// Removes a listener; unknown ids are no-ops.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.channel.unsubscribe(id);
    }

    /// Marks the session started and narrates the opening. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        tracing::info!(day = self.state.day(), "game session starting");
        self.state
            .append_log(LogKind::System, None, "Game Initialized. Day 1 begins.");
        self.publish();
    }

    /// Advances the simulation by one tick.
    ///
    /// Once a winner is set the engine is inert: no mutation, no broadcast,
    /// always `Finished`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.winner().is_some() {
            return TickOutcome::Finished;
        }

        self.state.advance_clock();
        if self.state.decrement_countdown() == 0 {
            self.advance_phase();
        }

        // Chatter runs against the phase in force after any transition,
        // so a line can land on the first discussion tick.
        if self.state.phase() == Phase::DayDiscuss
            && self.rng.0.gen::<f32>() < self.config.chatter_probability
        {
            self.agent_chatter();
        }

        self.publish();

        if self.state.winner().is_some() {
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        }
    }

    /// Applies a human decision.
    ///
    /// Valid parts are logged before any error is surfaced: speech always
    /// lands, then vote and skill targets are validated and recorded.
    /// Never mutates phase, countdown, or seat aliveness.
    pub fn submit_decision(&mut self, decision: &HumanDecision) -> Result<(), DecisionError> {
        let human = self.state.self_id().ok_or(DecisionError::NoHumanSeat)?;
        let mut appended = false;
        let mut result = Ok(());

        if let Some(text) = &decision.speech {
            self.state
                .append_log(LogKind::Speech, Some(human), text.clone());
            appended = true;
        }

        if !decision.reasoning_steps.is_empty() || !decision.suspicion_scores.is_empty() {
            // Diagnostics owned by the agent backend; suspicion is scored
            // externally and never applied to engine state.
            tracing::debug!(
                steps = decision.reasoning_steps.len(),
                scores = decision.suspicion_scores.len(),
                "received reasoning diagnostics"
            );
        }

        if let Some(target) = decision.vote_target {
            match self.validate_target(target) {
                Ok(()) => {
                    // TODO: feed human ballots into vote resolution once the
                    // agent backend submits full ballots; today the vote is
                    // recorded for visibility only.
                    self.state.append_log(
                        LogKind::Action,
                        Some(human),
                        format!("Vote cast against Player {}", target),
                    );
                    appended = true;
                }
                Err(error) => result = Err(error),
            }
        }

        if let Some(target) = decision.skill_target {
            match self.validate_target(target) {
                Ok(()) => {
                    self.state.append_log(
                        LogKind::Action,
                        Some(human),
                        format!("Skill used on Player {}", target),
                    );
                    appended = true;
                }
                Err(error) => {
                    if result.is_ok() {
                        result = Err(error);
                    }
                }
            }
        }

        if appended {
            self.publish();
        }
        result
    }

    /// Discards the current state and starts a fresh session.
    ///
    /// The fresh snapshot is broadcast immediately. Callable from any state.
    pub fn reset(&mut self) {
        tracing::info!("resetting game session");
        let seats = build_roster(&self.config, &mut self.rng);
        let countdown = self.config.phase_duration(Phase::DayAnnounce);
        self.state = GameState::new(seats, countdown);
        self.started = false;
        self.publish();
    }

    /// Appends one line of discussion chatter from a uniformly random
    /// living non-human seat.
    fn agent_chatter(&mut self) {
        let agents: Vec<SeatId> = self
            .state
            .seats()
            .iter()
            .filter(|s| s.is_living_agent())
            .map(|s| s.id)
            .collect();
        let Some(&speaker) = agents.choose(&mut self.rng.0) else {
            return;
        };
        let line = {
            let Some(seat) = self.state.seat(speaker) else {
                return;
            };
            self.speech.line(seat, &mut self.rng)
        };
        self.state.append_log(LogKind::Speech, Some(speaker), line);
    }

    fn validate_target(&self, target: SeatId) -> Result<(), DecisionError> {
        let seat = self
            .state
            .seat(target)
            .ok_or(DecisionError::UnknownSeat(target))?;
        if !seat.is_alive {
            return Err(DecisionError::DeadSeat(target));
        }
        Ok(())
    }

    fn publish(&mut self) {
        self.channel.publish(&self.state.snapshot());
    }

    fn enter_phase(&mut self, phase: Phase) {
        self.state.set_phase(phase);
        self.state.set_countdown(self.config.phase_duration(phase));
    }

    fn advance_phase(&mut self) {
        let from = self.state.phase();
        match from {
            Phase::NightWolf => {
                self.state
                    .append_log(LogKind::System, None, "Dawn breaks. The village wakes up.");
                self.enter_phase(Phase::DayAnnounce);
            }
            Phase::DayAnnounce => {
                self.state
                    .append_log(LogKind::System, None, "Last night was a peaceful night.");
                self.enter_phase(Phase::DayDiscuss);
            }
            Phase::DayDiscuss => {
                self.state.append_log(
                    LogKind::Alert,
                    None,
                    "Discussion ends. Please cast your votes.",
                );
                self.enter_phase(Phase::DayVote);
            }
            Phase::DayVote => {
                self.resolve_vote();
                if self.state.winner().is_none() {
                    self.state.append_log(
                        LogKind::System,
                        None,
                        "Night falls. Wolves are hunting...",
                    );
                    self.state.increment_day();
                    self.enter_phase(Phase::NightWolf);
                }
            }
            // Declared night sub-phases fall through to dawn until their
            // role actions exist.
            Phase::NightWitch | Phase::NightSeer | Phase::NightHunter => {
                self.enter_phase(Phase::DayAnnounce);
            }
            Phase::GameOver => {}
        }
        tracing::debug!(%from, to = %self.state.phase(), day = self.state.day(), "phase transition");
    }

    /// Placeholder vote policy: scan living seats in index order and
    /// eliminate the first whose fair coin flip succeeds.
    ///
    /// Contract: deterministic under the seeded stream, at most one
    /// elimination per vote, never a dead seat.
    fn resolve_vote(&mut self) {
        let living: Vec<SeatId> = self.state.living_seats().map(|s| s.id).collect();
        let victim = living.into_iter().find(|_| self.rng.0.gen_bool(0.5));

        match victim {
            Some(id) => {
                if let Err(error) = self.state.eliminate(id) {
                    tracing::error!(%error, "vote resolution picked an invalid seat");
                    return;
                }
                self.state.append_log(
                    LogKind::Alert,
                    None,
                    format!("Player {} was voted out!", id),
                );
                self.evaluate_win();
            }
            None => {
                self.state
                    .append_log(LogKind::System, None, "No one was voted out.");
            }
        }
    }

    /// Win rule: no living werewolves means the villagers win; werewolf
    /// parity or better means the werewolves win.
    fn evaluate_win(&mut self) {
        let (wolves, others) = self.state.living_by_faction();
        let winner = if wolves == 0 {
            Some(Faction::Villagers)
        } else if wolves >= others {
            Some(Faction::Werewolves)
        } else {
            None
        };

        if let Some(faction) = winner {
            if self.state.set_winner(faction) {
                tracing::info!(%faction, day = self.state.day(), "game over");
                self.state.append_log(
                    LogKind::Alert,
                    None,
                    format!("Game over! The {} have won.", faction),
                );
                self.state.set_phase(Phase::GameOver);
                self.state.set_countdown(0);
            }
        }
    }
}
