//! Werewolf Arena Simulation Engine
//!
//! A nine-seat social deduction game simulator: role assignment, a timed
//! phase state machine, an append-only narrated transcript, synthetic agent
//! chatter, a single human-decision intake, and a snapshot broadcast
//! channel for observers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   tick()    ┌────────────┐   publish()   ┌───────────┐
//! │ GameSession │ ──────────▶ │ GameEngine │ ────────────▶ │ listeners │
//! │  (timer)    │             │  + state   │   snapshots   └───────────┘
//! └─────────────┘             └────────────┘
//! ```
//!
//! The engine is pure tick-driven state advancement; only [`GameSession`]
//! knows about wall-clock time. Observers receive deep-copied
//! [`wolf_events::GameSnapshot`] values and can never reach engine-owned
//! state.

pub mod broadcast;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod session;
pub mod setup;
pub mod speech;
pub mod state;

pub use broadcast::{Broadcast, ListenerId};
pub use config::{default_config_toml, EngineConfig};
pub use engine::{GameEngine, TickOutcome};
pub use error::{ConfigError, DecisionError, ObserverError};
pub use rng::SimRng;
pub use session::GameSession;
pub use setup::build_roster;
pub use speech::{CannedSpeech, SpeechProvider};
pub use state::GameState;
