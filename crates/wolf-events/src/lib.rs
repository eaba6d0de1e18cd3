//! Shared game types and serialization for the werewolf arena simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod decision;
pub mod log;
pub mod phase;
pub mod role;
pub mod seat;
pub mod snapshot;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export role types
pub use role::{role_deck, Faction, ParseRoleError, Role, SEAT_COUNT};

// Re-export phase types
pub use phase::{ParsePhaseError, Phase};

// Re-export seat types
pub use seat::{Seat, SeatId};

// Re-export log types
pub use log::{generate_log_id, LogEntry, LogKind};

// Re-export snapshot types
pub use snapshot::GameSnapshot;

// Re-export decision types
pub use decision::HumanDecision;
