//! Phase State-Machine States
//!
//! The active cycle is `DayAnnounce -> DayDiscuss -> DayVote ->
//! NightWolf -> DayAnnounce -> ...`. The night sub-phases are declared in
//! the model but unreached by the transition table today; night-role
//! actions slot in between `NightWolf` and `DayAnnounce`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current state-machine state governing which actions are valid and how
/// the countdown is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NightWolf,
    NightWitch,
    NightSeer,
    NightHunter,
    DayAnnounce,
    DayDiscuss,
    DayVote,
    GameOver,
}

impl Phase {
    /// Returns true for any of the night states.
    pub fn is_night(self) -> bool {
        matches!(
            self,
            Phase::NightWolf | Phase::NightWitch | Phase::NightSeer | Phase::NightHunter
        )
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }

    /// Returns all phase variants.
    pub fn all() -> &'static [Phase] {
        &[
            Phase::NightWolf,
            Phase::NightWitch,
            Phase::NightSeer,
            Phase::NightHunter,
            Phase::DayAnnounce,
            Phase::DayDiscuss,
            Phase::DayVote,
            Phase::GameOver,
        ]
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NightWolf => write!(f, "night_wolf"),
            Phase::NightWitch => write!(f, "night_witch"),
            Phase::NightSeer => write!(f, "night_seer"),
            Phase::NightHunter => write!(f, "night_hunter"),
            Phase::DayAnnounce => write!(f, "day_announce"),
            Phase::DayDiscuss => write!(f, "day_discuss"),
            Phase::DayVote => write!(f, "day_vote"),
            Phase::GameOver => write!(f, "game_over"),
        }
    }
}

/// Error type for parsing a [`Phase`] from a string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsePhaseError(pub String);

impl fmt::Display for ParsePhaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid phase: '{}'", self.0)
    }
}

impl std::error::Error for ParsePhaseError {}

impl FromStr for Phase {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "night_wolf" => Ok(Phase::NightWolf),
            "night_witch" => Ok(Phase::NightWitch),
            "night_seer" => Ok(Phase::NightSeer),
            "night_hunter" => Ok(Phase::NightHunter),
            "day_announce" => Ok(Phase::DayAnnounce),
            "day_discuss" => Ok(Phase::DayDiscuss),
            "day_vote" => Ok(Phase::DayVote),
            "game_over" => Ok(Phase::GameOver),
            _ => Err(ParsePhaseError(s.to_string())),
        }
    }
}
