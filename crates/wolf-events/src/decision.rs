//! Human Decision Payload
//!
//! The one action type the presentation layer writes back into the engine.
//! Every field is optional so partial payloads deserialize cleanly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::seat::SeatId;

/// A decision submitted on behalf of the human-controlled seat.
///
/// `speech` becomes a speech transcript entry. `vote_target` and
/// `skill_target` are recorded as action entries for visibility; feeding
/// them into vote/skill resolution is an extension point, not current
/// behavior. `reasoning_steps` and `suspicion_scores` are diagnostic
/// signals owned by the agent backend and are not applied to game state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanDecision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_target: Option<SeatId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_target: Option<SeatId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasoning_steps: Vec<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub suspicion_scores: HashMap<String, f32>,
}

impl HumanDecision {
    /// Creates a speech-only decision.
    pub fn speech(text: impl Into<String>) -> Self {
        Self {
            speech: Some(text.into()),
            ..Self::default()
        }
    }

    /// Creates a vote-only decision.
    pub fn vote(target: impl Into<SeatId>) -> Self {
        Self {
            vote_target: Some(target.into()),
            ..Self::default()
        }
    }

    /// Returns true if no field carries anything to record.
    pub fn is_empty(&self) -> bool {
        self.speech.is_none()
            && self.vote_target.is_none()
            && self.skill_target.is_none()
            && self.reasoning_steps.is_empty()
            && self.suspicion_scores.is_empty()
    }
}
