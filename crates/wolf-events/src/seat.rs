//! Seat Types
//!
//! A seat is one of the fixed participant slots in a game instance. Seat
//! ids are 1-based and stable for the game's lifetime.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// Stable identifier for a seat, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub u32);

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SeatId {
    fn from(id: u32) -> Self {
        SeatId(id)
    }
}

/// One participant slot in a game instance.
///
/// `role` is assigned once at game start and never changes. `is_alive`
/// transitions true to false at most once. `suspicion_score` is owned by an
/// external scoring collaborator; the engine initializes it and never
/// mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub display_name: String,
    pub avatar_url: String,
    pub role: Role,
    pub is_alive: bool,
    pub is_human: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspicion_score: Option<f32>,
}

impl Seat {
    /// Creates a living seat with the given identity and role.
    pub fn new(
        id: impl Into<SeatId>,
        display_name: impl Into<String>,
        avatar_url: impl Into<String>,
        role: Role,
        is_human: bool,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar_url: avatar_url.into(),
            role,
            is_alive: true,
            is_human,
            suspicion_score: Some(0.0),
        }
    }

    /// Returns true for a living seat not controlled by the human.
    pub fn is_living_agent(&self) -> bool {
        self.is_alive && !self.is_human
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_transparent_serde() {
        let id = SeatId(4);
        assert_eq!(serde_json::to_string(&id).unwrap(), "4");
        assert_eq!(serde_json::from_str::<SeatId>("4").unwrap(), id);
    }

    #[test]
    fn test_seat_new_defaults() {
        let seat = Seat::new(3, "Agent-102", "https://example.com/a.png", Role::Seer, false);
        assert_eq!(seat.id, SeatId(3));
        assert!(seat.is_alive);
        assert!(!seat.is_human);
        assert_eq!(seat.suspicion_score, Some(0.0));
    }

    #[test]
    fn test_is_living_agent() {
        let mut agent = Seat::new(2, "Agent-101", "", Role::Villager, false);
        let human = Seat::new(1, "You (Human)", "", Role::Witch, true);

        assert!(agent.is_living_agent());
        assert!(!human.is_living_agent());

        agent.is_alive = false;
        assert!(!agent.is_living_agent());
    }

    #[test]
    fn test_seat_serialization_roundtrip() {
        let seat = Seat::new(7, "Agent-106", "https://example.com/7.png", Role::Hunter, false);
        let json = serde_json::to_string(&seat).unwrap();
        assert!(json.contains(r#""role":"hunter""#));

        let parsed: Seat = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, seat);
    }
}
