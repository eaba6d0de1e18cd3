//! Game State Snapshots
//!
//! An immutable, independent copy of the game state at a point in time,
//! safe to hand to external observers. The engine owns the live state;
//! observers only ever see these copies.

use serde::{Deserialize, Serialize};

use crate::log::LogEntry;
use crate::phase::Phase;
use crate::role::Faction;
use crate::seat::{Seat, SeatId};

/// Complete observable game state.
///
/// Every field is an owned copy; mutating a snapshot never touches
/// engine-owned state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Day counter, starting at 1
    pub day: u32,
    /// Current state-machine state
    pub phase: Phase,
    /// Fixed-size ordered seat collection, indices stable for the game
    pub seats: Vec<Seat>,
    /// Append-only narrated transcript
    pub transcript: Vec<LogEntry>,
    /// Seconds remaining in the current phase
    pub countdown: u32,
    /// Set exactly once, terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Faction>,
    /// The human-controlled seat, if any (None in spectator mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_id: Option<SeatId>,
    /// Elected sheriff seat. Present in the model; never set by the core.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheriff_id: Option<SeatId>,
    /// Simulation tick the snapshot was taken at
    pub tick: u64,
}

impl GameSnapshot {
    /// Looks up a seat by id.
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// Returns the living seats, in seat order.
    pub fn living_seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| s.is_alive)
    }

    /// Returns the human-controlled seat, if configured and present.
    pub fn human_seat(&self) -> Option<&Seat> {
        self.self_id.and_then(|id| self.seat(id))
    }

    /// Counts living seats on each side: `(werewolves, villagers)`.
    pub fn living_by_faction(&self) -> (usize, usize) {
        let wolves = self
            .living_seats()
            .filter(|s| s.role.is_werewolf())
            .count();
        let villagers = self.living_seats().count() - wolves;
        (wolves, villagers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            day: 2,
            phase: Phase::DayVote,
            seats: vec![
                Seat::new(1, "You (Human)", "", Role::Villager, true),
                Seat::new(2, "Agent-101", "", Role::Werewolf, false),
                Seat::new(3, "Agent-102", "", Role::Seer, false),
            ],
            transcript: Vec::new(),
            countdown: 15,
            winner: None,
            self_id: Some(SeatId(1)),
            sheriff_id: None,
            tick: 95,
        }
    }

    #[test]
    fn test_seat_lookup() {
        let snap = snapshot();
        assert_eq!(snap.seat(SeatId(2)).unwrap().display_name, "Agent-101");
        assert!(snap.seat(SeatId(9)).is_none());
    }

    #[test]
    fn test_human_seat() {
        let snap = snapshot();
        assert!(snap.human_seat().unwrap().is_human);

        let mut spectator = snapshot();
        spectator.self_id = None;
        assert!(spectator.human_seat().is_none());
    }

    #[test]
    fn test_living_by_faction() {
        let mut snap = snapshot();
        assert_eq!(snap.living_by_faction(), (1, 2));

        snap.seats[1].is_alive = false;
        assert_eq!(snap.living_by_faction(), (0, 2));
    }

    #[test]
    fn test_snapshot_serialization_roundtrip() {
        let snap = snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains(r#""phase":"day_vote""#));
        // Unset options are omitted entirely
        assert!(!json.contains("winner"));
        assert!(!json.contains("sheriff_id"));

        let parsed: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snap);
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let snap = snapshot();
        let mut copy = snap.clone();
        copy.seats[0].is_alive = false;
        copy.day = 99;

        assert!(snap.seats[0].is_alive);
        assert_eq!(snap.day, 2);
    }
}
