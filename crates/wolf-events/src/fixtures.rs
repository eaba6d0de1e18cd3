//! Sample data fixtures for testing.
//!
//! This module provides ready-made test data for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // wolf-events = { path = "../wolf-events", features = ["test-fixtures"] }
//!
//! use wolf_events::fixtures;
//!
//! let roster = fixtures::sample_roster();
//! let snapshot = fixtures::sample_snapshot();
//! ```

use crate::{
    generate_log_id, GameSnapshot, LogEntry, LogKind, Phase, Role, Seat, SeatId,
};

/// Returns a fixed nine-seat roster with seat 1 human.
///
/// Roles are dealt in a known, non-shuffled order so tests can assert
/// against specific seats.
pub fn sample_roster() -> Vec<Seat> {
    let roles = [
        Role::Villager,
        Role::Werewolf,
        Role::Seer,
        Role::Werewolf,
        Role::Villager,
        Role::Witch,
        Role::Werewolf,
        Role::Hunter,
        Role::Villager,
    ];

    roles
        .iter()
        .enumerate()
        .map(|(i, &role)| {
            let id = i as u32 + 1;
            let (name, human) = if i == 0 {
                ("You (Human)".to_string(), true)
            } else {
                (format!("Agent-{}", 100 + i), false)
            };
            Seat::new(
                id,
                name,
                format!("https://picsum.photos/seed/{}/100/100", 50 + i),
                role,
                human,
            )
        })
        .collect()
}

/// Returns a short transcript with one entry of each kind.
pub fn sample_log_entries() -> Vec<LogEntry> {
    vec![
        LogEntry {
            id: generate_log_id(1),
            day: 1,
            phase: Phase::DayAnnounce,
            speaker: None,
            content: "Game Initialized. Day 1 begins.".to_string(),
            kind: LogKind::System,
            timestamp: 0,
        },
        LogEntry {
            id: generate_log_id(2),
            day: 1,
            phase: Phase::DayDiscuss,
            speaker: Some(SeatId(3)),
            content: "I agree with the previous statement.".to_string(),
            kind: LogKind::Speech,
            timestamp: 8,
        },
        LogEntry {
            id: generate_log_id(3),
            day: 1,
            phase: Phase::DayVote,
            speaker: Some(SeatId(1)),
            content: "Vote cast against Player 4".to_string(),
            kind: LogKind::Action,
            timestamp: 37,
        },
        LogEntry {
            id: generate_log_id(4),
            day: 1,
            phase: Phase::DayVote,
            speaker: None,
            content: "Player 4 was voted out!".to_string(),
            kind: LogKind::Alert,
            timestamp: 50,
        },
    ]
}

/// Returns a mid-game snapshot: day 1, vote phase, seat 4 eliminated.
pub fn sample_snapshot() -> GameSnapshot {
    let mut seats = sample_roster();
    seats[3].is_alive = false;

    GameSnapshot {
        day: 1,
        phase: Phase::DayVote,
        seats,
        transcript: sample_log_entries(),
        countdown: 10,
        winner: None,
        self_id: Some(SeatId(1)),
        sheriff_id: None,
        tick: 50,
    }
}
