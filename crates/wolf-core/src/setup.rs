//! Roster Generation
//!
//! Deals the fixed role deck across nine seats with a seeded shuffle and
//! builds each seat's identity. Seat 1 is the human seat in the
//! human-challenge configuration; agent seats are named Agent-101 upward.

use rand::seq::SliceRandom;
use wolf_events::{role_deck, Seat};

use crate::config::EngineConfig;
use crate::rng::SimRng;

/// Builds a fresh nine-seat roster.
///
/// Role assignment is a uniform random permutation of the fixed role
/// multiset. Exactly one seat is human when `config.human_seat` is set,
/// zero in spectator mode.
pub fn build_roster(config: &EngineConfig, rng: &mut SimRng) -> Vec<Seat> {
    let mut roles = role_deck();
    roles.shuffle(&mut rng.0);

    roles
        .iter()
        .enumerate()
        .map(|(i, &role)| {
            let id = i as u32 + 1;
            let is_human = config.human_seat == Some(id);
            let display_name = if is_human {
                "You (Human)".to_string()
            } else {
                format!("Agent-{}", 100 + i)
            };
            let avatar_url = format!("https://picsum.photos/seed/{}/100/100", 50 + i);
            Seat::new(id, display_name, avatar_url, role, is_human)
        })
        .collect()
}
