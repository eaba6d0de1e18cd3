//! Agent speech generation.
//!
//! Non-human seats chatter during discussion. The provider is pluggable so
//! real agent reasoning can replace the canned pool without touching the
//! state machine; the default draws uniformly from a fixed phrase list.

use rand::seq::SliceRandom;
use wolf_events::Seat;

use crate::rng::SimRng;

/// Source of discussion lines for non-human seats.
pub trait SpeechProvider: Send {
    /// Produces one discussion line for `speaker`.
    fn line(&mut self, speaker: &Seat, rng: &mut SimRng) -> String;
}

/// The built-in phrase pool.
const DEFAULT_PHRASES: &[&str] = &[
    "I suspect Player 5 is acting suspiciously quiet.",
    "My logic dictates Player 2 is a Villager.",
    "I agree with the previous statement.",
    "Can we focus on the voting patterns?",
    "I am a Villager, please trust me.",
];

/// Canned speech drawn uniformly from a fixed pool.
#[derive(Debug, Clone)]
pub struct CannedSpeech {
    phrases: Vec<String>,
}

impl CannedSpeech {
    /// Creates a provider with a custom pool. Empty pools fall back to the
    /// default phrases.
    pub fn new(phrases: Vec<String>) -> Self {
        if phrases.is_empty() {
            Self::default()
        } else {
            Self { phrases }
        }
    }

    /// Returns the pool size.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns true if the pool is empty (never true after construction).
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Default for CannedSpeech {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SpeechProvider for CannedSpeech {
    fn line(&mut self, _speaker: &Seat, rng: &mut SimRng) -> String {
        self.phrases
            .choose(&mut rng.0)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wolf_events::Role;

    fn speaker() -> Seat {
        Seat::new(3, "Agent-102", "", Role::Villager, false)
    }

    #[test]
    fn test_default_pool_size() {
        assert_eq!(CannedSpeech::default().len(), 5);
    }

    #[test]
    fn test_line_comes_from_pool() {
        let mut provider = CannedSpeech::default();
        let mut rng = SimRng::seed_from_u64(7);

        for _ in 0..20 {
            let line = provider.line(&speaker(), &mut rng);
            assert!(DEFAULT_PHRASES.contains(&line.as_str()));
        }
    }

    #[test]
    fn test_line_is_deterministic_under_seed() {
        let mut a = CannedSpeech::default();
        let mut b = CannedSpeech::default();
        let mut rng_a = SimRng::seed_from_u64(11);
        let mut rng_b = SimRng::seed_from_u64(11);

        for _ in 0..10 {
            assert_eq!(a.line(&speaker(), &mut rng_a), b.line(&speaker(), &mut rng_b));
        }
    }

    #[test]
    fn test_empty_pool_falls_back_to_default() {
        let provider = CannedSpeech::new(Vec::new());
        assert_eq!(provider.len(), 5);
    }

    #[test]
    fn test_custom_pool() {
        let mut provider = CannedSpeech::new(vec!["Howl.".to_string()]);
        let mut rng = SimRng::seed_from_u64(1);
        assert_eq!(provider.line(&speaker(), &mut rng), "Howl.");
    }
}
