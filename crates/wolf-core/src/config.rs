//! Engine configuration.
//!
//! All timing and pacing knobs are loaded from a TOML file with sensible
//! sensible defaults: 5s announce, 30s discussion,
//! 15s vote, 10s night, one tick per second, 0.2 chatter probability.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use wolf_events::{Phase, SEAT_COUNT};

use crate::error::ConfigError;

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seconds in the day-announce phase
    pub announce_secs: u32,
    /// Seconds in the discussion phase
    pub discuss_secs: u32,
    /// Seconds in the vote phase
    pub vote_secs: u32,
    /// Seconds in each night phase
    pub night_secs: u32,
    /// Per-tick probability of agent chatter during discussion, in [0, 1]
    pub chatter_probability: f32,
    /// Wall-clock milliseconds between scheduler ticks
    pub tick_interval_ms: u64,
    /// The human-controlled seat id, or None for spectator mode
    pub human_seat: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            announce_secs: 5,
            discuss_secs: 30,
            vote_secs: 15,
            night_secs: 10,
            chatter_probability: 0.2,
            tick_interval_ms: 1000,
            human_seat: Some(1),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Returns a spectator-mode configuration (no human seat).
    pub fn spectator() -> Self {
        Self {
            human_seat: None,
            ..Self::default()
        }
    }

    /// Checks the configuration for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.announce_secs == 0
            || self.discuss_secs == 0
            || self.vote_secs == 0
            || self.night_secs == 0
        {
            return Err(ConfigError::Invalid(
                "phase durations must be at least 1 second".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.chatter_probability) {
            return Err(ConfigError::Invalid(format!(
                "chatter_probability {} outside [0, 1]",
                self.chatter_probability
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be nonzero".to_string(),
            ));
        }
        if let Some(seat) = self.human_seat {
            if seat == 0 || seat as usize > SEAT_COUNT {
                return Err(ConfigError::Invalid(format!(
                    "human_seat {} outside 1..={}",
                    seat, SEAT_COUNT
                )));
            }
        }
        Ok(())
    }

    /// Returns the countdown value used on entry into `phase`.
    ///
    /// `GameOver` has no countdown; the clock parks at zero.
    pub fn phase_duration(&self, phase: Phase) -> u32 {
        match phase {
            Phase::DayAnnounce => self.announce_secs,
            Phase::DayDiscuss => self.discuss_secs,
            Phase::DayVote => self.vote_secs,
            Phase::NightWolf | Phase::NightWitch | Phase::NightSeer | Phase::NightHunter => {
                self.night_secs
            }
            Phase::GameOver => 0,
        }
    }
}

impl FromStr for EngineConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Returns the default configuration as a TOML string.
pub fn default_config_toml() -> String {
    // Defaults are all plain scalars; serialization cannot fail.
    toml::to_string_pretty(&EngineConfig::default()).unwrap_or_default()
}
