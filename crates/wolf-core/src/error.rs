//! Engine error types.
//!
//! There are no fatal errors in normal operation; the only terminal
//! condition is the `GameOver` phase, which is an outcome, not a failure.

use thiserror::Error;
use wolf_events::SeatId;

/// Errors loading or validating an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors validating a submitted human decision.
///
/// The valid parts of a decision are always applied before one of these is
/// surfaced; a bad vote target never discards the accompanying speech.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    #[error("no human seat is configured for this session")]
    NoHumanSeat,
    #[error("seat {0} does not exist")]
    UnknownSeat(SeatId),
    #[error("seat {0} is no longer alive")]
    DeadSeat(SeatId),
}

/// A listener failure during broadcast.
///
/// Observer failures are isolated per listener and reported; they never
/// abort a tick or prevent other listeners from receiving the update.
#[derive(Debug, Error)]
#[error("observer {listener_id} panicked during broadcast")]
pub struct ObserverError {
    pub listener_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_error_display() {
        assert_eq!(
            DecisionError::UnknownSeat(SeatId(12)).to_string(),
            "seat 12 does not exist"
        );
        assert_eq!(
            DecisionError::DeadSeat(SeatId(4)).to_string(),
            "seat 4 is no longer alive"
        );
        assert_eq!(
            DecisionError::NoHumanSeat.to_string(),
            "no human seat is configured for this session"
        );
    }

    #[test]
    fn test_observer_error_display() {
        let err = ObserverError { listener_id: 3 };
        assert_eq!(err.to_string(), "observer 3 panicked during broadcast");
    }

    #[test]
    fn test_config_error_from_toml() {
        let err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let config_err: ConfigError = err.into();
        assert!(config_err.to_string().contains("failed to parse config"));
    }
}
