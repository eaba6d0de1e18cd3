//! Transcript Types
//!
//! The transcript is the append-only ordered log of narrated events. Entries
//! are never mutated or removed; their order reflects emission order and
//! therefore causal order of simulation events.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::phase::Phase;
use crate::seat::SeatId;

/// Category of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    System,
    Speech,
    Action,
    Alert,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogKind::System => write!(f, "system"),
            LogKind::Speech => write!(f, "speech"),
            LogKind::Action => write!(f, "action"),
            LogKind::Alert => write!(f, "alert"),
        }
    }
}

/// A single transcript entry.
///
/// `speaker` is present only for speech/action entries attributable to a
/// seat. `timestamp` is the simulation tick at emission; it is strictly
/// non-decreasing across the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier (e.g., "log_00000042")
    pub id: String,
    /// Day counter at time of emission
    pub day: u32,
    /// Phase active at time of emission
    pub phase: Phase,
    /// Seat the entry is attributed to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<SeatId>,
    /// Free text
    pub content: String,
    /// Entry category
    pub kind: LogKind,
    /// Simulation tick at emission
    pub timestamp: u64,
}

impl LogEntry {
    /// Serializes the entry to a JSON line (for JSONL format).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an entry from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Generates a log entry ID with the given sequence number.
pub fn generate_log_id(sequence: u64) -> String {
    format!("log_{:08}", sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> LogEntry {
        LogEntry {
            id: generate_log_id(1),
            day: 1,
            phase: Phase::DayDiscuss,
            speaker: Some(SeatId(5)),
            content: "I am a Villager, please trust me.".to_string(),
            kind: LogKind::Speech,
            timestamp: 12,
        }
    }

    #[test]
    fn test_log_kind_serialization() {
        assert_eq!(serde_json::to_string(&LogKind::System).unwrap(), r#""system""#);
        assert_eq!(serde_json::to_string(&LogKind::Speech).unwrap(), r#""speech""#);
        assert_eq!(serde_json::to_string(&LogKind::Action).unwrap(), r#""action""#);
        assert_eq!(serde_json::to_string(&LogKind::Alert).unwrap(), r#""alert""#);
    }

    #[test]
    fn test_generate_log_id() {
        assert_eq!(generate_log_id(1), "log_00000001");
        assert_eq!(generate_log_id(42371), "log_00042371");
    }

    #[test]
    fn test_log_entry_serialization() {
        let json = serde_json::to_string(&entry()).unwrap();
        assert!(json.contains("log_00000001"));
        assert!(json.contains(r#""phase":"day_discuss""#));
        assert!(json.contains(r#""speaker":5"#));

        let parsed: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry());
    }

    #[test]
    fn test_speaker_omitted_when_absent() {
        let mut system = entry();
        system.speaker = None;
        system.kind = LogKind::System;

        let json = serde_json::to_string(&system).unwrap();
        assert!(!json.contains("speaker"));
    }

    #[test]
    fn test_log_entry_jsonl() {
        let line = entry().to_jsonl().unwrap();
        assert!(!line.contains('\n'));

        let parsed = LogEntry::from_jsonl(&line).unwrap();
        assert_eq!(parsed.id, "log_00000001");
    }
}
