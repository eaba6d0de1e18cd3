//! Role and Faction Types
//!
//! The fixed role multiset for a nine-seat game and the two win sides.
//!
//! # Example
//!
//! ```
//! use wolf_events::{role_deck, Faction, Role};
//!
//! let deck = role_deck();
//! assert_eq!(deck.len(), 9);
//! assert_eq!(Role::Seer.faction(), Some(Faction::Villagers));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of seats in the standard configuration.
pub const SEAT_COUNT: usize = 9;

/// A seat's hidden role.
///
/// `Unknown` is the masking value used when a role is hidden from the
/// observer; it is never dealt from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Werewolf,
    Villager,
    Seer,
    Witch,
    Hunter,
    Unknown,
}

impl Role {
    /// Returns the win side this role belongs to, or `None` for `Unknown`.
    pub fn faction(self) -> Option<Faction> {
        match self {
            Role::Werewolf => Some(Faction::Werewolves),
            Role::Villager | Role::Seer | Role::Witch | Role::Hunter => Some(Faction::Villagers),
            Role::Unknown => None,
        }
    }

    /// Returns true if this role hunts at night.
    pub fn is_werewolf(self) -> bool {
        matches!(self, Role::Werewolf)
    }

    /// Returns all dealable role variants.
    pub fn all() -> &'static [Role] {
        &[Role::Werewolf, Role::Villager, Role::Seer, Role::Witch, Role::Hunter]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Werewolf => write!(f, "werewolf"),
            Role::Villager => write!(f, "villager"),
            Role::Seer => write!(f, "seer"),
            Role::Witch => write!(f, "witch"),
            Role::Hunter => write!(f, "hunter"),
            Role::Unknown => write!(f, "unknown"),
        }
    }
}

/// Error type for parsing a [`Role`] from a string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseRoleError(pub String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid role: '{}'", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "werewolf" => Ok(Role::Werewolf),
            "villager" => Ok(Role::Villager),
            "seer" => Ok(Role::Seer),
            "witch" => Ok(Role::Witch),
            "hunter" => Ok(Role::Hunter),
            "unknown" => Ok(Role::Unknown),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// One of the two win sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Werewolves,
    Villagers,
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Faction::Werewolves => write!(f, "werewolves"),
            Faction::Villagers => write!(f, "villagers"),
        }
    }
}

/// Returns the fixed role deck for a nine-seat game, in canonical order.
///
/// The deck is shuffled by the engine at game start; the multiset itself
/// never changes: 3 werewolves, 3 villagers, 1 seer, 1 witch, 1 hunter.
pub fn role_deck() -> [Role; SEAT_COUNT] {
    [
        Role::Werewolf,
        Role::Werewolf,
        Role::Werewolf,
        Role::Villager,
        Role::Villager,
        Role::Villager,
        Role::Seer,
        Role::Witch,
        Role::Hunter,
    ]
}
