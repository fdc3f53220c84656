//! Creature kind tags
//!
//! Provides type safety for runtime kind checks instead of comparing class
//! name strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of creature kinds.
///
/// `Creature` is the base entity; the other three are the specialized
/// variants. Used for the `Class=` field of summaries and for dispatching
/// on a roster member without knowing its concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    Creature,
    Dragon,
    Elf,
    Orc,
}

impl CreatureKind {
    /// Returns the kind name as used in summaries (e.g., "Dragon").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creature => "Creature",
            Self::Dragon => "Dragon",
            Self::Elf => "Elf",
            Self::Orc => "Orc",
        }
    }

    /// Returns the three specialized variants.
    pub fn variants() -> [CreatureKind; 3] {
        [Self::Dragon, Self::Elf, Self::Orc]
    }
}

impl fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CreatureKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "creature" => Ok(Self::Creature),
            "dragon" => Ok(Self::Dragon),
            "elf" => Ok(Self::Elf),
            "orc" => Ok(Self::Orc),
            _ => Err(()),
        }
    }
}
