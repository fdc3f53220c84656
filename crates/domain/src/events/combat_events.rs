//! Mutation outcomes for creature state changes
//!
//! These enums communicate what happened when health or a variant resource
//! was modified, allowing callers to react without re-reading state. They
//! are return values, not errors: a hit that clamps at zero is still a
//! successful hit.

use serde::{Deserialize, Serialize};

/// Outcome of applying damage to a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// Damage applied, creature still standing
    Wounded {
        damage_dealt: i32,
        remaining_health: i32,
    },
    /// This hit brought health down to zero
    Slain { damage_dealt: i32 },
    /// Target was already at zero health; the hit changed nothing.
    /// Dead creatures stay legal targets, so this is a success, not an error.
    AlreadyDown,
}

impl DamageOutcome {
    /// Health actually removed by the hit, after clamping.
    pub fn damage_dealt(&self) -> i32 {
        match self {
            Self::Wounded { damage_dealt, .. } | Self::Slain { damage_dealt } => *damage_dealt,
            Self::AlreadyDown => 0,
        }
    }
}

/// Outcome of healing a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealOutcome {
    /// Healing applied
    Healed { amount_healed: i32, new_health: i32 },
    /// Healing brought the creature back from zero health
    Revived { new_health: i32 },
    /// Already at full health
    AlreadyFull,
}

/// Outcome of restoring a variant resource (fire power or mana)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestoreOutcome {
    /// Resource raised, clamped at the variant's ceiling
    Restored { amount_restored: i32, new_level: i32 },
    /// Already at the ceiling
    AlreadyFull,
}
