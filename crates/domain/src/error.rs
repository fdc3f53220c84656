//! Unified error type for the domain layer
//!
//! Provides a single error enum for all domain operations, enabling
//! consistent error handling without forcing callers to use String or
//! anyhow. Every failure here is a recoverable, caller-expected condition:
//! the domain never panics on an out-of-range argument and never swallows a
//! validation failure.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid constructor arguments)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Negative amount passed to `take_damage`
    #[error("Damage cannot be negative: {amount}")]
    InvalidDamage { amount: i32 },

    /// Negative amount passed to `heal`
    #[error("Healing cannot be negative: {amount}")]
    InvalidHeal { amount: i32 },

    /// A dragon tried to breathe fire without enough fire power
    #[error("Not enough fire power to breathe fire: {current} (need {required})")]
    LowFirePower { current: i32, required: i32 },

    /// An elf tried to cast a spell without enough mana
    #[error("Not enough mana to cast a spell: {current} (need {required})")]
    LowMana { current: i32, required: i32 },

    /// An orc tried to go berserk without enough rage
    #[error("Not enough rage to go berserk: {current} (need {required})")]
    LowRage { current: i32, required: i32 },
}

impl DomainError {
    /// Creates a validation error for constructor contract violations.
    ///
    /// Use this when domain invariants are violated at construction time:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    /// - A birth date lies in the future
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for the insufficient-resource kinds a caller can clear by
    /// restoring the actor's resource and retrying.
    pub fn is_resource_shortage(&self) -> bool {
        matches!(
            self,
            Self::LowFirePower { .. } | Self::LowMana { .. } | Self::LowRage { .. }
        )
    }
}
