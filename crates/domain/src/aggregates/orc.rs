//! Orc variant - rage and berserk attacks
//!
//! Rage differs from the other resources: going berserk *builds* rage
//! instead of spending it, and the damage tier is chosen from the boosted
//! value. There is no restore operation; rage only rises through battle.

use crate::aggregates::creature::Creature;
use crate::error::DomainError;
use crate::events::DamageOutcome;
use crate::value_objects::{BirthDate, CreatureKind, CreatureName, Meter};

/// Rage ceiling.
pub const MAX_RAGE: i32 = 30;

/// Minimum rage required to go berserk.
pub const MIN_RAGE_TO_BERSERK: i32 = 5;

/// Rage gained by each berserk attack.
pub const RAGE_PER_BERSERK: i32 = 5;

/// Post-increment rage above this deals the frenzied damage tier.
pub const FRENZY_THRESHOLD: i32 = 20;

/// Damage dealt by a berserk attack at or below the frenzy threshold.
pub const BERSERK_DAMAGE: i32 = 15;

/// Damage dealt by a berserk attack above the frenzy threshold.
pub const FRENZIED_BERSERK_DAMAGE: i32 = 30;

/// An orc: a creature whose berserk attacks feed on accumulated rage.
#[derive(Debug, Clone)]
pub struct Orc {
    creature: Creature,
    rage: Meter,
}

impl Orc {
    /// Create a new orc.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the creature fields are invalid
    /// or `rage` lies outside `[0, 30]`.
    pub fn new(
        name: CreatureName,
        date_of_birth: BirthDate,
        health: i32,
        rage: i32,
    ) -> Result<Self, DomainError> {
        if !(0..=MAX_RAGE).contains(&rage) {
            return Err(DomainError::validation(format!(
                "Rage out of range (0..={MAX_RAGE}): {rage}"
            )));
        }
        Ok(Self {
            creature: Creature::new(name, date_of_birth, health)?,
            rage: Meter::new(rage, MAX_RAGE)?,
        })
    }

    /// The embedded base creature (identity, health, age).
    #[inline]
    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    /// Mutable access to the base creature, e.g. for use as a combat target.
    #[inline]
    pub fn creature_mut(&mut self) -> &mut Creature {
        &mut self.creature
    }

    /// Returns the current rage in `[0, 30]`.
    #[inline]
    pub fn rage(&self) -> i32 {
        self.rage.current()
    }

    /// Go berserk at `target`: gain [`RAGE_PER_BERSERK`] rage (clamped at
    /// [`MAX_RAGE`]), then deal [`FRENZIED_BERSERK_DAMAGE`] damage if the
    /// boosted rage exceeds [`FRENZY_THRESHOLD`], else [`BERSERK_DAMAGE`].
    ///
    /// The action is atomic: on error nothing is mutated. The target's
    /// damage outcome is propagated unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LowRage` if rage is below
    /// [`MIN_RAGE_TO_BERSERK`].
    pub fn berserk(&mut self, target: &mut Creature) -> Result<DamageOutcome, DomainError> {
        if self.rage.current() < MIN_RAGE_TO_BERSERK {
            return Err(DomainError::LowRage {
                current: self.rage.current(),
                required: MIN_RAGE_TO_BERSERK,
            });
        }
        // Rage builds before the strike; the damage tier reads the boosted value.
        self.rage.add(RAGE_PER_BERSERK);
        let damage = if self.rage.current() > FRENZY_THRESHOLD {
            FRENZIED_BERSERK_DAMAGE
        } else {
            BERSERK_DAMAGE
        };
        target.take_damage(damage)
    }

    /// Base creature summary with the rage field appended.
    pub fn summary(&self) -> String {
        format!(
            "{}, Rage={}",
            self.creature.summary_as(CreatureKind::Orc),
            self.rage.current()
        )
    }
}
