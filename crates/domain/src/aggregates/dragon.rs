//! Dragon variant - fire power and breath attacks

use crate::aggregates::creature::Creature;
use crate::error::DomainError;
use crate::events::{DamageOutcome, RestoreOutcome};
use crate::value_objects::{BirthDate, CreatureKind, CreatureName, Meter};

/// Fire power ceiling.
pub const MAX_FIRE_POWER: i32 = 100;

/// Fire power spent per breath attack.
pub const FIRE_POWER_COST: i32 = 10;

/// Damage dealt by a breath attack.
pub const FIRE_DAMAGE: i32 = 20;

/// A dragon: a creature with a bounded fire power reserve and a breath
/// attack that spends it.
///
/// Fire power is independent of the embedded creature's health; the two
/// gauges never read or write each other.
#[derive(Debug, Clone)]
pub struct Dragon {
    creature: Creature,
    fire_power: Meter,
}

impl Dragon {
    /// Create a new dragon.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the creature fields are invalid
    /// or `fire_power` lies outside `[0, 100]`.
    pub fn new(
        name: CreatureName,
        date_of_birth: BirthDate,
        health: i32,
        fire_power: i32,
    ) -> Result<Self, DomainError> {
        if !(0..=MAX_FIRE_POWER).contains(&fire_power) {
            return Err(DomainError::validation(format!(
                "Fire power out of range (0..={MAX_FIRE_POWER}): {fire_power}"
            )));
        }
        Ok(Self {
            creature: Creature::new(name, date_of_birth, health)?,
            fire_power: Meter::new(fire_power, MAX_FIRE_POWER)?,
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

    /// Returns the current fire power in `[0, 100]`.
    #[inline]
    pub fn fire_power(&self) -> i32 {
        self.fire_power.current()
    }

    /// Breathe fire at `target`: spend [`FIRE_POWER_COST`] fire power, then
    /// deal [`FIRE_DAMAGE`] damage.
    ///
    /// The action is atomic: on error nothing is mutated. The target's
    /// damage outcome is propagated unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LowFirePower` if fire power is below the cost.
    pub fn breathe_fire(&mut self, target: &mut Creature) -> Result<DamageOutcome, DomainError> {
        if self.fire_power.current() < FIRE_POWER_COST {
            return Err(DomainError::LowFirePower {
                current: self.fire_power.current(),
                required: FIRE_POWER_COST,
            });
        }
        self.fire_power.subtract(FIRE_POWER_COST);
        target.take_damage(FIRE_DAMAGE)
    }

    /// Refill fire power, clamped at [`MAX_FIRE_POWER`]. Independent of
    /// combat; callable at any time.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is negative.
    pub fn restore_fire_power(&mut self, amount: i32) -> Result<RestoreOutcome, DomainError> {
        if amount < 0 {
            return Err(DomainError::validation(format!(
                "Restore amount cannot be negative: {amount}"
            )));
        }
        if self.fire_power.is_full() {
            return Ok(RestoreOutcome::AlreadyFull);
        }
        let amount_restored = self.fire_power.add(amount);
        Ok(RestoreOutcome::Restored {
            amount_restored,
            new_level: self.fire_power.current(),
        })
    }

    /// Base creature summary with the fire power field appended.
    pub fn summary(&self) -> String {
        format!(
            "{}, FirePower={}",
            self.creature.summary_as(CreatureKind::Dragon),
            self.fire_power.current()
        )
    }
}
