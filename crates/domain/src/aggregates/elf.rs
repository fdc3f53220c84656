//! Elf variant - mana and spellcasting

use crate::aggregates::creature::Creature;
use crate::error::DomainError;
use crate::events::{DamageOutcome, RestoreOutcome};
use crate::value_objects::{BirthDate, CreatureKind, CreatureName, Meter};

/// Mana ceiling.
pub const MAX_MANA: i32 = 50;

/// Mana spent per spell.
pub const SPELL_MANA_COST: i32 = 5;

/// Damage dealt by a spell.
pub const SPELL_DAMAGE: i32 = 10;

/// An elf: a creature with a bounded mana pool and a damaging spell.
#[derive(Debug, Clone)]
pub struct Elf {
    creature: Creature,
    mana: Meter,
}

impl Elf {
    /// Create a new elf.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the creature fields are invalid
    /// or `mana` lies outside `[0, 50]`.
    pub fn new(
        name: CreatureName,
        date_of_birth: BirthDate,
        health: i32,
        mana: i32,
    ) -> Result<Self, DomainError> {
        if !(0..=MAX_MANA).contains(&mana) {
            return Err(DomainError::validation(format!(
                "Mana out of range (0..={MAX_MANA}): {mana}"
            )));
        }
        Ok(Self {
            creature: Creature::new(name, date_of_birth, health)?,
            mana: Meter::new(mana, MAX_MANA)?,
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

    /// Returns the current mana in `[0, 50]`.
    #[inline]
    pub fn mana(&self) -> i32 {
        self.mana.current()
    }

    /// Cast a spell at `target`: spend [`SPELL_MANA_COST`] mana, then deal
    /// [`SPELL_DAMAGE`] damage.
    ///
    /// The action is atomic: on error nothing is mutated. The target's
    /// damage outcome is propagated unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LowMana` if mana is below the cost.
    pub fn cast_spell(&mut self, target: &mut Creature) -> Result<DamageOutcome, DomainError> {
        if self.mana.current() < SPELL_MANA_COST {
            return Err(DomainError::LowMana {
                current: self.mana.current(),
                required: SPELL_MANA_COST,
            });
        }
        self.mana.subtract(SPELL_MANA_COST);
        target.take_damage(SPELL_DAMAGE)
    }

    /// Refill mana, clamped at [`MAX_MANA`]. Independent of combat; callable
    /// at any time.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is negative.
    pub fn restore_mana(&mut self, amount: i32) -> Result<RestoreOutcome, DomainError> {
        if amount < 0 {
            return Err(DomainError::validation(format!(
                "Restore amount cannot be negative: {amount}"
            )));
        }
        if self.mana.is_full() {
            return Ok(RestoreOutcome::AlreadyFull);
        }
        let amount_restored = self.mana.add(amount);
        Ok(RestoreOutcome::Restored {
            amount_restored,
            new_level: self.mana.current(),
        })
    }

    /// Base creature summary with the mana field appended.
    pub fn summary(&self) -> String {
        format!(
            "{}, Mana={}",
            self.creature.summary_as(CreatureKind::Elf),
            self.mana.current()
        )
    }
}
