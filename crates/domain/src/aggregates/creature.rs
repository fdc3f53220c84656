//! Creature aggregate - the base entity every variant embeds

use chrono::{NaiveDate, Utc};

use crate::error::DomainError;
use crate::events::{DamageOutcome, HealOutcome};
use crate::ids::CreatureId;
use crate::value_objects::{BirthDate, CreatureKind, CreatureName, Meter};

/// Health ceiling for every creature.
pub const MAX_HEALTH: i32 = 100;

/// Minimum health at construction. A creature cannot be born dead; health 0
/// is reachable only through damage after construction.
pub const MIN_STARTING_HEALTH: i32 = 1;

/// A fantasy creature with a name, birth date, and bounded health.
///
/// # Invariants
///
/// - `0 <= health <= 100` at all times. Health 0 means dead, but the
///   creature remains queryable and a legal combat target; death does not
///   destroy the entity.
/// - The name is non-empty and trimmed (enforced by [`CreatureName`]).
/// - The birth date never lies in the future (enforced by [`BirthDate`]).
///
/// # Example
///
/// ```
/// use bestiary_domain::{BirthDate, Creature, CreatureName, DamageOutcome};
/// use chrono::NaiveDate;
///
/// let born = NaiveDate::from_ymd_opt(2020, 3, 10).unwrap();
/// let name = CreatureName::new("Bramble").unwrap();
/// let mut creature = Creature::new(name, BirthDate::new(born).unwrap(), 25).unwrap();
///
/// match creature.take_damage(20).unwrap() {
///     DamageOutcome::Wounded { remaining_health, .. } => assert_eq!(remaining_health, 5),
///     _ => panic!("expected Wounded"),
/// }
/// assert!(creature.is_alive());
/// ```
#[derive(Debug, Clone)]
pub struct Creature {
    id: CreatureId,
    name: CreatureName,
    date_of_birth: BirthDate,
    health: Meter,
}

impl Creature {
    /// Create a new creature.
    ///
    /// The `name` and `date_of_birth` parameters are pre-validated types;
    /// their rules were enforced when they were constructed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `health` lies outside
    /// `[1, 100]`.
    pub fn new(
        name: CreatureName,
        date_of_birth: BirthDate,
        health: i32,
    ) -> Result<Self, DomainError> {
        if !(MIN_STARTING_HEALTH..=MAX_HEALTH).contains(&health) {
            return Err(DomainError::validation(format!(
                "Health out of range ({MIN_STARTING_HEALTH}..={MAX_HEALTH}): {health}"
            )));
        }
        Ok(Self {
            id: CreatureId::new(),
            name,
            date_of_birth,
            health: Meter::new(health, MAX_HEALTH)?,
        })
    }

    /// Returns the creature's unique identifier.
    #[inline]
    pub fn id(&self) -> CreatureId {
        self.id
    }

    /// Returns the creature's name.
    #[inline]
    pub fn name(&self) -> &CreatureName {
        &self.name
    }

    /// Returns the creature's birth date, by value.
    #[inline]
    pub fn date_of_birth(&self) -> BirthDate {
        self.date_of_birth
    }

    /// Returns the current health in `[0, 100]`.
    #[inline]
    pub fn health(&self) -> i32 {
        self.health.current()
    }

    /// Returns true if health is above zero.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    /// Reduce health by `amount`, clamping at zero.
    ///
    /// A zero amount is a valid no-op. Hitting an already-dead creature is
    /// allowed and reported as [`DamageOutcome::AlreadyDown`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDamage` if `amount` is negative; health
    /// is left unchanged.
    pub fn take_damage(&mut self, amount: i32) -> Result<DamageOutcome, DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidDamage { amount });
        }
        if self.health.is_empty() {
            return Ok(DamageOutcome::AlreadyDown);
        }
        let damage_dealt = self.health.subtract(amount);
        if self.health.is_empty() {
            Ok(DamageOutcome::Slain { damage_dealt })
        } else {
            Ok(DamageOutcome::Wounded {
                damage_dealt,
                remaining_health: self.health.current(),
            })
        }
    }

    /// Raise health by `amount`, clamping at [`MAX_HEALTH`].
    ///
    /// Healing a dead creature is allowed and revives it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHeal` if `amount` is negative; health is
    /// left unchanged.
    pub fn heal(&mut self, amount: i32) -> Result<HealOutcome, DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidHeal { amount });
        }
        if self.health.is_full() {
            return Ok(HealOutcome::AlreadyFull);
        }
        let was_down = self.health.is_empty();
        let amount_healed = self.health.add(amount);
        if was_down && amount_healed > 0 {
            Ok(HealOutcome::Revived {
                new_health: self.health.current(),
            })
        } else {
            Ok(HealOutcome::Healed {
                amount_healed,
                new_health: self.health.current(),
            })
        }
    }

    /// Age in whole years as of the system clock.
    pub fn age_years(&self) -> u32 {
        self.age_years_on(Utc::now().date_naive())
    }

    /// Age in whole years as of an explicit date.
    pub fn age_years_on(&self, today: NaiveDate) -> u32 {
        self.date_of_birth.age_years(today)
    }

    /// One-line human-readable rendering: kind, name, birth date, age, and
    /// health, in that order. Variants append their resource field.
    ///
    /// Display contract only; field order and presence are stable but no
    /// parser depends on the format.
    pub fn summary(&self) -> String {
        self.summary_as(CreatureKind::Creature)
    }

    pub(crate) fn summary_as(&self, kind: CreatureKind) -> String {
        format!(
            "Class={}, Name={}, DOB={}, AgeYears={}, Health={}",
            kind,
            self.name,
            self.date_of_birth,
            self.age_years(),
            self.health.current()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn creature(health: i32) -> Creature {
        let name = CreatureName::new("Bramble").unwrap();
        let born = BirthDate::new_at(ymd(2020, 3, 10), ymd(2020, 3, 10)).unwrap();
        Creature::new(name, born, health).unwrap()
    }

    #[test]
    fn test_construction_in_range() {
        let c = creature(90);
        assert_eq!(c.health(), 90);
        assert!(c.is_alive());
        assert_eq!(c.name().as_str(), "Bramble");
        assert_eq!(c.date_of_birth().date(), ymd(2020, 3, 10));
    }

    #[test]
    fn test_construction_bounds() {
        let name = CreatureName::new("Bramble").unwrap();
        let born = BirthDate::new_at(ymd(2020, 3, 10), ymd(2020, 3, 10)).unwrap();
        // born dead is not allowed
        assert!(Creature::new(name.clone(), born, 0).is_err());
        assert!(Creature::new(name.clone(), born, 101).is_err());
        assert!(Creature::new(name.clone(), born, -5).is_err());
        assert!(Creature::new(name.clone(), born, 1).is_ok());
        assert!(Creature::new(name, born, 100).is_ok());
    }

    #[test]
    fn test_each_creature_gets_its_own_id() {
        assert_ne!(creature(50).id(), creature(50).id());
    }

    #[test]
    fn test_take_damage_wounds() {
        let mut c = creature(25);
        let outcome = c.take_damage(20).unwrap();
        assert_eq!(
            outcome,
            DamageOutcome::Wounded {
                damage_dealt: 20,
                remaining_health: 5
            }
        );
        assert_eq!(c.health(), 5);
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut c = creature(3);
        let outcome = c.take_damage(10).unwrap();
        assert_eq!(outcome, DamageOutcome::Slain { damage_dealt: 3 });
        assert_eq!(c.health(), 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_take_damage_zero_is_no_op() {
        let mut c = creature(25);
        let outcome = c.take_damage(0).unwrap();
        assert_eq!(
            outcome,
            DamageOutcome::Wounded {
                damage_dealt: 0,
                remaining_health: 25
            }
        );
        assert_eq!(c.health(), 25);
    }

    #[test]
    fn test_negative_damage_rejected_without_mutation() {
        let mut c = creature(25);
        let err = c.take_damage(-1).unwrap_err();
        assert_eq!(err, DomainError::InvalidDamage { amount: -1 });
        assert_eq!(c.health(), 25);
    }

    #[test]
    fn test_dead_creature_stays_a_legal_target() {
        let mut c = creature(5);
        c.take_damage(5).unwrap();
        assert_eq!(c.take_damage(30).unwrap(), DamageOutcome::AlreadyDown);
        assert_eq!(c.health(), 0);
    }

    #[test]
    fn test_heal_clamps_at_ceiling() {
        let mut c = creature(95);
        let outcome = c.heal(20).unwrap();
        assert_eq!(
            outcome,
            HealOutcome::Healed {
                amount_healed: 5,
                new_health: 100
            }
        );
        assert_eq!(c.heal(1).unwrap(), HealOutcome::AlreadyFull);
        assert_eq!(c.health(), 100);
    }

    #[test]
    fn test_negative_heal_rejected_without_mutation() {
        let mut c = creature(25);
        let err = c.heal(-1).unwrap_err();
        assert_eq!(err, DomainError::InvalidHeal { amount: -1 });
        assert_eq!(c.health(), 25);
    }

    #[test]
    fn test_heal_revives_the_dead() {
        let mut c = creature(5);
        c.take_damage(50).unwrap();
        assert!(!c.is_alive());
        let outcome = c.heal(10).unwrap();
        assert_eq!(outcome, HealOutcome::Revived { new_health: 10 });
        assert!(c.is_alive());
    }

    #[test]
    fn test_health_stays_bounded_over_sequences() {
        let mut c = creature(50);
        for (damage, heal) in [(80, 200), (0, 0), (100, 3), (7, 150)] {
            c.take_damage(damage).unwrap();
            assert!((0..=MAX_HEALTH).contains(&c.health()));
            c.heal(heal).unwrap();
            assert!((0..=MAX_HEALTH).contains(&c.health()));
        }
    }

    #[test]
    fn test_age_derivation() {
        let c = creature(50);
        assert_eq!(c.age_years_on(ymd(2021, 3, 9)), 0);
        assert_eq!(c.age_years_on(ymd(2021, 3, 10)), 1);
        assert_eq!(c.age_years_on(ymd(2021, 3, 11)), 1);
    }

    #[test]
    fn test_summary_field_order() {
        let c = creature(90);
        let summary = c.summary();
        assert!(summary.starts_with("Class=Creature, Name=Bramble, DOB=2020-03-10, AgeYears="));
        assert!(summary.ends_with("Health=90"));
    }
}
