//! Closed sum over the three creature variants

use crate::aggregates::{Creature, Dragon, Elf, Orc};
use crate::value_objects::CreatureKind;

/// Any of the three specialized creature variants.
///
/// Lets callers hold a mixed roster and treat each member as a plain
/// [`Creature`] for health purposes without knowing the concrete variant.
/// Matching on it replaces runtime type checks: the set of variants is
/// closed, so dispatch is exhaustive by construction.
#[derive(Debug, Clone)]
pub enum AnyCreature {
    Dragon(Dragon),
    Elf(Elf),
    Orc(Orc),
}

impl AnyCreature {
    /// The concrete variant's kind tag.
    pub fn kind(&self) -> CreatureKind {
        match self {
            Self::Dragon(_) => CreatureKind::Dragon,
            Self::Elf(_) => CreatureKind::Elf,
            Self::Orc(_) => CreatureKind::Orc,
        }
    }

    /// The embedded base creature.
    pub fn creature(&self) -> &Creature {
        match self {
            Self::Dragon(dragon) => dragon.creature(),
            Self::Elf(elf) => elf.creature(),
            Self::Orc(orc) => orc.creature(),
        }
    }

    /// Mutable access to the base creature, e.g. for use as a combat target.
    pub fn creature_mut(&mut self) -> &mut Creature {
        match self {
            Self::Dragon(dragon) => dragon.creature_mut(),
            Self::Elf(elf) => elf.creature_mut(),
            Self::Orc(orc) => orc.creature_mut(),
        }
    }

    /// The variant's summary, resource field included.
    pub fn summary(&self) -> String {
        match self {
            Self::Dragon(dragon) => dragon.summary(),
            Self::Elf(elf) => elf.summary(),
            Self::Orc(orc) => orc.summary(),
        }
    }
}

impl From<Dragon> for AnyCreature {
    fn from(dragon: Dragon) -> Self {
        Self::Dragon(dragon)
    }
}

impl From<Elf> for AnyCreature {
    fn from(elf: Elf) -> Self {
        Self::Elf(elf)
    }
}

impl From<Orc> for AnyCreature {
    fn from(orc: Orc) -> Self {
        Self::Orc(orc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{BirthDate, CreatureName};
    use chrono::NaiveDate;

    fn born() -> BirthDate {
        let date = NaiveDate::from_ymd_opt(2018, 5, 1).unwrap();
        BirthDate::new_at(date, date).unwrap()
    }

    fn roster() -> Vec<AnyCreature> {
        vec![
            Dragon::new(CreatureName::new("Smolder").unwrap(), born(), 90, 15)
                .unwrap()
                .into(),
            Elf::new(CreatureName::new("Elowen").unwrap(), born(), 70, 8)
                .unwrap()
                .into(),
            Orc::new(CreatureName::new("Gruk").unwrap(), born(), 85, 4)
                .unwrap()
                .into(),
        ]
    }

    #[test]
    fn test_kind_dispatch() {
        let kinds: Vec<_> = roster().iter().map(AnyCreature::kind).collect();
        assert_eq!(
            kinds,
            vec![CreatureKind::Dragon, CreatureKind::Elf, CreatureKind::Orc]
        );
    }

    #[test]
    fn test_any_member_is_a_plain_creature_target() {
        let mut roster = roster();
        for member in &mut roster {
            member.creature_mut().take_damage(10).unwrap();
        }
        let healths: Vec<_> = roster.iter().map(|m| m.creature().health()).collect();
        assert_eq!(healths, vec![80, 60, 75]);
    }

    #[test]
    fn test_summary_dispatches_to_variant() {
        let roster = roster();
        assert!(roster[0].summary().contains("FirePower=15"));
        assert!(roster[1].summary().contains("Mana=8"));
        assert!(roster[2].summary().contains("Rage=4"));
    }
}
