//! Aggregate roots - creatures that own their bounded state
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns its gauges outright (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//!
//! The original base-class/subclass relationship is expressed as
//! composition: each variant embeds a [`Creature`] and adds exactly one
//! resource and one combat action. Combat actions target `&mut Creature`,
//! so any variant can stand in as a target through `creature_mut()`.

pub mod any_creature;
pub mod creature;
pub mod dragon;
pub mod elf;
pub mod orc;

pub use any_creature::AnyCreature;
pub use creature::{Creature, MAX_HEALTH, MIN_STARTING_HEALTH};
pub use dragon::{Dragon, FIRE_DAMAGE, FIRE_POWER_COST, MAX_FIRE_POWER};
pub use elf::{Elf, MAX_MANA, SPELL_DAMAGE, SPELL_MANA_COST};
pub use orc::{
    Orc, BERSERK_DAMAGE, FRENZIED_BERSERK_DAMAGE, FRENZY_THRESHOLD, MAX_RAGE, MIN_RAGE_TO_BERSERK,
    RAGE_PER_BERSERK,
};
