//! Bestiary Domain - Creature model, combat actions, and invariants
//!
//! A small set of fantasy creatures: a base [`Creature`] with bounded
//! health, plus three variants ([`Dragon`], [`Elf`], [`Orc`]) that each add
//! one bounded resource and one combat action. Construction validates every
//! field; mutation happens only through clamping operations that return
//! outcome events; every expected failure surfaces as a [`DomainError`].
//!
//! Everything here is synchronous, in-process, and free of shared mutable
//! state. Combat actions take `&mut Creature` targets, so a caller exposing
//! creatures to concurrent use must wrap each instance in its own
//! mutual-exclusion domain; `&mut self` methods make that the only option
//! in safe Rust.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{AnyCreature, Creature, Dragon, Elf, Orc};
pub use error::DomainError;
pub use events::{DamageOutcome, HealOutcome, RestoreOutcome};
pub use ids::CreatureId;
pub use value_objects::{BirthDate, CreatureKind, CreatureName, Meter};
