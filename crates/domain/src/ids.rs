//! Entity identifiers
//!
//! Creatures are entities, not value objects: two creatures with the same
//! name and birth date are still distinct individuals. The id makes that
//! identity explicit and survives clones of the aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(Uuid);

impl CreatureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CreatureId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CreatureId> for Uuid {
    fn from(value: CreatureId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(CreatureId::new(), CreatureId::new());
    }

    #[test]
    fn test_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let id = CreatureId::from_uuid(uuid);
        assert_eq!(id.to_uuid(), uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }
}
