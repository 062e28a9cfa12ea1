use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity used to address a course or meeting while editing.
///
/// Never rendered. Only needs to be unique within the collection it lives in,
/// a random v4 UUID is more than enough for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Creates a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identity from its hyphenated string form.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for EntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_distinct() {
        assert_ne!(EntityId::new(), EntityId::new());
    }

    #[test]
    fn test_string_form_parses_back() {
        let id = EntityId::new();
        assert_eq!(EntityId::from_string(&id.to_string()), Some(id));
        assert_eq!(EntityId::from_string("not-an-id"), None);
    }
}
