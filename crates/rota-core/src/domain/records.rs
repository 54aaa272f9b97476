//! Read models for the two source collections.
//!
//! Roomies and chores are created and removed externally by household
//! members editing the Notion databases; the runner only reads them.
//! Both are fetched fresh on every invocation.

use serde::{Deserialize, Serialize};

use super::ids::{ChoreId, RoomieId};

/// One member of the household, read from the roomies collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roomie {
    pub id: RoomieId,
    pub name: String,

    /// Page icon, if the page has an emoji icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl Roomie {
    pub fn new(id: RoomieId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: None,
        }
    }
}

/// One chore, read from the chores collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub id: ChoreId,
    pub name: String,

    /// Page icon, carried onto the created to-do's icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl Chore {
    pub fn new(id: ChoreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: None,
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chore_builder_sets_emoji() {
        let chore = Chore::new(ChoreId::new("c1"), "dishes").with_emoji("🍽️");
        assert_eq!(chore.name, "dishes");
        assert_eq!(chore.emoji.as_deref(), Some("🍽️"));
    }

    #[test]
    fn roomie_roundtrip_json() {
        let roomie = Roomie::new(RoomieId::new("r1"), "Alice");
        let s = serde_json::to_string(&roomie).unwrap();
        let back: Roomie = serde_json::from_str(&s).unwrap();
        assert_eq!(back, roomie);
        // emoji is omitted from JSON when absent
        assert!(!s.contains("emoji"));
    }
}
