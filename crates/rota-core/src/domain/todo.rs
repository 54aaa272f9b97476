//! To-do drafts: the records this system creates.
//!
//! A draft ties one chore to one roomie with a due date one week out.
//! Drafts are write-only; the runner never updates or deletes to-dos from
//! earlier weeks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{ChoreId, RoomieId};
use super::records::{Chore, Roomie};

/// A to-do record to be created in the "to dos" collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    /// Human-readable title, e.g. `🧹 Alice's chore for 2025-12-14`.
    pub title: String,

    /// Relation to the chore page.
    pub chore: ChoreId,

    /// Relation to the responsible roomie page.
    pub roomie: RoomieId,

    /// Due date (invocation date + 7 days).
    pub due: NaiveDate,

    /// Emoji icon for the created page, inherited from the chore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TodoDraft {
    /// Build the draft for one (chore, roomie) pair.
    pub fn for_assignment(chore: &Chore, roomie: &Roomie, due: NaiveDate) -> Self {
        Self {
            title: format!("🧹 {}'s chore for {}", roomie.name, due),
            chore: chore.id.clone(),
            roomie: roomie.id.clone(),
            due,
            icon: chore.emoji.clone(),
        }
    }
}
