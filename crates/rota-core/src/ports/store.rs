//! HouseholdStore port - the hosted database the runner reads and writes.
//!
//! One trait covers the three operations the runner needs: read the two
//! source collections, create records in the to-dos collection. The Notion
//! adapter implements it in production; tests substitute an in-memory fake
//! or a mock HTTP server.

use async_trait::async_trait;

use crate::domain::ids::TodoId;
use crate::domain::records::{Chore, Roomie};
use crate::domain::todo::TodoDraft;
use crate::error::Result;

/// Read/write interface over the household's collections.
///
/// # Design principles
/// - Reads return the collections in their source order; the rotation policy
///   depends on that order being stable between runs.
/// - `create_todo` is create-only. Prior weeks' to-dos are never touched, so
///   two successive runs always produce independent batches.
#[async_trait]
pub trait HouseholdStore: Send + Sync {
    /// Fetch all roomies, in collection order.
    async fn list_roomies(&self) -> Result<Vec<Roomie>>;

    /// Fetch all chores, in collection order.
    async fn list_chores(&self) -> Result<Vec<Chore>>;

    /// Create one to-do record, returning the new page's id.
    async fn create_todo(&self, draft: &TodoDraft) -> Result<TodoId>;
}
