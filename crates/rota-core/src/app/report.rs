use serde::{Deserialize, Serialize};

/// Summary of one runner invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Chores found in the source collection.
    pub chores: usize,
    /// Roomies found in the source collection.
    pub roomies: usize,
    /// To-dos created this run.
    pub created: usize,
    /// Create calls that failed this run.
    pub failed: usize,
}

impl RunReport {
    /// True when there were no chores, so the run had nothing to do.
    pub fn is_noop(&self) -> bool {
        self.chores == 0
    }
}
