//! Read-only view of a bug-tracker ticket.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A review-flag entry on a bug (e.g. `fedora-review` set to `+`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugFlag {
    pub name: String,
    pub status: String,
    pub setter: String,
}

/// A single comment on a bug. Only the author matters to the checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugComment {
    pub author: String,
}

/// A bug record as read from the remote tracker. Never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    pub id: u64,
    pub summary: String,
    pub creator: String,
    pub flags: Vec<BugFlag>,
    pub comments: Vec<BugComment>,
}

impl Bug {
    /// Everyone who participated in the ticket: all comment authors plus the
    /// creator. Returned as an ordered set for deterministic reporting.
    #[must_use]
    pub fn involved_users(&self) -> BTreeSet<String> {
        let mut users: BTreeSet<String> = self
            .comments
            .iter()
            .map(|comment| comment.author.clone())
            .collect();
        users.insert(self.creator.clone());
        users
    }
}

/// A lightweight bug listing entry, as returned by component queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenBug {
    pub id: u64,
    pub summary: String,
    pub status: String,
}
