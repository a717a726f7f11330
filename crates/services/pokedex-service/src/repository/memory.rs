//! In-process session that keeps everything in memory.

use std::collections::HashMap;

use common::AppResult;
use domain::User;

use super::Session;

/// Session that never touches disk.
///
/// Every staged record is kept in call order so callers can see exactly
/// what was handed over, alongside the committed view keyed by username.
#[derive(Debug, Default)]
pub struct MemorySession {
    added: Vec<User>,
    pending: Vec<User>,
    committed: HashMap<String, User>,
    commits: usize,
}

impl MemorySession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record passed to `add`, oldest first
    pub fn added(&self) -> &[User] {
        &self.added
    }

    /// Whether `commit` has been called at least once
    pub fn did_commit(&self) -> bool {
        self.commits > 0
    }

    /// Number of `commit` calls
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    /// Committed snapshot of a user
    pub fn committed_user(&self, username: &str) -> Option<&User> {
        self.committed.get(username)
    }

    /// Number of distinct committed users
    pub fn committed_len(&self) -> usize {
        self.committed.len()
    }
}

impl Session for MemorySession {
    fn add(&mut self, user: &User) -> AppResult<()> {
        self.added.push(user.clone());
        self.pending.push(user.clone());
        Ok(())
    }

    fn commit(&mut self) -> AppResult<()> {
        for user in self.pending.drain(..) {
            self.committed.insert(user.username.clone(), user);
        }
        self.commits += 1;
        tracing::debug!(commits = self.commits, users = self.committed.len(), "memory session committed");
        Ok(())
    }
}
