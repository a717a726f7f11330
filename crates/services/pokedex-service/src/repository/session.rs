//! Persistence collaborator contract.

use common::AppResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Unit-of-work style session handed into every mutating operation.
///
/// Records are keyed by username. Staging the same user twice before a
/// commit keeps the later snapshot.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Session {
    /// Stage a snapshot of `user` for the next commit
    fn add(&mut self, user: &User) -> AppResult<()>;

    /// Durably persist everything staged since the last commit
    fn commit(&mut self) -> AppResult<()>;
}
