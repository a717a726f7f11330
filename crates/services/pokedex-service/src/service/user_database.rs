//! User registration and capture tracking.
//!
//! Catalog numbers passed to catch/release/state are 1-based (species
//! numbering); the comparison index is 0-based (Pokedex position).

use tracing::{debug, info};

use common::AppResult;
use domain::{
    CapturedState, ComparisonResult, DomainError, Password, User, FIRST_CATALOG_NUMBER, POKEDEX_SIZE,
};

use crate::repository::Session;

/// Orchestrates registration and capture changes against a [`Session`].
///
/// Holds no state of its own. Callers own the [`User`] records and pass
/// them back in; nothing is ever loaded from storage here.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserDatabase;

impl UserDatabase {
    /// Create a new user database
    pub fn new() -> Self {
        Self
    }

    /// Register a user who has caught nothing and persist it.
    ///
    /// Calls `add` once then `commit` once. Username uniqueness is left to
    /// the session; its errors are returned unchanged.
    pub fn register_user<S>(
        &self,
        username: &str,
        raw_password: &str,
        identifier: &str,
        session: &mut S,
    ) -> AppResult<User>
    where
        S: Session + ?Sized,
    {
        let hashed_password = Password::new(raw_password)?;
        let user = User::new(username.to_string(), hashed_password, identifier.to_string());

        session.add(&user)?;
        session.commit()?;

        info!(username = %user.username, "registered user");
        Ok(user)
    }

    /// Mark species `catalog_number` (1-based) as caught and commit.
    pub fn catch_pokemon_for_user<S>(
        &self,
        user: &mut User,
        catalog_number: usize,
        session: &mut S,
    ) -> AppResult<()>
    where
        S: Session + ?Sized,
    {
        self.write_state(user, catalog_number, CapturedState::Caught, session)
    }

    /// Mark species `catalog_number` (1-based) as uncaught and commit.
    pub fn uncatch_pokemon_for_user<S>(
        &self,
        user: &mut User,
        catalog_number: usize,
        session: &mut S,
    ) -> AppResult<()>
    where
        S: Session + ?Sized,
    {
        self.write_state(user, catalog_number, CapturedState::Uncaught, session)
    }

    /// Current state of species `catalog_number` (1-based).
    pub fn state_of_pokemon_for_user(
        &self,
        user: &User,
        catalog_number: usize,
    ) -> AppResult<CapturedState> {
        let index = catalog_index(catalog_number)?;
        Ok(user.capture_state(index)?)
    }

    /// Compare two users at a 0-based Pokedex position.
    pub fn comparison_result_between_users(
        &self,
        first: &User,
        second: &User,
        index: usize,
    ) -> AppResult<ComparisonResult> {
        let result = ComparisonResult::from_states(
            first.capture_state(index)?,
            second.capture_state(index)?,
        );

        debug!(
            first = %first.username,
            second = %second.username,
            index,
            ?result,
            "compared captures"
        );
        Ok(result)
    }

    // The bit flips before the session is touched; a failed commit leaves
    // the in-memory user changed.
    fn write_state<S>(
        &self,
        user: &mut User,
        catalog_number: usize,
        state: CapturedState,
        session: &mut S,
    ) -> AppResult<()>
    where
        S: Session + ?Sized,
    {
        let index = catalog_index(catalog_number)?;
        user.set_capture_state(index, state)?;

        session.add(user)?;
        session.commit()?;

        debug!(username = %user.username, catalog_number, %state, "updated capture state");
        Ok(())
    }
}

/// Convert a 1-based catalog number into a 0-based Pokedex position.
fn catalog_index(catalog_number: usize) -> Result<usize, DomainError> {
    if !(FIRST_CATALOG_NUMBER..=POKEDEX_SIZE).contains(&catalog_number) {
        return Err(DomainError::CatalogNumberOutOfRange {
            number: catalog_number,
            max: POKEDEX_SIZE,
        });
    }
    Ok(catalog_number - FIRST_CATALOG_NUMBER)
}
