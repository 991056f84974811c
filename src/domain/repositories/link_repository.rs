//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Lookups that take an owner are ownership-scoped: a link that exists
/// but belongs to someone else behaves exactly like one that does not
/// exist, so callers cannot probe which ids are taken.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the short code already exists
    /// (the store's unique constraint decides, and the caller is expected
    /// to regenerate and retry). Returns [`AppError::Internal`] on other
    /// database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code, regardless of owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by id, scoped to its owner.
    ///
    /// Returns `Ok(None)` both when the id is unknown and when the link
    /// belongs to a different owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id_for_owner(&self, id: i64, owner_id: i64)
    -> Result<Option<Link>, AppError>;

    /// Lists all links belonging to an owner, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError>;

    /// Deletes a link by id, scoped to its owner.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` when the id
    /// is unknown or owned by someone else.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_for_owner(&self, id: i64, owner_id: i64) -> Result<bool, AppError>;

    /// Atomically increments the click counter for a code.
    ///
    /// The increment must be a single `clicks_count = clicks_count + 1`
    /// statement at the store. A read-modify-write sequence here would
    /// lose updates under concurrent resolution of the same code.
    ///
    /// Returns `Ok(true)` if a row was updated, `Ok(false)` for an
    /// unknown code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;
}
