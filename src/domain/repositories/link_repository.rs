//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the code store.
///
/// The store is shared by every in-flight request. Implementations must make
/// inserts atomic: a concurrent lookup sees either no entry or the complete
/// entry, never a partial one.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new link.
    ///
    /// Entries are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already present; the
    /// existing entry is left untouched.
    async fn create(&self, link: Link) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
