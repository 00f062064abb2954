//! Link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_code};

/// Service for creating and resolving shortened links.
///
/// Holds a shared handle to the code store; one instance serves every
/// request.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for an already validated URL.
    ///
    /// Generates a random code and stores the mapping. The mapping is visible
    /// to [`Self::resolve`] as soon as this returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the generated code is already taken.
    /// There is no retry; with 62^8 possible codes this is vanishingly rare.
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .create(Link::new(generate_code(), long_url))
            .await?;

        info!(code = %link.code, "Short link created");

        Ok(link)
    }

    /// Looks up the link for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or cannot have
    /// been generated in the first place.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) {
            debug!(code, "Rejected malformed short code");
            return Err(AppError::NotFound);
        }

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Returns the number of stored links.
    pub async fn count_links(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_create()
            .withf(|link| link.long_url == "https://example.com/page" && is_valid_code(&link.code))
            .times(1)
            .returning(Ok);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let link = service
            .create_short_link("https://example.com/page".to_string())
            .await
            .unwrap();

        assert_eq!(link.long_url, "https://example.com/page");
        assert!(is_valid_code(&link.code));
    }

    #[tokio::test]
    async fn test_create_short_link_collision_is_not_retried() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_create()
            .times(1)
            .returning(|link| Err(AppError::Conflict { code: link.code }));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_resolve_existing_code() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_code()
            .withf(|code| code == "Ab3dEf92")
            .times(1)
            .returning(|code| Ok(Some(Link::new(code, "https://example.com/page"))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let link = service.resolve("Ab3dEf92").await.unwrap();
        assert_eq!(link.long_url, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.resolve("zzzzzzzz").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_resolve_malformed_code_skips_store() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_find_by_code().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        for code in ["doesNotExist", "short", "bad-code", ""] {
            let result = service.resolve(code).await;
            assert!(matches!(result, Err(AppError::NotFound)), "{code:?}");
        }
    }

    #[tokio::test]
    async fn test_count_links_delegates_to_repository() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_count().times(1).returning(|| Ok(7));

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert_eq!(service.count_links().await.unwrap(), 7);
    }
}
