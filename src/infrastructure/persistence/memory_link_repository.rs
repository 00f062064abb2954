//! In-memory implementation of [`LinkRepository`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Code store backed by a lock-guarded `HashMap` from code to URL.
///
/// Inserts take the write lock and check-and-insert in one step, so
/// concurrent creates never lose a write and never overwrite each other.
/// Lookups share the read lock.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, String>>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, link: Link) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        match links.entry(link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict { code: link.code }),
            Entry::Vacant(slot) => {
                slot.insert(link.long_url.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.read().await;

        Ok(links
            .get(code)
            .map(|long_url| Link::new(code, long_url.as_str())))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = MemoryLinkRepository::new();

        let created = repo
            .create(Link::new("abcDEF12", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(created.code, "abcDEF12");

        let found = repo.find_by_code("abcDEF12").await.unwrap();
        assert_eq!(found, Some(Link::new("abcDEF12", "https://example.com")));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = MemoryLinkRepository::new();
        assert!(repo.find_by_code("missing1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let repo = MemoryLinkRepository::new();
        repo.create(Link::new("abcdefgh", "https://lower.example"))
            .await
            .unwrap();

        assert!(repo.find_by_code("ABCDEFGH").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_never_overwrites() {
        let repo = MemoryLinkRepository::new();
        repo.create(Link::new("sameCode", "https://first.example"))
            .await
            .unwrap();

        let result = repo
            .create(Link::new("sameCode", "https://second.example"))
            .await;
        assert!(matches!(result, Err(AppError::Conflict { ref code }) if code == "sameCode"));

        let stored = repo.find_by_code("sameCode").await.unwrap().unwrap();
        assert_eq!(stored.long_url, "https://first.example");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_count_tracks_inserts() {
        let repo = MemoryLinkRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        for i in 0..5 {
            repo.create(Link::new(format!("code000{i}"), "https://example.com"))
                .await
                .unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 5);
    }
}
