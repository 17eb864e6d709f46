use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use crate::utils::validation::validate_user_id;

/// 使用者收藏的古蹟清單（以呼叫端提供的 user id 為鍵，無驗證）
pub struct FavoritesService<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> FavoritesService<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Adds `monument_id` to the user's list. Adding an id twice is a no-op.
    pub async fn add_favorite(&self, monument_id: &str, user_id: &str) -> Result<()> {
        validate_user_id(user_id)?;

        let mut favorites = self.store.get(user_id).await?.unwrap_or_default();
        if favorites.iter().any(|id| id == monument_id) {
            tracing::debug!("⭐ {} already in favorites of {}", monument_id, user_id);
            return Ok(());
        }

        favorites.push(monument_id.to_string());
        self.store.put(user_id, &favorites).await?;
        tracing::info!("⭐ Added {} to favorites of {}", monument_id, user_id);
        Ok(())
    }

    pub async fn favorites(&self, user_id: &str) -> Result<Vec<String>> {
        validate_user_id(user_id)?;
        Ok(self.store.get(user_id).await?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MonumentError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MemoryStore {
        lists: Arc<Mutex<HashMap<String, Vec<String>>>>,
        writes: Arc<Mutex<usize>>,
    }

    impl KeyValueStore for MemoryStore {
        async fn get(&self, user_id: &str) -> Result<Option<Vec<String>>> {
            Ok(self.lists.lock().await.get(user_id).cloned())
        }

        async fn put(&self, user_id: &str, values: &[String]) -> Result<()> {
            *self.writes.lock().await += 1;
            self.lists
                .lock()
                .await
                .insert(user_id.to_string(), values.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_add_favorite_twice_keeps_one_entry() {
        let store = MemoryStore::default();
        let service = FavoritesService::new(store.clone());

        tokio_test::block_on(async {
            service.add_favorite("PA00107501", "alice").await.unwrap();
            service.add_favorite("PA00107501", "alice").await.unwrap();

            assert_eq!(
                service.favorites("alice").await.unwrap(),
                vec!["PA00107501".to_string()]
            );
            assert_eq!(*store.writes.lock().await, 1);
        });
    }

    #[tokio::test]
    async fn test_favorites_are_kept_per_user() {
        let service = FavoritesService::new(MemoryStore::default());

        service.add_favorite("PA1", "alice").await.unwrap();
        service.add_favorite("PA2", "alice").await.unwrap();
        service.add_favorite("PA1", "bob").await.unwrap();

        assert_eq!(service.favorites("alice").await.unwrap(), vec!["PA1", "PA2"]);
        assert_eq!(service.favorites("bob").await.unwrap(), vec!["PA1"]);
        assert!(service.favorites("carol").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_user_id_is_rejected() {
        let service = FavoritesService::new(MemoryStore::default());

        let err = service.add_favorite("PA1", "").await.unwrap_err();
        assert!(matches!(err, MonumentError::InvalidUserId { .. }));
    }
}
