use crate::domain::ports::{KeyValueStore, Storage};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.full_path(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> bool {
        tokio::fs::try_exists(self.full_path(path))
            .await
            .unwrap_or(false)
    }
}

/// Keeps each user's favorites as a JSON array in `favorites-<user>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore<S: Storage> {
    storage: S,
}

impl<S: Storage> JsonFileStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn file_name(user_id: &str) -> String {
        format!("favorites-{}.json", user_id)
    }
}

impl<S: Storage> KeyValueStore for JsonFileStore<S> {
    async fn get(&self, user_id: &str) -> Result<Option<Vec<String>>> {
        let file_name = Self::file_name(user_id);
        if !self.storage.exists(&file_name).await {
            return Ok(None);
        }

        let data = self.storage.read_file(&file_name).await?;
        let values: Vec<String> = serde_json::from_slice(&data)?;
        Ok(Some(values))
    }

    async fn put(&self, user_id: &str, values: &[String]) -> Result<()> {
        let data = serde_json::to_vec(values)?;
        self.storage
            .write_file(&Self::file_name(user_id), &data)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_json_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap());
        let store = JsonFileStore::new(storage);

        assert_eq!(store.get("alice").await.unwrap(), None);

        store
            .put("alice", &["PA1".to_string(), "PA2".to_string()])
            .await
            .unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("favorites-alice.json")).unwrap();
        assert_eq!(raw, r#"["PA1","PA2"]"#);
        assert_eq!(
            store.get("alice").await.unwrap(),
            Some(vec!["PA1".to_string(), "PA2".to_string()])
        );
    }

    #[tokio::test]
    async fn test_local_storage_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("data");
        let storage = LocalStorage::new(base.to_str().unwrap());

        storage.write_file("favorites-bob.json", b"[]").await.unwrap();

        assert!(storage.exists("favorites-bob.json").await);
        assert_eq!(storage.read_file("favorites-bob.json").await.unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_corrupted_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("favorites-eve.json"), "not json").unwrap();
        let store = JsonFileStore::new(LocalStorage::new(temp_dir.path().to_str().unwrap()));

        assert!(store.get("eve").await.is_err());
    }
}
