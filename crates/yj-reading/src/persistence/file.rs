//! Reading store backed by one JSON file per reading.
//!
//! Layout: `<root>/<user>/<reading id>.json`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use super::{ReadingStore, SavedReading, StoreError, UserId, owned_by, require_user};

/// Stores readings as pretty-printed JSON files under a root directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// A store rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn user_dir(&self, user: &UserId) -> PathBuf {
        self.root.join(user.as_str())
    }

    fn reading_path(&self, user: &UserId, id: Uuid) -> PathBuf {
        self.user_dir(user).join(format!("{id}.json"))
    }
}

#[async_trait]
impl ReadingStore for JsonFileStore {
    async fn save(&self, user: Option<&UserId>, reading: &SavedReading) -> Result<Uuid, StoreError> {
        let user = owned_by(user, reading)?;
        fs::create_dir_all(self.user_dir(user)).await?;

        let path = self.reading_path(user, reading.id);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_vec_pretty(reading)?;
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &path).await?;
        tracing::debug!(path = %path.display(), "reading saved");
        Ok(reading.id)
    }

    async fn load_history(&self, user: Option<&UserId>) -> Result<Vec<SavedReading>, StoreError> {
        let user = require_user(user)?;
        let mut entries = match fs::read_dir(self.user_dir(user)).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut history = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let bytes = fs::read(&path).await?;
            match serde_json::from_slice::<SavedReading>(&bytes) {
                Ok(reading) if reading.user == *user => history.push(reading),
                Ok(_) => tracing::warn!(path = %path.display(), "skipping reading owned by another user"),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable reading"),
            }
        }
        history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(history)
    }

    async fn delete(&self, user: Option<&UserId>, id: Uuid) -> Result<(), StoreError> {
        let user = require_user(user)?;
        match fs::remove_file(self.reading_path(user, id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::fixtures::saved;
    use tempfile::TempDir;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn save_writes_one_file_per_reading() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let reading = saved("ann", "Is the path clear?");
        let id = store.save(Some(&user("ann")), &reading).await.unwrap();

        let path = dir.path().join("ann").join(format!("{id}.json"));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Is the path clear?"));
        assert!(content.contains("\"source\": \"static\""));
    }

    #[tokio::test]
    async fn history_is_newest_first_and_scoped() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let older = saved("ann", "Older");
        let mut newer = saved("ann", "Newer");
        newer.created_at = older.created_at + chrono::Duration::minutes(1);
        store.save(Some(&user("ann")), &older).await.unwrap();
        store.save(Some(&user("ann")), &newer).await.unwrap();
        store
            .save(Some(&user("bob")), &saved("bob", "Bob's"))
            .await
            .unwrap();

        let history = store.load_history(Some(&user("ann"))).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], newer);
        assert_eq!(history[1], older);
    }

    #[tokio::test]
    async fn missing_user_directory_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("not-yet"));
        assert!(store.load_history(Some(&user("ann"))).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let reading = saved("ann", "Survives");
        store.save(Some(&user("ann")), &reading).await.unwrap();
        std::fs::write(dir.path().join("ann").join("junk.json"), "{ not json").unwrap();

        let history = store.load_history(Some(&user("ann"))).await.unwrap();
        assert_eq!(history, vec![reading]);
    }

    #[tokio::test]
    async fn delete_removes_only_own_readings() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let reading = saved("ann", "Short lived");
        store.save(Some(&user("ann")), &reading).await.unwrap();

        assert!(matches!(
            store.delete(Some(&user("bob")), reading.id).await,
            Err(StoreError::NotFound(_))
        ));
        store.delete(Some(&user("ann")), reading.id).await.unwrap();
        assert!(store.load_history(Some(&user("ann"))).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn requires_authentication() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(matches!(
            store.load_history(None).await,
            Err(StoreError::AuthenticationRequired)
        ));
        assert!(matches!(
            store.save(None, &saved("ann", "Nobody")).await,
            Err(StoreError::AuthenticationRequired)
        ));
    }
}
