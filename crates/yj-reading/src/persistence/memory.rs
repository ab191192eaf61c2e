//! In-process reading store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ReadingStore, SavedReading, StoreError, UserId, owned_by, require_user};

/// Keeps readings in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    readings: RwLock<HashMap<Uuid, SavedReading>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of readings across all users.
    pub async fn len(&self) -> usize {
        self.readings.read().await.len()
    }

    /// Whether the store holds no readings.
    pub async fn is_empty(&self) -> bool {
        self.readings.read().await.is_empty()
    }
}

#[async_trait]
impl ReadingStore for MemoryStore {
    async fn save(&self, user: Option<&UserId>, reading: &SavedReading) -> Result<Uuid, StoreError> {
        owned_by(user, reading)?;
        self.readings
            .write()
            .await
            .insert(reading.id, reading.clone());
        Ok(reading.id)
    }

    async fn load_history(&self, user: Option<&UserId>) -> Result<Vec<SavedReading>, StoreError> {
        let user = require_user(user)?;
        let mut history: Vec<SavedReading> = self
            .readings
            .read()
            .await
            .values()
            .filter(|r| r.user == *user)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(history)
    }

    async fn delete(&self, user: Option<&UserId>, id: Uuid) -> Result<(), StoreError> {
        let user = require_user(user)?;
        let mut readings = self.readings.write().await;
        if !readings.get(&id).is_some_and(|r| r.user == *user) {
            return Err(StoreError::NotFound(id));
        }
        readings.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::fixtures::saved;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn save_and_load_history() {
        let store = MemoryStore::new();
        let first = saved("ann", "First question");
        let mut second = saved("ann", "Second question");
        second.created_at = first.created_at + chrono::Duration::seconds(5);
        let other = saved("bob", "Not yours");

        store.save(Some(&user("ann")), &first).await.unwrap();
        store.save(Some(&user("ann")), &second).await.unwrap();
        store.save(Some(&user("bob")), &other).await.unwrap();
        assert_eq!(store.len().await, 3);

        let history = store.load_history(Some(&user("ann"))).await.unwrap();
        let questions: Vec<&str> = history.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["Second question", "First question"]);
    }

    #[tokio::test]
    async fn anonymous_access_is_rejected() {
        let store = MemoryStore::new();
        let reading = saved("ann", "Anyone there?");
        assert!(matches!(
            store.save(None, &reading).await,
            Err(StoreError::AuthenticationRequired)
        ));
        assert!(matches!(
            store.load_history(None).await,
            Err(StoreError::AuthenticationRequired)
        ));
        assert!(matches!(
            store.delete(None, reading.id).await,
            Err(StoreError::AuthenticationRequired)
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn cannot_save_for_another_user() {
        let store = MemoryStore::new();
        let reading = saved("ann", "Mine");
        assert!(matches!(
            store.save(Some(&user("bob")), &reading).await,
            Err(StoreError::UserMismatch(_))
        ));
    }

    #[tokio::test]
    async fn delete_is_scoped_to_owner() {
        let store = MemoryStore::new();
        let reading = saved("ann", "Delete me");
        store.save(Some(&user("ann")), &reading).await.unwrap();

        assert!(matches!(
            store.delete(Some(&user("bob")), reading.id).await,
            Err(StoreError::NotFound(_))
        ));
        store.delete(Some(&user("ann")), reading.id).await.unwrap();
        assert!(store.is_empty().await);
        assert!(matches!(
            store.delete(Some(&user("ann")), reading.id).await,
            Err(StoreError::NotFound(_))
        ));
    }
}
