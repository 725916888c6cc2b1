use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{
    error::{Error, Result},
    types::MessageRecord,
    MessageStore,
};

/// In-memory message store
///
/// Implements the same contract as [`crate::store::PostgresStore`] over a
/// plain `Vec`, so the API layer can be exercised without a database. Field
/// presence is enforced here the way the NOT NULL constraints enforce it in
/// PostgreSQL.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<MessageRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<MessageRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Vec<MessageRecord>> {
        // Malformed ids match nothing, same as the database-backed store
        let id = match Uuid::parse_str(id) {
            Ok(id) => id,
            Err(_) => return Ok(Vec::new()),
        };

        let records = self.records.read().await;
        Ok(records.iter().filter(|r| r.id == id).cloned().collect())
    }

    async fn create(
        &self,
        name: Option<String>,
        message: Option<String>,
    ) -> Result<MessageRecord> {
        let name = name.ok_or_else(|| {
            Error::ValidationError("null value in field \"name\"".to_string())
        })?;
        let message = message.ok_or_else(|| {
            Error::ValidationError("null value in field \"message\"".to_string())
        })?;

        let record = MessageRecord {
            id: Uuid::new_v4(),
            name,
            message,
        };

        self.records.write().await.push(record.clone());
        Ok(record)
    }
}
