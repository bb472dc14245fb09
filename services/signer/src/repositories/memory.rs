//! In-memory session store used by handler tests

use async_trait::async_trait;
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::SessionStore;
use crate::models::StoredSession;

#[derive(Debug, Clone)]
struct Record {
    user_id: String,
    signature: String,
    session: StoredSession,
}

/// Session store kept in a vector, optionally failing every call
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    records: Arc<Mutex<Vec<Record>>>,
    unavailable: bool,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, as if the database were down
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub async fn record_count(&self) -> usize {
        self.records.lock().await.len()
    }

    fn check_available(&self) -> DatabaseResult<()> {
        if self.unavailable {
            return Err(DatabaseError::Query(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(
        &self,
        user_id: &str,
        signature: &str,
        answers: &[String],
    ) -> DatabaseResult<()> {
        self.check_available()?;

        self.records.lock().await.push(Record {
            user_id: user_id.to_string(),
            signature: signature.to_string(),
            session: StoredSession {
                answers: answers.to_vec(),
                created_at: Utc::now(),
            },
        });
        Ok(())
    }

    async fn lookup(
        &self,
        user_id: &str,
        signature: &str,
    ) -> DatabaseResult<Option<StoredSession>> {
        self.check_available()?;

        let records = self.records.lock().await;
        Ok(records
            .iter()
            .rev()
            .find(|r| r.user_id == user_id && r.signature == signature)
            .map(|r| r.session.clone()))
    }

    async fn health_check(&self) -> DatabaseResult<bool> {
        Ok(!self.unavailable)
    }
}
