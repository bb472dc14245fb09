//! Repositories for session persistence

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{PgPool, Row, types::Json};
use tracing::info;

use crate::models::StoredSession;

#[cfg(test)]
pub mod memory;

/// Storage seam used by the handlers
///
/// Records are append-only: there is no update or delete.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new session record stamped with the current time
    async fn insert(
        &self,
        user_id: &str,
        signature: &str,
        answers: &[String],
    ) -> DatabaseResult<()>;

    /// Find the most recent session matching both keys exactly
    async fn lookup(
        &self,
        user_id: &str,
        signature: &str,
    ) -> DatabaseResult<Option<StoredSession>>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> DatabaseResult<bool>;
}

/// PostgreSQL-backed session repository
#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn insert(
        &self,
        user_id: &str,
        signature: &str,
        answers: &[String],
    ) -> DatabaseResult<()> {
        info!(user_id, "Saving session");

        sqlx::query(
            r#"
            INSERT INTO user_session (user_id, signature, answers)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(signature)
        .bind(Json(answers))
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(())
    }

    async fn lookup(
        &self,
        user_id: &str,
        signature: &str,
    ) -> DatabaseResult<Option<StoredSession>> {
        let row = sqlx::query(
            r#"
            SELECT answers, created_at
            FROM user_session
            WHERE user_id = $1 AND signature = $2
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(signature)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        match row {
            Some(row) => {
                let Json(answers): Json<Vec<String>> =
                    row.try_get("answers").map_err(DatabaseError::Decode)?;
                let session = StoredSession {
                    answers,
                    created_at: row.try_get("created_at").map_err(DatabaseError::Decode)?,
                };
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> DatabaseResult<bool> {
        common::database::health_check(&self.pool).await
    }
}
