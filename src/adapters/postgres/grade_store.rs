//! PostgreSQL implementation of the GradeStore port.
//!
//! One `grade_records` table plays the role of a document collection:
//! the user identifier is the primary key and the whole subjects mapping
//! lives in a JSONB column, replaced on every save.
//!
//! Connection failures do not take the process down. `connect` returns a
//! disabled handle instead; every operation on it reports the original
//! connection error and the rest of the application keeps running.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::error;

use crate::config::DatabaseConfig;
use crate::domain::foundation::UserId;
use crate::domain::grades::SubjectGrades;
use crate::ports::{GradeStore, StoreError};

/// PostgreSQL grade store; either live or disabled at startup.
#[derive(Clone)]
pub struct PostgresGradeStore {
    handle: Handle,
}

#[derive(Clone)]
enum Handle {
    Connected(PgPool),
    Disabled(String),
}

impl PostgresGradeStore {
    /// Connects with the configured bounded acquire timeout and verifies
    /// liveness with a ping before handing the store out.
    ///
    /// On any failure the error is logged and a disabled handle is
    /// returned; the connect error is never propagated as a panic.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        match Self::try_connect(config).await {
            Ok(pool) => Self {
                handle: Handle::Connected(pool),
            },
            Err(err) => {
                error!(error = %err, "failed to connect to grade store, continuing disabled");
                Self {
                    handle: Handle::Disabled(err.to_string()),
                }
            }
        }
    }

    /// Creates a store from an existing pool, for callers that manage
    /// their own connection lifecycle.
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            handle: Handle::Connected(pool),
        }
    }

    /// Creates a disabled store that reports the given reason.
    pub fn disabled(reason: impl Into<String>) -> Self {
        Self {
            handle: Handle::Disabled(reason.into()),
        }
    }

    /// True when the startup connection succeeded.
    pub fn is_connected(&self) -> bool {
        matches!(self.handle, Handle::Connected(_))
    }

    async fn try_connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.url)
            .await?;

        // Liveness check before the handle is considered usable.
        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(pool)
    }

    /// Runs all pending migrations. A no-op error on a disabled handle.
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        let pool = self.pool()?;
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| StoreError::query(format!("Migration failed: {}", e)))
    }

    fn pool(&self) -> Result<&PgPool, StoreError> {
        match &self.handle {
            Handle::Connected(pool) => Ok(pool),
            Handle::Disabled(reason) => Err(StoreError::Disabled(reason.clone())),
        }
    }
}

#[async_trait]
impl GradeStore for PostgresGradeStore {
    async fn get(&self, id: &UserId) -> Result<Option<SubjectGrades>, StoreError> {
        let pool = self.pool()?;

        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT subjects FROM grade_records WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(pool)
                .await
                .map_err(|e| StoreError::query(format!("Failed to fetch grade record: {}", e)))?;

        match row {
            Some((subjects,)) => {
                let grades: SubjectGrades = serde_json::from_value(subjects).map_err(|e| {
                    StoreError::query(format!("Stored subjects are not a valid mapping: {}", e))
                })?;
                Ok(Some(grades))
            }
            None => Ok(None),
        }
    }

    async fn upsert(&self, id: &UserId, grades: &SubjectGrades) -> Result<(), StoreError> {
        let pool = self.pool()?;

        let subjects = serde_json::to_value(grades)
            .map_err(|e| StoreError::query(format!("Failed to serialize subjects: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO grade_records (id, subjects, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (id) DO UPDATE SET
                subjects = EXCLUDED.subjects,
                updated_at = now()
            "#,
        )
        .bind(id.as_str())
        .bind(subjects)
        .execute(pool)
        .await
        .map_err(|e| StoreError::query(format!("Failed to upsert grade record: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn disabled_handle_reports_connection_error_on_get() {
        let store = PostgresGradeStore::disabled("connection refused");
        let err = store.get(&user("u1")).await.unwrap_err();
        assert!(matches!(err, StoreError::Disabled(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn disabled_handle_reports_connection_error_on_upsert() {
        let store = PostgresGradeStore::disabled("connection refused");
        let err = store
            .upsert(&user("u1"), &SubjectGrades::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Disabled(_)));
        assert!(!store.is_connected());
    }

    #[tokio::test]
    async fn disabled_handle_refuses_migrations() {
        let store = PostgresGradeStore::disabled("connection refused");
        assert!(matches!(
            store.run_migrations().await.unwrap_err(),
            StoreError::Disabled(_)
        ));
    }
}
