use crate::models;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, Row, SqlitePool, sqlite::SqliteRow};

use super::{AppRepo, sqlite_queries};

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

impl FromRow<'_, SqliteRow> for models::user_app::UserSecret {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            user_id: row.try_get("user_id")?,
            webhook_secret: row.try_get("webhook_secret")?,
        })
    }
}

#[async_trait]
impl AppRepo for SqlxSqliteRepo {
    async fn get_user_secret(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Option<models::user_app::UserSecret>> {
        Ok(
            sqlx::query_as::<_, models::user_app::UserSecret>(
                sqlite_queries::QUERY_GET_USER_SECRET,
            )
            .bind(user_id)
            .fetch_optional(&self.db_pool)
            .await?,
        )
    }

    async fn set_webhook_secret_if_null(
        &self,
        user_id: &str,
        secret: &str,
    ) -> anyhow::Result<Option<String>> {
        let stored: Option<String> =
            sqlx::query_scalar(sqlite_queries::QUERY_SET_WEBHOOK_SECRET_IF_NULL)
                .bind(secret)
                .bind(Utc::now())
                .bind(user_id)
                .fetch_optional(&self.db_pool)
                .await?;

        if stored.is_some() {
            return Ok(stored);
        }

        // lost the race (or the user is gone): report what is stored now
        let current: Option<Option<String>> =
            sqlx::query_scalar(sqlite_queries::QUERY_GET_WEBHOOK_SECRET)
                .bind(user_id)
                .fetch_optional(&self.db_pool)
                .await?;

        Ok(current.flatten())
    }

    async fn set_webhook_secret(&self, user_id: &str, secret: &str) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_SET_WEBHOOK_SECRET)
            .bind(secret)
            .bind(Utc::now())
            .bind(user_id)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }
}
