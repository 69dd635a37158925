use crate::config;
use anyhow::bail;
use chrono::Utc;
use rand::{RngCore, rngs::OsRng};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
};
use std::str::FromStr;

pub async fn run_migrations(db_pool: &sqlx::SqlitePool, file_name: &str) -> anyhow::Result<()> {
    let mut tera = tera::Tera::new("../migrations/**/*.sql")?;
    tera.autoescape_on(vec![".sql"]);

    let create_tables_query = tera.render(file_name, &tera::Context::new())?;

    sqlx::raw_sql(&create_tables_query).execute(db_pool).await?;
    Ok(())
}

/// Inserts the user unless it already exists. Returns whether a row was added.
pub async fn create_user(db_pool: &sqlx::SqlitePool, user_id: &str) -> anyhow::Result<bool> {
    let result = sqlx::query(
        "INSERT OR IGNORE INTO crm_user(id,webhook_secret,created_at,updated_at) VALUES($1,NULL,$2,$3);",
    )
    .bind(user_id)
    .bind(Utc::now())
    .bind(Utc::now())
    .execute(db_pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Random bytes drawn for every webhook secret, same as the web app
/// (hex encoded: 64 chars)
pub const WEBHOOK_SECRET_BYTES: usize = 32;

/// Same policy as the web app: bytes from the OS CSPRNG, hex encoded
pub fn generate_webhook_secret() -> String {
    let mut bytes = [0u8; WEBHOOK_SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

pub async fn rotate_secret(db_pool: &sqlx::SqlitePool, user_id: &str) -> anyhow::Result<String> {
    let secret = generate_webhook_secret();

    let result = sqlx::query("UPDATE crm_user SET webhook_secret=$1,updated_at=$2 WHERE id=$3;")
        .bind(&secret)
        .bind(Utc::now())
        .bind(user_id)
        .execute(db_pool)
        .await?;

    if result.rows_affected() == 0 {
        bail!("user {user_id} not found");
    }

    Ok(secret)
}

pub async fn setup_sqlite_db_pool(encrypted: bool) -> anyhow::Result<SqlitePool> {
    if encrypted {
        return Ok(SqlitePool::connect_with(
            SqliteConnectOptions::from_str(&config::APP_CONFIG.db_host)?
                .pragma("key", &config::APP_CONFIG.db_pass_encrypt)
                .pragma("cipher_page_size", "1024")
                .pragma("kdf_iter", "64000")
                .pragma("cipher_hmac_algorithm", "HMAC_SHA1")
                .pragma("cipher_kdf_algorithm", "PBKDF2_HMAC_SHA1")
                .pragma("foreign_keys", "ON")
                .journal_mode(SqliteJournalMode::Delete),
        )
        .await?);
    }

    Ok(SqlitePool::connect_with(
        SqliteConnectOptions::from_str(&config::APP_CONFIG.db_host)?.pragma("foreign_keys", "ON"),
    )
    .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_db() -> SqlitePool {
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::raw_sql(include_str!("../../migrations/0001_crm_user.sql"))
            .execute(&db_pool)
            .await
            .unwrap();

        db_pool
    }

    #[test]
    fn test_generate_webhook_secret_format() {
        let secret = generate_webhook_secret();

        assert_eq!(secret.len(), WEBHOOK_SECRET_BYTES * 2);
        assert_eq!(secret.len(), 64);
        assert!(
            secret
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
        assert_ne!(secret, generate_webhook_secret());
    }

    #[tokio::test]
    async fn test_create_user_is_idempotent() {
        let db_pool = setup_db().await;

        assert!(create_user(&db_pool, "u1").await.unwrap());
        assert!(!create_user(&db_pool, "u1").await.unwrap());

        let secret: Option<String> =
            sqlx::query_scalar("SELECT webhook_secret FROM crm_user WHERE id=$1;")
                .bind("u1")
                .fetch_one(&db_pool)
                .await
                .unwrap();
        assert!(secret.is_none());
    }

    #[tokio::test]
    async fn test_rotate_secret_stores_new_value() {
        let db_pool = setup_db().await;
        create_user(&db_pool, "u1").await.unwrap();

        let first = rotate_secret(&db_pool, "u1").await.unwrap();
        let second = rotate_secret(&db_pool, "u1").await.unwrap();

        assert_eq!(second.len(), 64);
        assert_ne!(first, second);

        let stored: Option<String> =
            sqlx::query_scalar("SELECT webhook_secret FROM crm_user WHERE id=$1;")
                .bind("u1")
                .fetch_one(&db_pool)
                .await
                .unwrap();
        assert_eq!(stored, Some(second));
    }

    #[tokio::test]
    async fn test_rotate_secret_unknown_user() {
        let db_pool = setup_db().await;

        assert!(rotate_secret(&db_pool, "ghost").await.is_err());
    }
}
