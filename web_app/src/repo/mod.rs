pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait AppRepo {
    /// `None` when there is no user with `user_id`
    async fn get_user_secret(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Option<models::user_app::UserSecret>>;

    /// Stores `secret` only if the user has none yet and returns whatever
    /// secret is stored once the write settled. `None` if the user is gone.
    async fn set_webhook_secret_if_null(
        &self,
        user_id: &str,
        secret: &str,
    ) -> anyhow::Result<Option<String>>;

    /// Overwrites the stored secret. Unknown users are a silent no-op.
    async fn set_webhook_secret(&self, user_id: &str, secret: &str) -> anyhow::Result<()>;
}

pub type ImplAppRepo = Box<dyn AppRepo>;
