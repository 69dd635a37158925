//! # Webhook Secret API Module
//!
//! Issues and rotates the bearer secret each user presents when calling their
//! webhook endpoints. Secrets are 32 bytes from the OS CSPRNG, hex encoded.

use crate::{consts, metric, repo};
use rand::{RngCore, rngs::OsRng};

/// Generates a fresh webhook secret.
///
/// SECURITY: Uses `OsRng` directly, the secret is a bearer credential.
pub fn generate_webhook_secret() -> String {
    let mut bytes = [0u8; consts::WEBHOOK_SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Returns the user's webhook secret, generating and storing one first if the
/// user has none yet.
///
/// # Returns
/// * `Ok(None)` - there is no user with `user_id`
/// * `Ok(Some(secret))` - the stored secret, unchanged across calls
///
/// # Errors
/// Returns an error if the repository fails.
pub async fn get_or_create_webhook_secret(
    repo: &repo::ImplAppRepo,
    user_id: &str,
) -> anyhow::Result<Option<String>> {
    let Some(user) = repo.get_user_secret(user_id).await? else {
        return Ok(None);
    };

    if let Some(secret) = user.webhook_secret {
        metric::incr_secret_action_statds("reused");
        return Ok(Some(secret));
    }

    // a concurrent request may store its own secret first, the repo then
    // hands back that one instead of ours
    let stored = repo
        .set_webhook_secret_if_null(user_id, &generate_webhook_secret())
        .await?;

    if stored.is_some() {
        metric::incr_secret_action_statds("created");
    }

    Ok(stored)
}

/// Replaces the user's webhook secret with a new one, invalidating the old
/// value immediately.
///
/// The user is not looked up first: an unknown `user_id` still gets a secret
/// back even though nothing was stored.
pub async fn regenerate_webhook_secret(
    repo: &repo::ImplAppRepo,
    user_id: &str,
) -> anyhow::Result<String> {
    let secret = generate_webhook_secret();
    repo.set_webhook_secret(user_id, &secret).await?;

    metric::incr_secret_action_statds("regenerated");
    Ok(secret)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::{models, repo::MockAppRepo};
    use mockall::predicate::*;

    pub fn is_webhook_secret(value: &str) -> bool {
        value.len() == 64
            && value
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    fn create_test_user(user_id: &str, secret: Option<&str>) -> models::user_app::UserSecret {
        models::user_app::UserSecret {
            user_id: user_id.to_string(),
            webhook_secret: secret.map(str::to_string),
        }
    }

    #[test]
    fn test_generate_webhook_secret_format() {
        let secret = generate_webhook_secret();
        assert!(is_webhook_secret(&secret), "unexpected secret {secret}");
    }

    #[test]
    fn test_generate_webhook_secret_is_not_repeated() {
        assert_ne!(generate_webhook_secret(), generate_webhook_secret());
    }

    #[ntex::test]
    async fn test_get_or_create_existing_secret_never_writes() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_user_secret()
            .with(eq("u1"))
            .times(2)
            .returning(|_| Box::pin(async move { Ok(Some(create_test_user("u1", Some("s1")))) }));
        mock_repo.expect_set_webhook_secret_if_null().never();
        mock_repo.expect_set_webhook_secret().never();
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let first = get_or_create_webhook_secret(&mock_repo, "u1").await.unwrap();
        let second = get_or_create_webhook_secret(&mock_repo, "u1").await.unwrap();

        assert_eq!(first.as_deref(), Some("s1"));
        assert_eq!(first, second);
    }

    #[ntex::test]
    async fn test_get_or_create_generates_when_missing() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_user_secret()
            .with(eq("u1"))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Some(create_test_user("u1", None))) }));
        mock_repo
            .expect_set_webhook_secret_if_null()
            .withf(|user_id, secret| user_id.to_string() == "u1" && is_webhook_secret(secret))
            .times(1)
            .returning(|_, secret| {
                let secret = secret.to_string();
                Box::pin(async move { Ok(Some(secret)) })
            });
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let result = get_or_create_webhook_secret(&mock_repo, "u1").await;

        assert!(result.is_ok_and(|secret| secret.is_some_and(|s| is_webhook_secret(&s))));
    }

    #[ntex::test]
    async fn test_get_or_create_returns_the_winner_of_a_race() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_user_secret()
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Some(create_test_user("u1", None))) }));
        mock_repo
            .expect_set_webhook_secret_if_null()
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(Some("stored-by-other".to_string())) }));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let result = get_or_create_webhook_secret(&mock_repo, "u1").await.unwrap();

        assert_eq!(result.as_deref(), Some("stored-by-other"));
    }

    #[ntex::test]
    async fn test_get_or_create_unknown_user() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_user_secret()
            .with(eq("ghost"))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(None) }));
        mock_repo.expect_set_webhook_secret_if_null().never();
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let result = get_or_create_webhook_secret(&mock_repo, "ghost").await;

        assert!(result.is_ok_and(|secret| secret.is_none()));
    }

    #[ntex::test]
    async fn test_get_or_create_repository_error() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_user_secret()
            .times(1)
            .returning(|_| {
                Box::pin(async move { Err(anyhow::anyhow!("Database connection error")) })
            });
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let result = get_or_create_webhook_secret(&mock_repo, "u1").await;

        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Database connection error")
        );
    }

    #[ntex::test]
    async fn test_regenerate_twice_yields_distinct_secrets() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_set_webhook_secret()
            .withf(|user_id, secret| user_id.to_string() == "u1" && is_webhook_secret(secret))
            .times(2)
            .returning(|_, _| Box::pin(async move { Ok(()) }));
        mock_repo.expect_get_user_secret().never();
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let first = regenerate_webhook_secret(&mock_repo, "u1").await.unwrap();
        let second = regenerate_webhook_secret(&mock_repo, "u1").await.unwrap();

        assert!(is_webhook_secret(&first) && is_webhook_secret(&second));
        assert_ne!(first, second);
    }

    #[ntex::test]
    async fn test_regenerate_repository_error() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_set_webhook_secret()
            .times(1)
            .returning(|_, _| Box::pin(async move { Err(anyhow::anyhow!("disk I/O error")) }));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let result = regenerate_webhook_secret(&mock_repo, "u1").await;

        assert!(result.is_err());
    }
}
