use serde::{Deserialize, Serialize};

/// Webhook secret slot of a CRM user.
///
/// The user row is created elsewhere (sign up, admin cli) with the secret
/// unset; it gets populated lazily on first fetch and replaced on rotation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSecret {
    pub user_id: String,
    pub webhook_secret: Option<String>,
}
