pub const HUB_MODE_SUBSCRIBE: &str = "subscribe";
pub const FORBIDDEN_BODY: &str = "Forbidden";

/// Largest notification body buffered by `POST /webhook`
pub const WEBHOOK_MAX_PAYLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Random bytes drawn for every webhook secret (hex encoded: 64 chars)
pub const WEBHOOK_SECRET_BYTES: usize = 32;

pub const FACEBOOK_OAUTH_CALLBACK_PATH: &str = "auth/facebook/callback";
pub const FACEBOOK_OAUTH_SCOPES: [&str; 5] = [
    "leads_retrieval",
    "pages_show_list",
    "pages_manage_metadata",
    "pages_read_engagement",
    "ads_management",
];
