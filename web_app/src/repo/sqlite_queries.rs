pub const QUERY_GET_USER_SECRET: &str = r#"
SELECT
    id AS user_id,webhook_secret
FROM crm_user
WHERE id=$1;
"#;

/// Only writes when no secret is stored yet; a concurrent writer that got
/// there first makes this a no-op returning no rows.
pub const QUERY_SET_WEBHOOK_SECRET_IF_NULL: &str = r#"
UPDATE crm_user
SET webhook_secret=$1,updated_at=$2
WHERE id=$3 AND webhook_secret IS NULL
RETURNING webhook_secret;
"#;

pub const QUERY_GET_WEBHOOK_SECRET: &str = r#"
SELECT webhook_secret FROM crm_user WHERE id=$1;
"#;

pub const QUERY_SET_WEBHOOK_SECRET: &str = r#"
UPDATE crm_user SET webhook_secret=$1,updated_at=$2 WHERE id=$3;
"#;
