use serde::Deserialize;

/// [ntext responder](ntex::web::HttpResponse) to redirect to `url`
pub fn redirect_to(url: &str) -> Result<ntex::web::HttpResponse, ntex::web::Error> {
    Ok(ntex::web::HttpResponse::Found()
        .header("location", url)
        .finish())
}

/// Carries the optional `userId` of secret requests, from either the query
/// string or a json body
#[derive(Deserialize, Debug, Default)]
pub struct UserIdParam {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl UserIdParam {
    /// The user id if present and not blank
    pub fn value(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .filter(|user_id| !user_id.trim().is_empty())
    }

    /// Reads a raw request body. Anything that is not a json object with a
    /// string `userId` yields no user id.
    pub fn from_json_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_param_value() {
        let present: UserIdParam = serde_json::from_str(r#"{"userId":"u1"}"#).unwrap();
        assert_eq!(present.value(), Some("u1"));

        let missing: UserIdParam = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.value(), None);

        let blank: UserIdParam = serde_json::from_str(r#"{"userId":"  "}"#).unwrap();
        assert_eq!(blank.value(), None);

        let wrong_case: UserIdParam = serde_json::from_str(r#"{"userid":"u1"}"#).unwrap();
        assert_eq!(wrong_case.value(), None);
    }

    #[test]
    fn test_user_id_param_from_json_body() {
        assert_eq!(
            UserIdParam::from_json_body(br#"{"userId":"u1"}"#).value(),
            Some("u1")
        );

        let unreadable: [&[u8]; 5] = [
            b"",
            b"not json",
            b"[1,2,3]",
            br#"{"userId":5}"#,
            br#"{"userId":null}"#,
        ];
        for body in unreadable {
            assert_eq!(UserIdParam::from_json_body(body).value(), None);
        }
    }
}
