//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to create one alias.
///
/// Both fields are optional at the JSON level so that a missing field and an
/// empty string are reported the same way by the service.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub alias: Option<String>,
}

/// Successful shorten response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub success: bool,
    pub shortened_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_fields_deserialize() {
        let req: ShortenRequest = serde_json::from_str(r#"{ "url": "https://a.com" }"#).unwrap();
        assert_eq!(req.url.as_deref(), Some("https://a.com"));
        assert!(req.alias.is_none());

        let req: ShortenRequest = serde_json::from_str(r#"{ "url": null, "alias": "x" }"#).unwrap();
        assert!(req.url.is_none());
    }

    #[test]
    fn test_response_field_names() {
        let body = serde_json::to_value(ShortenResponse {
            success: true,
            shortened_url: "http://localhost:3000/cs391".to_string(),
        })
        .unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["shortenedUrl"], "http://localhost:3000/cs391");
    }
}
