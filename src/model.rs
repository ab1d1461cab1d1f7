//! Data models for the URL shortener
//!
//! This module defines the stored record and the request/response bodies
//! exchanged over the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL as held by the store
///
/// `id` and `short_url` always carry the same value: the identifier derived
/// from `original_url`. Both are kept so the serialized shape matches the
/// record encoding clients may already depend on.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UrlRecord {
    /// Identifier the record is keyed by (e.g., "5d4140")
    pub id: String,

    /// The URL exactly as it was submitted
    #[serde(rename = "originalURL")]
    pub original_url: String,

    /// Same value as `id`
    #[serde(rename = "shortenURL")]
    pub short_url: String,

    /// Time of the most recent write of this record
    #[serde(rename = "creationTime")]
    pub creation_date: DateTime<Utc>,
}

impl UrlRecord {
    pub fn new(id: String, original_url: String) -> Self {
        Self {
            short_url: id.clone(),
            id,
            original_url,
            creation_date: Utc::now(),
        }
    }
}

/// Request payload for `POST /shorten`
///
/// # Example
/// ```json
/// { "url": "https://example.com/very/long/url" }
/// ```
#[derive(Deserialize, Debug)]
pub struct ShortenRequest {
    /// The URL to shorten. Not validated.
    pub url: String,
}

/// Response returned by `POST /shorten`
///
/// # Example
/// ```json
/// { "shortURL": "5d4140" }
/// ```
#[derive(Serialize, Debug)]
pub struct ShortenResponse {
    #[serde(rename = "shortURL")]
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_keeps_id_and_short_url_equal() {
        let record = UrlRecord::new("abc123".to_string(), "https://example.com".to_string());
        assert_eq!(record.id, record.short_url);
        assert_eq!(record.original_url, "https://example.com");
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let record = UrlRecord::new("abc123".to_string(), "https://example.com".to_string());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], "abc123");
        assert_eq!(value["originalURL"], "https://example.com");
        assert_eq!(value["shortenURL"], "abc123");
        assert!(value["creationTime"].is_string());
    }

    #[test]
    fn shorten_response_uses_camel_case_key() {
        let response = ShortenResponse {
            short_url: "d41d8c".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "shortURL": "d41d8c" })
        );
    }

    #[test]
    fn shorten_request_rejects_missing_or_mistyped_url() {
        assert!(serde_json::from_str::<ShortenRequest>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<ShortenRequest>(r#"{"url": 42}"#).is_err());

        let parsed: ShortenRequest = serde_json::from_str(r#"{"url": "not a url"}"#).unwrap();
        assert_eq!(parsed.url, "not a url");
    }
}
