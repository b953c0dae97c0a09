//! Response header generation.
//!
//! Every API response carries the same content type and a wildcard CORS
//! origin. Successful responses are also publicly cacheable and, when they
//! hold at least one record, carry `Last-Modified`.

use axum::http::{HeaderMap, HeaderValue, header};
use chrono::{DateTime, Utc};

/// Content type of envelopes and error bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Formats a timestamp as an HTTP-date.
pub fn http_date(instant: &DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Builder for API response headers.
#[derive(Debug, Clone)]
pub struct ApiHeaders {
    /// Last-Modified timestamp.
    last_modified: Option<DateTime<Utc>>,
    /// Whether `Cache-Control: public` is sent.
    cacheable: bool,
    /// Whether `Content-Type` is sent.
    with_body: bool,
}

impl Default for ApiHeaders {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiHeaders {
    /// Headers for a cacheable JSON response.
    pub fn new() -> Self {
        Self {
            last_modified: None,
            cacheable: true,
            with_body: true,
        }
    }

    /// Headers for an error response: JSON, never cached.
    pub fn for_error() -> Self {
        Self {
            cacheable: false,
            ..Self::new()
        }
    }

    /// Sets the Last-Modified timestamp.
    pub fn with_last_modified(mut self, instant: DateTime<Utc>) -> Self {
        self.last_modified = Some(instant);
        self
    }

    /// Drops `Content-Type`, for responses without a body.
    pub fn without_body(mut self) -> Self {
        self.with_body = false;
        self
    }

    /// Returns the formatted Last-Modified value.
    pub fn last_modified(&self) -> Option<String> {
        self.last_modified.as_ref().map(http_date)
    }

    /// Converts to an Axum HeaderMap.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if self.with_body {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(JSON_CONTENT_TYPE),
            );
        }

        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );

        if self.cacheable {
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("public"));
        }

        if let Some(last_modified) = self.last_modified() {
            if let Ok(value) = HeaderValue::from_str(&last_modified) {
                headers.insert(header::LAST_MODIFIED, value);
            }
        }

        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_http_date() {
        let instant = Utc.with_ymd_and_hms(2020, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(http_date(&instant), "Wed, 15 Jan 2020 10:30:00 GMT");
    }

    #[test]
    fn test_new() {
        let map = ApiHeaders::new().to_header_map();
        assert_eq!(map[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(map[header::CACHE_CONTROL], "public");
        assert_eq!(map[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(!map.contains_key(header::LAST_MODIFIED));
    }

    #[test]
    fn test_with_last_modified() {
        let instant = Utc.with_ymd_and_hms(2020, 1, 15, 10, 30, 0).unwrap();
        let map = ApiHeaders::new().with_last_modified(instant).to_header_map();
        assert_eq!(map[header::LAST_MODIFIED], "Wed, 15 Jan 2020 10:30:00 GMT");
    }

    #[test]
    fn test_for_error() {
        let map = ApiHeaders::for_error().to_header_map();
        assert!(map.contains_key(header::CONTENT_TYPE));
        assert!(!map.contains_key(header::CACHE_CONTROL));
    }

    #[test]
    fn test_without_body() {
        let map = ApiHeaders::new().without_body().to_header_map();
        assert!(!map.contains_key(header::CONTENT_TYPE));
        assert_eq!(map[header::CACHE_CONTROL], "public");
    }
}
