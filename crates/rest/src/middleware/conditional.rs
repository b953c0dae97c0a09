//! Conditional request header handling.
//!
//! Only `If-Modified-Since` is honoured. All three HTTP-date forms are
//! accepted: IMF-fixdate, RFC 850 and asctime. An unparseable value is
//! ignored.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, header, request::Parts},
};
use chrono::{DateTime, NaiveDateTime, Utc};

/// `Sunday, 06-Nov-94 08:49:37 GMT`
const RFC850_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S GMT";

/// `Sun Nov  6 08:49:37 1994`
const ASCTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Parses an HTTP-date in any of its three forms.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some(date.with_timezone(&Utc));
    }
    [RFC850_FORMAT, ASCTIME_FORMAT]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Extracted conditional headers from a request.
#[derive(Debug, Default)]
pub struct ConditionalHeaders {
    /// If-Modified-Since header value.
    if_modified_since: Option<DateTime<Utc>>,
}

impl ConditionalHeaders {
    /// Creates a new ConditionalHeaders from a HeaderMap.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let if_modified_since = headers
            .get(header::IF_MODIFIED_SINCE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_http_date);

        Self { if_modified_since }
    }

    /// Returns the If-Modified-Since header value.
    pub fn if_modified_since(&self) -> Option<DateTime<Utc>> {
        self.if_modified_since
    }

    /// Returns true when the client's copy is at least as recent as
    /// `last_modified`.
    ///
    /// HTTP-dates have no sub-second part, so the comparison is made at
    /// second precision.
    pub fn not_modified_since(&self, last_modified: &DateTime<Utc>) -> bool {
        self.if_modified_since
            .is_some_and(|since| last_modified.timestamp() <= since.timestamp())
    }
}

/// Axum extractor for conditional headers.
impl<S> FromRequestParts<S> for ConditionalHeaders
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ConditionalHeaders::from_headers(&parts.headers))
    }
}
