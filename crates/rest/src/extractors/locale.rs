//! `_locale` query parameter extractor.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Axum extractor for the requested translation locale.
///
/// An absent or empty `_locale` means no locale was requested. When the
/// parameter is repeated the last value wins, and extraction never fails.
///
/// # Example
///
/// ```rust,ignore
/// use nrdb_rest::extractors::Locale;
///
/// async fn handler(locale: Locale) {
///     if let Some(code) = locale.code() {
///         // attach translations for `code`
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Locale {
    code: Option<String>,
}

/// Name of the query parameter.
pub const LOCALE_PARAM: &str = "_locale";

impl Locale {
    /// Creates a locale from a raw parameter value.
    pub fn new(code: Option<String>) -> Self {
        let code = code
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        Self { code }
    }

    /// Reads the locale from a raw query string.
    pub fn from_query(query: &str) -> Self {
        let code = url::form_urlencoded::parse(query.as_bytes())
            .filter(|(name, _)| name == LOCALE_PARAM)
            .map(|(_, value)| value.into_owned())
            .last();
        Self::new(code)
    }

    /// Returns the requested locale code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .uri
            .query()
            .map(Locale::from_query)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Locale {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        Locale::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_locale_present() {
        assert_eq!(extract("/cards?_locale=fr").await.code(), Some("fr"));
    }

    #[tokio::test]
    async fn test_locale_absent() {
        assert_eq!(extract("/cards").await.code(), None);
        assert_eq!(extract("/cards?other=1").await.code(), None);
    }

    #[tokio::test]
    async fn test_empty_locale_is_absent() {
        assert_eq!(extract("/cards?_locale=").await.code(), None);
        assert_eq!(extract("/cards?_locale=%20").await.code(), None);
    }

    #[tokio::test]
    async fn test_repeated_locale_keeps_last() {
        assert_eq!(extract("/cards?_locale=fr&_locale=de").await.code(), Some("de"));
        assert_eq!(extract("/cards?_locale=fr&_locale=").await.code(), None);
    }

    #[test]
    fn test_from_query_decodes_value() {
        assert_eq!(Locale::from_query("a=1&_locale=pt%2Dbr").code(), Some("pt-br"));
        assert_eq!(Locale::from_query("a=1&b").code(), None);
    }
}
