//! Syntax checks for submitted URLs.
//!
//! A submitted URL must be a URI reference: either an absolute URL or a
//! relative reference such as `example.com/page` or `/path`. It is stored
//! byte-for-byte and later sent back as a `Location` header, so anything that
//! a header value cannot carry is rejected up front.

use std::sync::LazyLock;

use axum::http::HeaderValue;
use url::{ParseError, Url};
use validator::ValidationError;

/// Base used only to check that a relative reference resolves.
static RELATIVE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://relative.invalid/").unwrap());

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlReferenceError {
    #[error("url is empty")]
    Empty,

    #[error("url contains a control character")]
    ControlCharacter,

    #[error("url cannot be sent as a Location header")]
    NotHeaderSafe,

    /// `a:b/c` without a valid scheme, e.g. `::not a url::`.
    #[error("first path segment of a relative reference contains ':'")]
    ColonInFirstSegment,

    #[error("malformed url: {0}")]
    Malformed(#[from] ParseError),
}

/// Checks that `input` is a URI reference that can be stored and redirected
/// to unchanged.
///
/// # Rules
///
/// - Not empty
/// - No ASCII control characters (tab, CR and LF included), which URL
///   parsers would otherwise strip silently
/// - Valid as an HTTP header value
/// - Parses as an absolute URL, or as a relative reference whose first path
///   segment has no `:`
///
/// # Errors
///
/// Returns the first rule that `input` breaks.
pub fn check_url_reference(input: &str) -> Result<(), UrlReferenceError> {
    if input.is_empty() {
        return Err(UrlReferenceError::Empty);
    }

    if input.bytes().any(|b| b.is_ascii_control()) {
        return Err(UrlReferenceError::ControlCharacter);
    }

    if HeaderValue::from_str(input).is_err() {
        return Err(UrlReferenceError::NotHeaderSafe);
    }

    match Url::parse(input) {
        Ok(_) => Ok(()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let first_segment = input.split(['/', '?', '#']).next().unwrap_or_default();
            if first_segment.contains(':') {
                return Err(UrlReferenceError::ColonInFirstSegment);
            }

            RELATIVE_BASE.join(input)?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// `validator` adapter for [`check_url_reference`].
pub fn validate_url_reference(input: &str) -> Result<(), ValidationError> {
    check_url_reference(input).map_err(|err| {
        ValidationError::new("url_reference").with_message(err.to_string().into())
    })
}
