//! Tag normalisation and path-segment encoding.
//!
//! Player, clan, tournament and replay identifiers are tags prefixed with
//! `#`. Users often omit the sigil, and the `#` itself must be
//! percent-encoded before it goes into a URL path, otherwise it would start
//! a fragment.
//!
//! ```rust
//! use royale_cr_client::tag;
//!
//! assert_eq!(tag::normalize_tag("2PP"), "#2PP");
//! assert_eq!(tag::encode_tag("2PP"), "%232PP");
//! ```

/// Ensure `tag` carries its leading `#`.
///
/// Idempotent: normalising an already normalised tag returns it unchanged.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{tag}")
    }
}

/// Normalise `tag` and percent-encode it for use as a single path segment.
#[must_use]
pub fn encode_tag(tag: &str) -> String {
    encode_param(&normalize_tag(tag))
}

/// Percent-encode a value so it cannot break out of its path segment.
///
/// ```rust
/// use royale_cr_client::tag;
///
/// assert_eq!(tag::encode_param("global"), "global");
/// assert_eq!(tag::encode_param("../admin"), "..%2Fadmin");
/// ```
#[must_use]
pub fn encode_param(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
