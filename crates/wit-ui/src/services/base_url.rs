//! API base URL resolution.

/// Name of the `<meta>` tag that overrides the API origin.
pub const API_BASE_META: &str = "wit-api-base";

/// Pick the API base URL: the meta override when non-blank, else the page origin.
///
/// Trailing slashes are stripped so paths can be appended directly.
#[must_use]
pub fn resolve_api_base(meta_override: Option<&str>, origin: &str) -> String {
    meta_override
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(origin)
        .trim_end_matches('/')
        .to_string()
}
