/// Environment variable holding the public application URL.
pub const APP_URL_ENV: &str = "PUBLIC_APP_URL";

/// Used when [`APP_URL_ENV`] is unset or unusable.
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";

/// Resolve the public base URL from the raw environment value.
///
/// A usable value is returned verbatim (no trailing slash normalization).
/// Anything else silently falls back to [`DEFAULT_APP_URL`].
pub fn resolve_base_url(raw: Option<&str>) -> String {
    match raw {
        Some(value) if is_http_url(value) => value.to_string(),
        _ => DEFAULT_APP_URL.to_string(),
    }
}

/// Read [`APP_URL_ENV`] from the process environment and resolve it.
pub fn from_env() -> String {
    resolve_base_url(std::env::var(APP_URL_ENV).ok().as_deref())
}

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Split `scheme://host[:port]` off an http(s) URL. The scheme is matched
/// case-insensitively.
fn split_origin(url: &str) -> Option<(&str, &str)> {
    let scheme_len = SCHEMES
        .iter()
        .find(|scheme| {
            url.get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        })?
        .len();
    let rest = &url[scheme_len..];
    let host_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(url.split_at(scheme_len + host_len))
}

fn is_http_url(value: &str) -> bool {
    match split_origin(value).and_then(|(origin, _)| origin.split_once("://")) {
        Some((_, host)) => !host.is_empty() && !host.chars().any(char::is_whitespace),
        None => false,
    }
}

/// Resolve a site path against a base URL the way a browser resolves a
/// reference: `/x` lands on the origin, `x` next to the last base segment.
/// Absolute http(s) URLs are returned as is.
pub fn join(base: &str, path: &str) -> String {
    if split_origin(path).is_some() {
        return path.to_string();
    }
    let Some((origin, base_path)) = split_origin(base) else {
        return format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    };
    if path.starts_with('/') {
        return format!("{origin}{path}");
    }
    let base_path = base_path.split(['?', '#']).next().unwrap_or_default();
    let dir = match base_path.rfind('/') {
        Some(idx) => &base_path[..=idx],
        None => "/",
    };
    format!("{origin}{dir}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_falls_back_to_localhost() {
        assert_eq!(resolve_base_url(None), "http://localhost:3000");
    }

    #[test]
    fn test_set_value_is_verbatim() {
        assert_eq!(
            resolve_base_url(Some("https://example.com")),
            "https://example.com"
        );
        assert_eq!(
            resolve_base_url(Some("https://example.com/")),
            "https://example.com/"
        );
    }

    #[test]
    fn test_unusable_values_fall_back() {
        assert_eq!(resolve_base_url(Some("")), DEFAULT_APP_URL);
        assert_eq!(resolve_base_url(Some("example.com")), DEFAULT_APP_URL);
        assert_eq!(resolve_base_url(Some("https://")), DEFAULT_APP_URL);
        assert_eq!(resolve_base_url(Some("ftp://example.com")), DEFAULT_APP_URL);
        assert_eq!(resolve_base_url(Some("https:// example.com")), DEFAULT_APP_URL);
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(
            resolve_base_url(Some("HTTPS://EXAMPLE.COM")),
            "HTTPS://EXAMPLE.COM"
        );
        assert_eq!(
            join("HTTPS://EXAMPLE.COM", "/og-image.jpg"),
            "HTTPS://EXAMPLE.COM/og-image.jpg"
        );
        assert_eq!(join("https://example.com", "HTTP://cdn.x/a.jpg"), "HTTP://cdn.x/a.jpg");
    }

    #[test]
    fn test_root_relative_paths_resolve_against_origin() {
        assert_eq!(join("https://example.com/app", "/og-image.jpg"), "https://example.com/og-image.jpg");
        assert_eq!(join("https://example.com/app/", "/"), "https://example.com/");
        assert_eq!(join("https://example.com:8443/app?x=1", "/a"), "https://example.com:8443/a");
    }

    #[test]
    fn test_relative_paths_resolve_next_to_last_segment() {
        assert_eq!(join("https://example.com/app", "b.jpg"), "https://example.com/b.jpg");
        assert_eq!(join("https://example.com/app/", "b.jpg"), "https://example.com/app/b.jpg");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("https://example.com", "/"), "https://example.com/");
        assert_eq!(join("https://example.com/", "/a.jpg"), "https://example.com/a.jpg");
        assert_eq!(join("https://example.com", "b.jpg"), "https://example.com/b.jpg");
        assert_eq!(join("https://example.com", "https://cdn.x/c.jpg"), "https://cdn.x/c.jpg");
    }
}
