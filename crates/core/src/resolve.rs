//! Link resolution against the scraped page URL.
//!
//! Every link emitted by the scraper must be absolute. Resolution never
//! fails outward: a candidate that cannot be turned into an absolute
//! `http(s)` URL resolves to the base URL instead.

use url::Url;

/// Internal reason a candidate could not be resolved.
#[derive(Debug)]
enum ResolutionError {
    Malformed(&'static str),
    Parse(url::ParseError),
    UnsupportedScheme(String),
}

impl std::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionError::Malformed(reason) => write!(f, "malformed link: {}", reason),
            ResolutionError::Parse(err) => write!(f, "unparseable link: {}", err),
            ResolutionError::UnsupportedScheme(scheme) => write!(f, "unsupported scheme: {}", scheme),
        }
    }
}

/// Resolves `candidate` against `base`, returning an absolute URL.
///
/// - `http://` / `https://` links are returned as-is, in the URL parser's
///   normalized form
/// - `//host/path` takes the scheme of `base`
/// - `/path` takes the scheme and host of `base`
/// - anything else is a relative reference joined onto `base`
///
/// Malformed candidates degrade to `base`. Results are normalized [`Url`]s,
/// so a bare-host base such as `https://a.com` comes back as `https://a.com/`.
///
/// # Example
///
/// ```rust
/// use newscan_core::resolve::resolve_url;
/// use url::Url;
///
/// let base = Url::parse("https://a.com/x/y").unwrap();
/// assert_eq!(resolve_url(&base, "/z").as_str(), "https://a.com/z");
/// assert_eq!(resolve_url(&base, "//cdn.com/p").as_str(), "https://cdn.com/p");
/// ```
pub fn resolve_url(base: &Url, candidate: &str) -> Url {
    match try_resolve(base, candidate) {
        Ok(url) => url,
        Err(err) => {
            tracing::debug!(candidate, base = %base, "{}; falling back to base", err);
            base.clone()
        }
    }
}

fn try_resolve(base: &Url, candidate: &str) -> Result<Url, ResolutionError> {
    let candidate = candidate.trim();

    if candidate.is_empty() {
        return Err(ResolutionError::Malformed("empty"));
    }

    // Absolute links go through the URL parser as they are; it percent-encodes
    // stray spaces in the path.
    let resolved = if has_http_scheme(candidate) {
        Url::parse(candidate)
    } else if candidate.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ResolutionError::Malformed("contains whitespace"));
    } else if candidate.starts_with("//") {
        Url::parse(&format!("{}:{}", base.scheme(), candidate))
    } else {
        // Root-relative paths replace the whole base path; join does exactly that.
        base.join(candidate)
    }
    .map_err(ResolutionError::Parse)?;

    match resolved.scheme() {
        "http" | "https" if resolved.has_host() => Ok(resolved),
        other => Err(ResolutionError::UnsupportedScheme(other.to_string())),
    }
}

fn has_http_scheme(candidate: &str) -> bool {
    let lower = candidate.get(..8).unwrap_or(candidate).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_absolute_unchanged() {
        let url = resolve_url(&base("https://a.com/x"), "http://other.org/story?id=4");
        assert_eq!(url.as_str(), "http://other.org/story?id=4");
    }

    #[test]
    fn test_protocol_relative_takes_base_scheme() {
        assert_eq!(resolve_url(&base("https://a.com/x/y"), "//cdn.com/p").as_str(), "https://cdn.com/p");
        assert_eq!(resolve_url(&base("http://a.com/x/y"), "//cdn.com/p").as_str(), "http://cdn.com/p");
    }

    #[test]
    fn test_root_relative_drops_base_path() {
        assert_eq!(resolve_url(&base("https://a.com/x/y"), "/z").as_str(), "https://a.com/z");
        assert_eq!(resolve_url(&base("https://a.com:8443/x/y?q=1"), "/z").as_str(), "https://a.com:8443/z");
    }

    #[test]
    fn test_relative_reference() {
        assert_eq!(resolve_url(&base("https://a.com/x/"), "z").as_str(), "https://a.com/x/z");
        assert_eq!(resolve_url(&base("https://a.com/x/y"), "z").as_str(), "https://a.com/x/z");
        assert_eq!(resolve_url(&base("https://a.com/x/y/"), "../z").as_str(), "https://a.com/x/z");
    }

    #[test]
    fn test_malformed_falls_back_to_base() {
        let b = base("https://a.com");
        assert_eq!(resolve_url(&b, "not a url###"), b);
        assert_eq!(resolve_url(&b, "http://"), b);
        assert_eq!(resolve_url(&b, "mailto:desk@a.com"), b);
        assert_eq!(resolve_url(&b, ""), b);
        assert_eq!(resolve_url(&b, "not a url###").as_str(), "https://a.com/");
    }

    #[test]
    fn test_absolute_link_with_space_is_encoded() {
        let url = resolve_url(&base("https://a.com/news"), "https://b.com/big story");
        assert_eq!(url.as_str(), "https://b.com/big%20story");
    }

    #[test]
    fn test_relative_link_with_space_falls_back() {
        let b = base("https://a.com/news");
        assert_eq!(resolve_url(&b, "big story"), b);
    }

    #[test]
    fn test_scheme_check_is_case_insensitive() {
        let url = resolve_url(&base("https://a.com/"), "HTTPS://B.com/Path");
        assert_eq!(url.as_str(), "https://b.com/Path");
    }
}
