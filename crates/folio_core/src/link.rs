use url::Url;

/// Turns a possibly bare or malformed link into a scheme-qualified one.
///
/// Inputs that already carry a recognized scheme (`http://`, `https://`,
/// `mailto:`) or are fragment references (`#...`) pass through with their
/// original casing. Anything else is assumed to be a web address missing
/// its scheme and gets `https://` prepended. Empty input stays empty.
pub fn normalize_href(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || lower.starts_with('#')
    {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Best-effort host extraction; never fails.
///
/// Strict parsing wins when it succeeds. When it does not, the fallback
/// strips a leading `http(s)://` and cuts at the first `/`, so even inputs
/// like `"::::"` yield a usable label.
pub fn domain_of(raw: &str) -> String {
    let normalized = normalize_href(raw);
    match Url::parse(&normalized) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_string(),
        Err(_) => {
            let stripped = normalized
                .strip_prefix("https://")
                .or_else(|| normalized.strip_prefix("http://"))
                .unwrap_or(&normalized);
            stripped.split('/').next().unwrap_or_default().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{domain_of, normalize_href};

    #[test]
    fn bare_domain_gets_https_scheme() {
        assert_eq!(normalize_href("example.com"), "https://example.com");
        assert_eq!(normalize_href("  example.com/path "), "https://example.com/path");
    }

    #[test]
    fn recognized_schemes_pass_through_with_casing() {
        assert_eq!(normalize_href("https://Example.com"), "https://Example.com");
        assert_eq!(normalize_href("HTTP://example.com"), "HTTP://example.com");
        assert_eq!(normalize_href(" mailto:me@example.com "), "mailto:me@example.com");
        assert_eq!(normalize_href("#projects"), "#projects");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_href(""), "");
        assert_eq!(normalize_href("   "), "");
    }

    #[test]
    fn domain_of_parses_strict_urls() {
        assert_eq!(domain_of("https://example.com/path"), "example.com");
        assert_eq!(domain_of("muisi.vercel.app"), "muisi.vercel.app");
    }

    #[test]
    fn domain_of_never_panics_on_garbage() {
        assert_eq!(domain_of(""), "");
        assert_eq!(domain_of("::::"), "::::");
        assert_eq!(domain_of("https:// spaced host/x"), " spaced host");
    }

    #[test]
    fn domain_of_mailto_has_no_host() {
        assert_eq!(domain_of("mailto:me@example.com"), "");
    }
}
