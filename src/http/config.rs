//! Client configuration: base URL and timeout.

use crate::network::{current_origin, BASE_URL_ENV, DEFAULT_TIMEOUT};
use std::time::Duration;

/// Fixed configuration applied to every outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for relative request paths. Empty means "current origin".
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Read the base URL from `REPOWIKI_API_BASE_URL`, empty if unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV).unwrap_or_default();
        Self::new(&base_url)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve a request path against the base URL.
    ///
    /// Absolute URLs (`scheme://…`, any case) are used as is. Protocol-relative
    /// URLs (`//host/…`) take the scheme of the base URL or page origin.
    pub fn resolve_url(&self, path: &str) -> String {
        if has_scheme(path) {
            return path.to_string();
        }

        let base = match self.base_url.trim_end_matches('/') {
            "" => current_origin().map(|origin| origin.trim_end_matches('/').to_string()),
            base => Some(base.to_string()),
        };

        if path.starts_with("//") {
            return match base.as_deref().and_then(scheme_of) {
                Some(scheme) => format!("{}:{}", scheme, path),
                None => path.to_string(),
            };
        }

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        match base {
            Some(base) => format!("{}{}", base, path),
            None => {
                tracing::warn!("No base URL configured, sending relative URL {}", path);
                path
            }
        }
    }
}

/// Scheme of `url` if it starts with `scheme:`, per RFC 3986.
fn scheme_of(url: &str) -> Option<&str> {
    let (scheme, _) = url.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

/// `scheme://` prefix, matched case-insensitively.
fn has_scheme(url: &str) -> bool {
    scheme_of(url).is_some_and(|scheme| url[scheme.len() + 1..].starts_with("//"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout_is_ten_seconds() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_millis(10_000));
        assert!(config.base_url.is_empty());
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_from_lookup_reads_base_url() {
        let config = ClientConfig::from_lookup(|key| {
            (key == "REPOWIKI_API_BASE_URL").then(|| "http://localhost:8000".to_string())
        });
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_from_lookup_unset_is_empty() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_resolve_url_concatenates() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(
            config.resolve_url("/wikis/42/index.html"),
            "https://api.example.com/wikis/42/index.html"
        );
        assert_eq!(
            config.resolve_url("agents/list"),
            "https://api.example.com/agents/list"
        );
    }

    #[test]
    fn test_resolve_url_keeps_base_path_prefix() {
        let config = ClientConfig::new("https://example.com/api/");
        assert_eq!(
            config.resolve_url("/agents/generate"),
            "https://example.com/api/agents/generate"
        );
    }

    #[test]
    fn test_resolve_url_absolute_ignores_base() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(
            config.resolve_url("http://other.host/agents/list"),
            "http://other.host/agents/list"
        );
    }

    #[test]
    fn test_resolve_url_absolute_scheme_is_case_insensitive() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(
            config.resolve_url("HTTPS://Other.Host/x"),
            "HTTPS://Other.Host/x"
        );
        assert_eq!(
            config.resolve_url("git+ssh://host/repo"),
            "git+ssh://host/repo"
        );
    }

    #[test]
    fn test_resolve_url_protocol_relative_takes_base_scheme() {
        let config = ClientConfig::new("http://api.example.com");
        assert_eq!(
            config.resolve_url("//cdn.example.com/x"),
            "http://cdn.example.com/x"
        );
    }

    #[test]
    fn test_resolve_url_colon_in_path_is_not_a_scheme() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(
            config.resolve_url("/wikis/a:b/index.html"),
            "https://api.example.com/wikis/a:b/index.html"
        );
        assert_eq!(
            config.resolve_url("1ab://x"),
            "https://api.example.com/1ab://x"
        );
    }

    #[test]
    fn test_resolve_url_trims_unnormalized_base() {
        let config = ClientConfig {
            base_url: "https://api.example.com/".into(),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.resolve_url("/agents/list"),
            "https://api.example.com/agents/list"
        );
    }

    #[test]
    fn test_resolve_url_empty_base_stays_relative() {
        let config = ClientConfig::default();
        assert_eq!(config.resolve_url("/agents/list"), "/agents/list");
    }
}
