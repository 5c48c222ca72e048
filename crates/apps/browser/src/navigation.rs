//! Address resolution and back/forward history for the browser viewer.

use platform_host::{validate_external_url, ExternalUrlError};
use url::Url;

/// Scheme assumed when the visitor types a bare host such as `example.com`.
pub const DEFAULT_SCHEME: &str = "https";

/// Turns address-bar input into a validated URL.
///
/// Bare hosts get [`DEFAULT_SCHEME`] prepended. The result must pass the host URL policy.
///
/// # Errors
///
/// Returns [`ExternalUrlError`] when the input is unparsable or uses a disallowed scheme.
pub fn resolve_address(input: &str) -> Result<Url, ExternalUrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || has_scheme(trimmed) {
        return validate_external_url(trimmed);
    }
    validate_external_url(&format!("{DEFAULT_SCHEME}://{trimmed}"))
}

// `host:8080/path` is a port, not a scheme.
fn has_scheme(input: &str) -> bool {
    input.split_once(':').is_some_and(|(_, rest)| {
        let port = rest
            .split(|ch: char| matches!(ch, '/' | '?' | '#'))
            .next()
            .unwrap_or_default();
        port.is_empty() || !port.bytes().all(|byte| byte.is_ascii_digit())
    })
}

/// Whether the page can be shown inline (only web pages; `mailto:` goes to the host).
pub fn is_embeddable(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Window title for a page: its host, or the full URL for host-less schemes.
pub fn page_title(url: &Url) -> String {
    url.host_str()
        .map(|host| host.trim_start_matches("www.").to_string())
        .unwrap_or_else(|| url.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Linear navigation history with a cursor.
pub struct BrowserHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl BrowserHistory {
    /// Creates a history that starts at `url`, if any.
    pub fn starting_at(url: Option<String>) -> Self {
        Self {
            entries: url.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Current page, if any page was visited.
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Visits `url`, discarding forward entries. Revisiting the current page is a no-op.
    pub fn visit(&mut self, url: impl Into<String>) {
        let url = url.into();
        if self.current() == Some(url.as_str()) {
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
    }

    /// Whether [`BrowserHistory::back`] would move.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether [`BrowserHistory::forward`] would move.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Steps back one page.
    pub fn back(&mut self) {
        if self.can_go_back() {
            self.cursor -= 1;
        }
    }

    /// Steps forward one page.
    pub fn forward(&mut self) {
        if self.can_go_forward() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_hosts_default_to_https() {
        let url = resolve_address("  example.com/docs ").expect("resolves");
        assert_eq!(url.as_str(), "https://example.com/docs");
        assert_eq!(page_title(&url), "example.com");
        assert_eq!(
            resolve_address("localhost:8080").expect("resolves").as_str(),
            "https://localhost:8080/"
        );
        assert_eq!(
            resolve_address("localhost:8080/admin?tab=1")
                .expect("resolves")
                .as_str(),
            "https://localhost:8080/admin?tab=1"
        );
    }

    #[test]
    fn scheme_followed_by_digits_is_not_read_as_a_port() {
        let url = resolve_address("mailto:5551234@example.com").expect("resolves");
        assert_eq!(url.scheme(), "mailto");
        assert_eq!(url.as_str(), "mailto:5551234@example.com");
    }

    #[test]
    fn explicit_schemes_follow_the_host_policy() {
        assert!(resolve_address("http://example.com").is_ok());
        assert!(matches!(
            resolve_address("javascript:alert(1)"),
            Err(ExternalUrlError::DisallowedScheme { .. })
        ));
        assert!(resolve_address("").is_err());
    }

    #[test]
    fn mailto_is_not_embeddable_and_titles_with_full_url() {
        let url = resolve_address("mailto:owner@example.com").expect("resolves");
        assert!(!is_embeddable(&url));
        assert_eq!(page_title(&url), "mailto:owner@example.com");
        assert_eq!(
            page_title(&resolve_address("https://www.example.com").expect("resolves")),
            "example.com"
        );
    }

    #[test]
    fn history_truncates_forward_entries_on_visit() {
        let mut history = BrowserHistory::starting_at(Some("https://a.test/".to_string()));
        history.visit("https://b.test/");
        history.visit("https://c.test/");
        history.back();
        history.back();
        assert_eq!(history.current(), Some("https://a.test/"));
        assert!(!history.can_go_back());

        history.forward();
        history.visit("https://d.test/");
        assert_eq!(history.current(), Some("https://d.test/"));
        assert!(!history.can_go_forward());
        history.back();
        assert_eq!(history.current(), Some("https://b.test/"));
    }

    #[test]
    fn empty_history_and_repeat_visits() {
        let mut history = BrowserHistory::starting_at(None);
        assert_eq!(history.current(), None);
        history.back();
        history.visit("https://a.test/");
        history.visit("https://a.test/");
        assert_eq!(history.current(), Some("https://a.test/"));
        assert!(!history.can_go_back());
    }
}
