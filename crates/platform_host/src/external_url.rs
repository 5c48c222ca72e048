//! External URL host-service contracts and the scheme policy applied before opening links.

use std::{cell::RefCell, future::Future, pin::Pin};

use thiserror::Error;
use url::Url;

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// URL schemes the desktop is allowed to hand to the host.
pub const ALLOWED_EXTERNAL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Host service for opening external URLs outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
/// In-memory external URL service that records every opened URL.
pub struct MemoryExternalUrlService {
    opened: RefCell<Vec<String>>,
}

impl MemoryExternalUrlService {
    /// Returns the URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an external URL is refused before reaching the host.
pub enum ExternalUrlError {
    /// The input is not an absolute URL.
    #[error("external url `{url}` is malformed: {reason}")]
    Malformed {
        /// Rejected input.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The URL scheme is outside [`ALLOWED_EXTERNAL_SCHEMES`].
    #[error("external url scheme `{scheme}` is not allowed")]
    DisallowedScheme {
        /// Rejected scheme.
        scheme: String,
    },
}

/// Parses `raw` and checks its scheme against [`ALLOWED_EXTERNAL_SCHEMES`].
///
/// # Errors
///
/// Returns [`ExternalUrlError::Malformed`] for unparsable input and
/// [`ExternalUrlError::DisallowedScheme`] for schemes such as `javascript:` or `file:`.
pub fn validate_external_url(raw: &str) -> Result<Url, ExternalUrlError> {
    let parsed = Url::parse(raw.trim()).map_err(|err| ExternalUrlError::Malformed {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;
    if !ALLOWED_EXTERNAL_SCHEMES.contains(&parsed.scheme()) {
        return Err(ExternalUrlError::DisallowedScheme {
            scheme: parsed.scheme().to_string(),
        });
    }
    Ok(parsed)
}

/// Validates `url` and opens it through `service`.
///
/// The original string is forwarded, not the parser's normalized form, so pre-encoded `mailto:`
/// queries reach the host byte-for-byte.
///
/// # Errors
///
/// Returns the policy rejection or the host error message.
pub async fn open_external_url_with(
    service: &dyn ExternalUrlService,
    url: &str,
) -> Result<(), String> {
    validate_external_url(url).map_err(|err| err.to_string())?;
    service.open_url(url.trim()).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn web_and_mail_schemes_are_accepted() {
        assert!(validate_external_url("https://example.com").is_ok());
        assert!(validate_external_url("http://example.com/path?q=1").is_ok());
        assert!(validate_external_url("mailto:someone@example.com?subject=Hi%20there").is_ok());
    }

    #[test]
    fn script_and_file_schemes_are_rejected() {
        assert_eq!(
            validate_external_url("javascript:alert(1)"),
            Err(ExternalUrlError::DisallowedScheme {
                scheme: "javascript".to_string()
            })
        );
        assert!(matches!(
            validate_external_url("file:///etc/passwd"),
            Err(ExternalUrlError::DisallowedScheme { .. })
        ));
    }

    #[test]
    fn relative_input_is_malformed() {
        assert!(matches!(
            validate_external_url("example.com"),
            Err(ExternalUrlError::Malformed { .. })
        ));
        assert!(matches!(
            validate_external_url(""),
            Err(ExternalUrlError::Malformed { .. })
        ));
    }

    #[test]
    fn open_with_forwards_original_text_only_when_allowed() {
        let service = MemoryExternalUrlService::default();
        block_on(open_external_url_with(
            &service,
            "mailto:a@example.com?subject=Portfolio%20Inquiry",
        ))
        .expect("mailto accepted");
        let rejected = block_on(open_external_url_with(&service, "javascript:void(0)"));

        assert!(rejected.is_err());
        assert_eq!(
            service.opened(),
            vec!["mailto:a@example.com?subject=Portfolio%20Inquiry".to_string()]
        );
    }
}
