//! Contact form draft and `mailto:` link composition.

use thiserror::Error;

/// Subject used when the visitor leaves the subject field blank.
pub const DEFAULT_SUBJECT: &str = "Portfolio Inquiry";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Required contact fields that were left blank.
pub enum ContactError {
    /// The sender name is blank.
    #[error("your name is required")]
    MissingName,
    /// The message body is blank.
    #[error("a message is required")]
    MissingMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Contact form fields as typed by the visitor.
pub struct ContactDraft {
    /// Sender name (required).
    pub name: String,
    /// Subject line (optional).
    pub subject: String,
    /// Message body (required).
    pub message: String,
}

impl ContactDraft {
    /// Builds a `mailto:` URI addressed to `email` with percent-encoded subject and body.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError`] when the name or the message is blank.
    pub fn mailto(&self, email: &str) -> Result<String, ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }

        let subject = if self.subject.is_empty() {
            DEFAULT_SUBJECT
        } else {
            self.subject.as_str()
        };
        let body = format!("Name: {}\n\nMessage:\n{}", self.name, self.message);
        Ok(format!(
            "mailto:{email}?subject={}&body={}",
            urlencoding::encode(subject),
            urlencoding::encode(&body)
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn draft(name: &str, subject: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_subject_falls_back_to_default() {
        let uri = draft("Ada", "", "Hello")
            .mailto("owner@example.com")
            .expect("valid draft");
        assert_eq!(
            uri,
            "mailto:owner@example.com?subject=Portfolio%20Inquiry&body=Name%3A%20Ada%0A%0AMessage%3A%0AHello"
        );
    }

    #[test]
    fn whitespace_subject_is_kept_as_typed() {
        let uri = draft("Ada", "  ", "Hello")
            .mailto("owner@example.com")
            .expect("valid draft");
        assert!(uri.starts_with("mailto:owner@example.com?subject=%20%20&body="));
    }

    #[test]
    fn subject_and_body_are_percent_encoded() {
        let uri = draft("A&B", "Rates? 50% off", "x=1&y=2")
            .mailto("owner@example.com")
            .expect("valid draft");
        assert!(uri.starts_with("mailto:owner@example.com?subject=Rates%3F%2050%25%20off&body="));
        assert!(uri.ends_with("x%3D1%26y%3D2"));
        assert_eq!(uri.matches('&').count(), 1);
    }

    #[test]
    fn name_and_message_are_required() {
        assert_eq!(
            draft("", "Hi", "Hello").mailto("owner@example.com"),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            draft("Ada", "Hi", "   ").mailto("owner@example.com"),
            Err(ContactError::MissingMessage)
        );
    }
}
