//! User-facing notifications emitted by the shortening flow.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::errors::ShortenError;

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Destructive,
}

/// A short message telling the user how an operation went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a success notification.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    /// Creates an error-styled notification.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Destructive, title, description)
    }

    fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            issued_at: Utc::now(),
        }
    }

    pub fn shortened() -> Self {
        Self::success("Success!", "Your URL has been shortened")
    }

    pub fn copied() -> Self {
        Self::success("Copied!", "Short URL copied to clipboard")
    }

    pub fn copy_failed() -> Self {
        Self::destructive("Copy failed", "Could not copy the short URL to the clipboard")
    }

    /// Maps a rejected request to its notification.
    pub fn rejected(error: &ShortenError) -> Self {
        match error {
            ShortenError::EmptyInput => Self::destructive("Error", error.to_string()),
            ShortenError::InvalidUrl { .. } => Self::destructive("Invalid URL", error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    /// Title prefixed with the UTC time it was issued, e.g. `[14:03:27] Copied!`.
    pub fn headline(&self) -> String {
        format!("[{}] {}", self.issued_at.format("%H:%M:%S"), self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_empty_input() {
        let n = Notification::rejected(&ShortenError::EmptyInput);
        assert_eq!(n.kind, NotificationKind::Destructive);
        assert_eq!(n.title, "Error");
        assert_eq!(n.description, "Please enter a URL to shorten");
    }

    #[test]
    fn test_rejected_invalid_url() {
        let n = Notification::rejected(&ShortenError::InvalidUrl {
            input: "nope".to_string(),
        });
        assert_eq!(n.title, "Invalid URL");
        assert!(n.description.contains("http://"));
        assert!(!n.is_success());
    }

    #[test]
    fn test_headline_carries_issue_time() {
        let before = Utc::now();
        let mut n = Notification::copied();
        assert!(n.issued_at >= before && n.issued_at <= Utc::now());

        n.issued_at = "2024-05-01T14:03:27Z".parse().unwrap();
        assert_eq!(n.headline(), "[14:03:27] Copied!");
    }

    #[test]
    fn test_success_notifications() {
        assert!(Notification::shortened().is_success());
        assert!(Notification::copied().is_success());
        assert!(!Notification::copy_failed().is_success());
    }
}
