//! User-facing notifications and the fixed copy each operation shows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Fixed titles and descriptions.
pub mod copy {
    pub const ERROR_TITLE: &str = "Error";

    // ========================================================================
    // Contact form
    // ========================================================================

    pub const CONTACT_SUCCESS_TITLE: &str = "Success!";
    pub const CONTACT_SUCCESS: &str =
        "Your message has been sent successfully. We'll get back to you soon!";
    pub const CONTACT_FAILED: &str = "Failed to submit form. Please try again.";

    // ========================================================================
    // Newsletter
    // ========================================================================

    pub const NEWSLETTER_SUCCESS_TITLE: &str = "Subscribed!";
    pub const NEWSLETTER_SUCCESS: &str =
        "Welcome to our newsletter! You'll receive the latest updates.";
    pub const NEWSLETTER_FAILED: &str = "Failed to subscribe. Please try again.";
    pub const ALREADY_SUBSCRIBED_TITLE: &str = "Already subscribed";
    pub const ALREADY_SUBSCRIBED: &str = "This email is already subscribed to our newsletter.";

    /// Substring of the remote error that marks a duplicate signup.
    pub const ALREADY_SUBSCRIBED_MARKER: &str = "already subscribed";

    // ========================================================================
    // Job applications
    // ========================================================================

    pub const APPLICATION_SUCCESS_TITLE: &str = "Application Sent!";
    pub const APPLICATION_SUCCESS: &str = "Your job application has been submitted successfully.";
    pub const APPLICATION_FAILED: &str = "Failed to submit application. Please try again.";

    // ========================================================================
    // Content loads
    // ========================================================================

    pub const BLOG_POSTS_FAILED: &str = "Failed to load blog posts. Please try again.";
    pub const PROJECTS_FAILED: &str = "Failed to load projects. Please try again.";
    pub const JOB_OPENINGS_FAILED: &str = "Failed to load job openings. Please try again.";
}
