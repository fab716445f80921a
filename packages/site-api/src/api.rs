//! Request-dispatch facade used by the site's forms and listings.
//!
//! Writes (contact, newsletter, job application) notify and then hand the
//! failure back to the caller. Reads (blog posts, projects, job openings)
//! notify and fall back to an empty list.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::{ApiError, Result};
use crate::kernel::{BaseBackend, BaseNotifier};
use crate::models::{ContactSubmission, JobApplication, NewsletterSubscription};
use crate::notifications::{copy, Notification};
use crate::queries::{self, CollectionQuery};

/// Edge function names.
pub mod functions {
    pub const SUBMIT_CONTACT: &str = "submit-contact";
    pub const SUBSCRIBE_NEWSLETTER: &str = "subscribe-newsletter";
    pub const APPLY_JOB: &str = "apply-job";
}

#[derive(Clone)]
pub struct SiteApi {
    backend: Arc<dyn BaseBackend>,
    notifier: Arc<dyn BaseNotifier>,
}

impl SiteApi {
    pub fn new(backend: Arc<dyn BaseBackend>, notifier: Arc<dyn BaseNotifier>) -> Self {
        Self { backend, notifier }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    pub async fn submit_contact_form(&self, form: &ContactSubmission) -> Result<Value> {
        let result = self.invoke(functions::SUBMIT_CONTACT, form).await;

        match result {
            Ok(data) => {
                self.notifier.notify(Notification::success(
                    copy::CONTACT_SUCCESS_TITLE,
                    copy::CONTACT_SUCCESS,
                ));
                Ok(data)
            }
            Err(e) => {
                error!(error = %e, "Contact form submission error");
                self.notify_error(&e, copy::CONTACT_FAILED);
                Err(e)
            }
        }
    }

    pub async fn subscribe_newsletter(&self, email: impl Into<String>) -> Result<Value> {
        let subscription = NewsletterSubscription::new(email);
        let result = self
            .invoke(functions::SUBSCRIBE_NEWSLETTER, &subscription)
            .await;

        match result {
            Ok(data) => {
                self.notifier.notify(Notification::success(
                    copy::NEWSLETTER_SUCCESS_TITLE,
                    copy::NEWSLETTER_SUCCESS,
                ));
                Ok(data)
            }
            Err(e) => {
                error!(error = %e, "Newsletter subscription error");
                if is_already_subscribed(&e) {
                    self.notifier.notify(Notification::destructive(
                        copy::ALREADY_SUBSCRIBED_TITLE,
                        copy::ALREADY_SUBSCRIBED,
                    ));
                } else {
                    self.notify_error(&e, copy::NEWSLETTER_FAILED);
                }
                Err(e)
            }
        }
    }

    pub async fn apply_for_job(&self, application: &JobApplication) -> Result<Value> {
        let result = self.invoke(functions::APPLY_JOB, application).await;

        match result {
            Ok(data) => {
                self.notifier.notify(Notification::success(
                    copy::APPLICATION_SUCCESS_TITLE,
                    copy::APPLICATION_SUCCESS,
                ));
                Ok(data)
            }
            Err(e) => {
                error!(error = %e, job_id = %application.job_id, "Job application error");
                self.notify_error(&e, copy::APPLICATION_FAILED);
                Err(e)
            }
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub async fn fetch_blog_posts(&self) -> Vec<Value> {
        self.read(queries::blog_posts(), copy::BLOG_POSTS_FAILED).await
    }

    pub async fn fetch_projects(&self) -> Vec<Value> {
        self.read(queries::projects(), copy::PROJECTS_FAILED).await
    }

    pub async fn fetch_job_openings(&self) -> Vec<Value> {
        self.read(queries::job_openings(), copy::JOB_OPENINGS_FAILED).await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn invoke<P: Serialize>(&self, function: &str, payload: &P) -> Result<Value> {
        let body = serde_json::to_value(payload)
            .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?;

        debug!(function, "Invoking remote procedure");
        let data = self.backend.invoke(function, body).await?;
        info!(function, "Remote procedure succeeded");
        Ok(data)
    }

    async fn read(&self, query: CollectionQuery, failure: &str) -> Vec<Value> {
        match self.backend.select(&query).await {
            Ok(rows) => {
                debug!(collection = %query.collection, count = rows.len(), "Loaded collection");
                rows
            }
            Err(e) => {
                error!(collection = %query.collection, error = %e, "Error fetching collection");
                self.notifier
                    .notify(Notification::destructive(copy::ERROR_TITLE, failure));
                Vec::new()
            }
        }
    }

    fn notify_error(&self, err: &ApiError, fallback: &str) {
        let description = err
            .message()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        self.notifier
            .notify(Notification::destructive(copy::ERROR_TITLE, description));
    }
}

fn is_already_subscribed(err: &ApiError) -> bool {
    err.message()
        .is_some_and(|m| m.contains(copy::ALREADY_SUBSCRIBED_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_subscribed_detection() {
        assert!(is_already_subscribed(&ApiError::remote("Email already subscribed")));
        assert!(!is_already_subscribed(&ApiError::remote("Invalid email")));
        assert!(!is_already_subscribed(&ApiError::Remote {
            status: Some(409),
            message: None
        }));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(!is_already_subscribed(&ApiError::remote("ALREADY SUBSCRIBED")));
    }
}
