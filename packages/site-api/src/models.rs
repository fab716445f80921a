//! Request payloads sent to the edge functions.
//!
//! Field names match the JSON bodies the functions expect. Unset optional
//! fields are left out of the body entirely.

use serde::Serialize;
use typed_builder::TypedBuilder;

/// Contact form submission (`submit-contact`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[builder(default, setter(strip_option(fallback = company_opt)))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[builder(default, setter(strip_option(fallback = phone_opt)))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Service the visitor is interested in (e.g. "consulting")
    #[builder(default, setter(strip_option(fallback = service_opt)))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[builder(default, setter(strip_option(fallback = budget_opt)))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[builder(default, setter(strip_option(fallback = message_opt)))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[builder(default, setter(strip_option(fallback = timeline_opt)))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

/// Newsletter signup (`subscribe-newsletter`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterSubscription {
    pub email: String,
}

impl NewsletterSubscription {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Job application (`apply-job`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct JobApplication {
    /// ID of the job opening being applied for
    pub job_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    #[builder(default, setter(strip_option(fallback = applicant_phone_opt)))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_phone: Option<String>,
    #[builder(default, setter(strip_option(fallback = cover_letter_opt)))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    /// Link to an uploaded resume
    #[builder(default, setter(strip_option(fallback = resume_url_opt)))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}
