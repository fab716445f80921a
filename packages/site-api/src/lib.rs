// Site API - client-side data access for the agency website
//
// Forwards form submissions to hosted edge functions and reads published
// content from the hosted database, reporting outcomes through notifications.
//
// The backend and the notifier are injected (see kernel/traits.rs) so the
// facade runs against mocks in tests and against Supabase in production.

pub mod api;
pub mod config;
pub mod error;
pub mod kernel;
pub mod models;
pub mod notifications;
pub mod queries;

pub use api::SiteApi;
pub use config::Config;
pub use error::{ApiError, Result};
pub use models::{ContactSubmission, JobApplication, NewsletterSubscription};
pub use notifications::{Notification, NotificationVariant};
