//! Pure Supabase REST client.
//!
//! A minimal client for a Supabase project. Supports invoking edge functions
//! and reading tables through PostgREST. No domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use supabase_client::SupabaseClient;
//!
//! let client = SupabaseClient::from_env()?;
//!
//! // Edge function
//! let resp = client
//!     .invoke("subscribe-newsletter", &serde_json::json!({ "email": "ada@x.com" }))
//!     .await?;
//!
//! // Table read
//! let posts: Vec<serde_json::Value> = client
//!     .from("blog_posts")
//!     .select("*")
//!     .eq("published", true)
//!     .order("created_at", false)
//!     .execute()
//!     .await?;
//! ```

pub mod error;
pub mod query;
pub mod types;

pub use error::{Result, SupabaseError};
pub use query::QueryBuilder;
pub use types::{error_message_from_body, FunctionResponse};

use std::fmt;
use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, warn};

/// Pure Supabase API client.
#[derive(Clone)]
pub struct SupabaseClient {
    http_client: Client,
    url: String,
    api_key: String,
    access_token: Option<String>,
    timeout: Option<Duration>,
}

impl fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("url", &self.url)
            .field("has_access_token", &self.access_token.is_some())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl SupabaseClient {
    /// Create a client for the project at `url` using its anon (or service) key.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            http_client: Client::new(),
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            access_token: None,
            timeout: None,
        }
    }

    /// Create from environment variables `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key/value source holding `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("SUPABASE_URL")
            .ok_or_else(|| SupabaseError::Config("SUPABASE_URL not set".into()))?;
        let api_key = lookup("SUPABASE_ANON_KEY")
            .ok_or_else(|| SupabaseError::Config("SUPABASE_ANON_KEY not set".into()))?;
        Ok(Self::new(url, api_key))
    }

    /// Authenticate requests as a signed-in user instead of the anon role.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Use a preconfigured HTTP client (proxies, custom TLS).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    /// Apply a per-request timeout to every call.
    ///
    /// Set on each request, so it combines with any `with_http_client` client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn functions_url(&self) -> String {
        format!("{}/functions/v1", self.url)
    }

    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url)
    }

    /// Start a PostgREST read against `table`.
    pub fn from(&self, table: impl Into<String>) -> QueryBuilder<'_> {
        QueryBuilder::new(self, table)
    }

    /// Invoke the edge function `name` with a JSON body.
    pub async fn invoke<B: Serialize + ?Sized>(
        &self,
        name: &str,
        body: &B,
    ) -> Result<FunctionResponse> {
        let url = format!("{}/{}", self.functions_url(), name);
        debug!(function = name, "Invoking edge function");

        let resp = self
            .request(Method::POST, &url)
            .json(body)
            .send()
            .await?;

        let resp = Self::check_status(resp).await?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await?;

        Ok(FunctionResponse::decode(
            status,
            content_type.as_deref(),
            &body,
        ))
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        let builder = self
            .http_client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(bearer);

        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    /// Turn non-2xx responses into `SupabaseError::Http`.
    pub(crate) async fn check_status(resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let url = resp.url().path().to_string();
        let body = resp.text().await.unwrap_or_default();
        let message = error_message_from_body(&body);
        warn!(
            status = status.as_u16(),
            path = %url,
            message = message.as_deref().unwrap_or(""),
            "Supabase request failed"
        );

        Err(SupabaseError::Http {
            status: status.as_u16(),
            message,
        })
    }
}
