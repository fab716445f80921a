use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use supabase_client::SupabaseClient;

/// Backend configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_access_token: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let request_timeout = match lookup("SUPABASE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .context("SUPABASE_TIMEOUT_SECS must be a valid number")?;
                if secs == 0 {
                    return Err(anyhow!("SUPABASE_TIMEOUT_SECS must be greater than zero"));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            supabase_url: lookup("SUPABASE_URL").context("SUPABASE_URL must be set")?,
            supabase_anon_key: lookup("SUPABASE_ANON_KEY")
                .context("SUPABASE_ANON_KEY must be set")?,
            supabase_access_token: lookup("SUPABASE_ACCESS_TOKEN"),
            request_timeout,
        })
    }

    /// Build the Supabase client this configuration describes
    pub fn supabase_client(&self) -> SupabaseClient {
        let mut client = SupabaseClient::new(&self.supabase_url, &self.supabase_anon_key);

        if let Some(token) = &self.supabase_access_token {
            client = client.with_access_token(token);
        }

        if let Some(timeout) = self.request_timeout {
            client = client.with_timeout(timeout);
        }

        client
    }
}
