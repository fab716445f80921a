//! CLI for exercising the site backend from a terminal
//!
//! Runs a single operation against the configured Supabase project and
//! prints the returned JSON. Notifications go to the log.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use site_api::kernel::{SupabaseAdapter, TracingNotifier};
use site_api::{Config, ContactSubmission, JobApplication, SiteApi};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-api")]
#[command(about = "Submit forms and read published content")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        budget: Option<String>,
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        timeline: Option<String>,
    },

    /// Subscribe an email to the newsletter
    Subscribe { email: String },

    /// Apply for a job opening
    Apply {
        #[arg(long)]
        job_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        cover_letter: Option<String>,
        #[arg(long)]
        resume_url: Option<String>,
    },

    /// List published blog posts
    BlogPosts,

    /// List projects
    Projects,

    /// List active job openings
    JobOpenings,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,site_api=debug,supabase_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let client = config.supabase_client();
    tracing::info!(url = %client.url(), "Configuration loaded");

    let api = SiteApi::new(
        Arc::new(SupabaseAdapter::new(Arc::new(client))),
        Arc::new(TracingNotifier),
    );

    let output: Value = match cli.command {
        Commands::Contact {
            name,
            email,
            company,
            phone,
            service,
            budget,
            message,
            timeline,
        } => {
            let form = ContactSubmission::builder()
                .name(name)
                .email(email)
                .company_opt(company)
                .phone_opt(phone)
                .service_opt(service)
                .budget_opt(budget)
                .message_opt(message)
                .timeline_opt(timeline)
                .build();

            api.submit_contact_form(&form)
                .await
                .context("Contact form submission failed")?
        }
        Commands::Subscribe { email } => api
            .subscribe_newsletter(email)
            .await
            .context("Newsletter subscription failed")?,
        Commands::Apply {
            job_id,
            name,
            email,
            phone,
            cover_letter,
            resume_url,
        } => {
            let application = JobApplication::builder()
                .job_id(job_id)
                .applicant_name(name)
                .applicant_email(email)
                .applicant_phone_opt(phone)
                .cover_letter_opt(cover_letter)
                .resume_url_opt(resume_url)
                .build();

            api.apply_for_job(&application)
                .await
                .context("Job application failed")?
        }
        Commands::BlogPosts => Value::Array(api.fetch_blog_posts().await),
        Commands::Projects => Value::Array(api.fetch_projects().await),
        Commands::JobOpenings => Value::Array(api.fetch_job_openings().await),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
