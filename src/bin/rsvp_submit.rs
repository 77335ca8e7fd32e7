//! Command-line stand-in for the invitation site's RSVP form.
//!
//! Builds the normalized record from the flags, POSTs it once, and
//! prints the same success/error feedback the form shows. No retries;
//! run it again to resubmit.

use clap::Parser;
use rsvp_core::client::{RsvpForm, SubmissionClient};
use rsvp_core::core::config::ClientConfig;
use rsvp_core::shared::validation::email_looks_valid;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rsvp-submit")]
#[command(about = "Submit a wedding RSVP to the ingest endpoint")]
struct Cli {
    /// Guest name
    #[arg(long)]
    name: String,

    /// Guest email address
    #[arg(long)]
    email: String,

    /// Phone number (optional; non-digits are stripped)
    #[arg(long, default_value = "")]
    phone: String,

    /// Number of guests attending
    #[arg(long)]
    guests: String,

    /// Event to attend; repeat the flag for several (e.g. --event Wedding --event Haldi)
    #[arg(long = "event")]
    events: Vec<String>,

    /// Dietary restrictions (optional)
    #[arg(long, default_value = "")]
    dietary: String,

    /// Message for the couple (optional)
    #[arg(long, default_value = "")]
    message: String,

    /// Override the ingest endpoint URL (defaults to RSVP_ENDPOINT_URL)
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    // The blur-check analog: flag a malformed address without blocking
    if !cli.email.is_empty() && !email_looks_valid(&cli.email) {
        eprintln!("! The email address looks malformed: {}", cli.email);
    }

    let config = match cli.endpoint {
        Some(endpoint_url) => ClientConfig { endpoint_url },
        None => match ClientConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("✗ {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let form = RsvpForm {
        name: cli.name,
        email: cli.email,
        phone: cli.phone,
        guests: cli.guests,
        events: cli.events,
        dietary: cli.dietary,
        message: cli.message,
    };

    let client = SubmissionClient::new(config);

    println!("Submitting your RSVP...");
    match client.submit(form).await {
        Ok(message) => {
            println!("✓ {}", message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}
