//! Alumnet CLI - Main Entry Point
//!
//! A thin command-line front for the portal client: log in, browse the
//! feed and events, post, and run admin imports. Anything visual stays out
//! of this binary; it wires the adapters together and prints results.

use std::io::Write as _;
use std::sync::Arc;

use alumnet_application::{
    AdminApi, ApiError, AuthApi, AuthSession, EventsApi, FeedApi, LoginRequest, SessionStatus,
};
use alumnet_domain::{NewPost, PageQuery, RsvpStatus};
use alumnet_infrastructure::{
    ApiClient, ApiClientConfig, FileCredentialStore, HttpTokenRefresher, SystemClock,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

type Client = ApiClient<FileCredentialStore, HttpTokenRefresher, SystemClock>;

#[derive(Parser)]
#[command(name = "alumnet", about = "Alumni network portal client", version)]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = "ALUMNET_API_URL", default_value = "https://api.alumnet.example")]
    api_url: String,

    /// Credentials file path; defaults to the user config directory.
    #[arg(long, env = "ALUMNET_CREDENTIALS")]
    credentials: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with email and password (password read from stdin).
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
    },
    /// Clear stored credentials.
    Logout,
    /// Show session and token state.
    Status,
    /// List feed posts.
    Feed {
        /// Page to fetch.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Publish a post.
    Post {
        /// Post body.
        body: String,
    },
    /// List upcoming events.
    Events {
        /// Page to fetch.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// RSVP to an event.
    Rsvp {
        /// Event id.
        event_id: Uuid,
        /// Your answer.
        #[arg(value_enum)]
        answer: RsvpAnswer,
    },
    /// Bulk-import users from a CSV file (admin).
    ImportUsers {
        /// University tenant id.
        university_id: Uuid,
        /// CSV file path.
        csv_path: std::path::PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RsvpAnswer {
    Going,
    Interested,
    Declined,
}

impl From<RsvpAnswer> for RsvpStatus {
    fn from(answer: RsvpAnswer) -> Self {
        match answer {
            RsvpAnswer::Going => Self::Going,
            RsvpAnswer::Interested => Self::Interested,
            RsvpAnswer::Declined => Self::Declined,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let store = Arc::new(match cli.credentials.clone() {
        Some(path) => FileCredentialStore::new(path),
        None => FileCredentialStore::new(
            FileCredentialStore::default_path().ok_or("no user config directory found")?,
        ),
    });

    let config = ApiClientConfig::new(&cli.api_url)?;
    let refresher = HttpTokenRefresher::new(&config)?;
    let session = Arc::new(AuthSession::new(
        Arc::clone(&store),
        refresher,
        SystemClock::new(),
    ));
    let client = Arc::new(ApiClient::new(
        config,
        Arc::clone(&session),
        Arc::clone(&store),
    )?);

    tracing::debug!(api_url = %cli.api_url, "client configured");

    let result = run(cli.command, &client, &session, &store).await;
    if let Err(err) = result {
        let auth_failure = err
            .downcast_ref::<ApiError>()
            .is_some_and(ApiError::is_auth_error);
        if auth_failure {
            eprintln!("Not logged in (or session expired). Run `alumnet login` first.");
        } else {
            eprintln!("Error: {err}");
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(
    command: Command,
    client: &Arc<Client>,
    session: &Arc<AuthSession<FileCredentialStore, HttpTokenRefresher, SystemClock>>,
    store: &Arc<FileCredentialStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Login { email } => {
            let password = prompt_password()?;
            let auth = AuthApi::new(Arc::clone(client), Arc::clone(store));
            let profile = auth.login(&LoginRequest { email, password }).await?;
            println!("Logged in as {} <{}>", profile.full_name, profile.email);
        }

        Command::Logout => {
            let auth = AuthApi::new(Arc::clone(client), Arc::clone(store));
            auth.logout().await?;
            println!("Logged out.");
        }

        Command::Status => {
            let auth = AuthApi::new(Arc::clone(client), Arc::clone(store));
            match session.status().await {
                SessionStatus::Unauthenticated => println!("Not logged in."),
                SessionStatus::Active { expires_in_secs } => {
                    let who = auth
                        .cached_profile()
                        .await?
                        .map_or_else(|| "unknown user".to_string(), |p| p.email);
                    println!("Logged in as {who}; token valid for {expires_in_secs}s.");
                }
                SessionStatus::Expired => {
                    println!("Session expired; the next call will attempt a refresh.");
                }
            }
        }

        Command::Feed { page } => {
            let feed = FeedApi::new(Arc::clone(client));
            let posts = feed.list(&PageQuery::page(page)).await?;
            for post in &posts.items {
                println!(
                    "[{}] {}: {}",
                    post.created_at.format("%Y-%m-%d %H:%M"),
                    post.author_name,
                    post.body
                );
            }
            println!(
                "-- page {}/{} ({} posts total)",
                posts.page,
                posts.page_count(),
                posts.total
            );
        }

        Command::Post { body } => {
            let feed = FeedApi::new(Arc::clone(client));
            let post = feed.create(&NewPost::new(body)).await?;
            println!("Posted {}.", post.id);
        }

        Command::Events { page } => {
            let events = EventsApi::new(Arc::clone(client));
            let listing = events.list(&PageQuery::page(page)).await?;
            for event in &listing.items {
                println!(
                    "{}  {}  ({} attending)",
                    event.starts_at.format("%Y-%m-%d %H:%M"),
                    event.title,
                    event.attendee_count
                );
            }
        }

        Command::Rsvp { event_id, answer } => {
            let events = EventsApi::new(Arc::clone(client));
            events.rsvp(event_id, answer.into()).await?;
            println!("RSVP recorded.");
        }

        Command::ImportUsers {
            university_id,
            csv_path,
        } => {
            let bytes = tokio::fs::read(&csv_path).await?;
            let file_name = csv_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("users.csv")
                .to_string();

            let admin = AdminApi::new(Arc::clone(client));
            let report = admin
                .import_users(
                    university_id,
                    &file_name,
                    bytes,
                    Some(Arc::new(|sent, total| {
                        if let Some(total) = total.filter(|t| *t > 0) {
                            eprint!("\rUploading... {}%", sent * 100 / total);
                        }
                    })),
                )
                .await?;
            eprintln!();

            println!(
                "Imported: {} created, {} updated, {} skipped.",
                report.created, report.updated, report.skipped
            );
            for row_error in &report.errors {
                println!("  line {}: {}", row_error.line, row_error.message);
            }
        }
    }

    Ok(())
}

/// Reads a password from stdin without extra dependencies.
fn prompt_password() -> std::io::Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}
