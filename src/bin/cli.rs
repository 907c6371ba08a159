//! Terminal front-end for the shortening flow.
//!
//! Drives [`ShorteningFlow`] the way a single-page form would: type a URL,
//! submit, read the notification, copy the short link.
//!
//! # Usage
//!
//! ```bash
//! # Shorten one URL and copy the result
//! cargo run --bin shortly-cli -- shorten https://example.com/very/long/path --copy
//!
//! # Prompt for URLs until you stop
//! cargo run --bin shortly-cli -- interactive
//!
//! # Print five random short codes
//! cargo run --bin shortly-cli -- code -n 5
//!
//! # Check whether a URL would be accepted
//! cargo run --bin shortly-cli -- check "htp:/bad"
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `SHORT_BASE_URL`, `SHORTEN_DELAY_MS`, `COPY_FEEDBACK_MS`.
//! Logs go to stderr, `warn` and above unless `RUST_LOG` says otherwise.

use shortly::config::{self, Config};
use shortly::infrastructure::clipboard::{MemoryClipboard, SystemClipboard};
use shortly::infrastructure::notify::ChannelNotifier;
use shortly::prelude::*;
use shortly::utils::url_validator::is_valid_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

/// Shorten URLs from the terminal.
#[derive(Parser)]
#[command(name = "shortly-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a single URL
    Shorten {
        /// URL to shorten (including http:// or https://)
        url: String,

        /// Copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Keep copies in process memory instead of the system clipboard
        #[arg(long)]
        memory_clipboard: bool,
    },

    /// Prompt for URLs until you stop
    Interactive {
        /// Keep copies in process memory instead of the system clipboard
        #[arg(long)]
        memory_clipboard: bool,
    },

    /// Print random short codes
    Code {
        /// Number of codes to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Check whether a URL would be accepted
    Check {
        /// URL to validate
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Shorten {
            url,
            copy,
            memory_clipboard,
        } => {
            let mut session = Session::new(&config, memory_clipboard);
            if session.shorten(&url).await.is_some() && copy {
                session.copy().await;
            }
        }
        Commands::Interactive { memory_clipboard } => {
            run_interactive(Session::new(&config, memory_clipboard)).await?;
        }
        Commands::Code { count } => {
            for _ in 0..count {
                println!("{}", ShortenService::generate_short_code());
            }
        }
        Commands::Check { url } => check_url(&url)?,
    }

    Ok(())
}

/// A flow plus the receiving end of its notifications.
struct Session {
    flow: ShorteningFlow,
    notifications: UnboundedReceiver<Notification>,
}

impl Session {
    fn new(config: &Config, memory_clipboard: bool) -> Self {
        let clipboard: Arc<dyn Clipboard> = if memory_clipboard {
            Arc::new(MemoryClipboard::new())
        } else {
            Arc::new(SystemClipboard::detect())
        };

        let (notifier, notifications) = ChannelNotifier::new();
        let service = Arc::new(ShortenService::new(
            config.base_url.clone(),
            config.shorten_delay(),
        ));

        let flow = ShorteningFlow::new(service, clipboard, Arc::new(notifier))
            .with_copy_feedback(config.copy_feedback());

        Self {
            flow,
            notifications,
        }
    }

    /// Submits `url`; Ctrl+C while waiting cancels the submission.
    async fn shorten(&mut self, url: &str) -> Option<ShortenResult> {
        self.flow.set_input(url);

        println!("{}", "Shortening...".dimmed());
        let outcome = tokio::select! {
            outcome = self.flow.submit() => outcome,
            _ = tokio::signal::ctrl_c() => {
                self.flow.cancel();
                Err(FlowError::Cancelled)
            }
        };
        self.drain_notifications();

        match outcome {
            Ok(result) => {
                println!(
                    "Your shortened URL: {}",
                    result.short_url.bright_green().bold()
                );
                Some(result)
            }
            Err(FlowError::Cancelled) => {
                println!("{}", "Cancelled".yellow());
                None
            }
            Err(err) => {
                tracing::debug!(error = %err, "Submission failed");
                None
            }
        }
    }

    async fn copy(&mut self) {
        if let Err(err) = self.flow.copy_to_clipboard().await {
            tracing::debug!(error = %err, "Copy failed");
        }
        self.drain_notifications();
    }

    fn drain_notifications(&mut self) {
        while let Ok(notification) = self.notifications.try_recv() {
            print_notification(&notification);
        }
    }
}

/// Runs the prompt loop until the user declines another round.
async fn run_interactive(mut session: Session) -> Result<()> {
    println!("{}", "🔗 URL Shortener".bright_blue().bold());
    println!("{}", "Make your long URLs short and easy to share".dimmed());
    println!();

    loop {
        let url: String = Input::new()
            .with_prompt("URL to shorten")
            .allow_empty(true)
            .interact_text()?;

        if session.shorten(&url).await.is_some()
            && Confirm::new()
                .with_prompt("Copy to clipboard?")
                .default(true)
                .interact()?
        {
            session.copy().await;
        }

        println!();
        if !Confirm::new()
            .with_prompt("Shorten another URL?")
            .default(true)
            .interact()?
        {
            break;
        }
    }

    Ok(())
}

fn print_notification(notification: &Notification) {
    match notification.kind {
        NotificationKind::Success => println!(
            "{} {}",
            format!("✔ {}", notification.headline()).green().bold(),
            notification.description
        ),
        NotificationKind::Destructive => eprintln!(
            "{} {}",
            format!("✖ {}", notification.headline()).red().bold(),
            notification.description
        ),
    }
}

fn check_url(url: &str) -> Result<()> {
    if is_valid_url(url) {
        println!("{} {}", "✔ valid".green().bold(), url);
        Ok(())
    } else {
        anyhow::bail!("'{}' is not a valid absolute URL", url)
    }
}
