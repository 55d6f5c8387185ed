//! Subcommand runners

use std::process::ExitCode;

use tracing::info;

use crate::domain::config::NotifierConfig;
use crate::domain::notification::Notification;
use crate::domain::paths::{format_file_size, is_valid_url, sanitize_filename};
use crate::infrastructure::{create_notifier, ensure_directory, expand_path, get_home_dir};

use super::args::{Commands, NotifyArgs};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a parsed subcommand
pub async fn run(command: Commands, presenter: &Presenter) -> ExitCode {
    match command {
        Commands::Notify(args) => run_notify(args, presenter).await,
        Commands::Mkdir { path } => match ensure_directory(&path) {
            Ok(()) => {
                presenter.success(&format!("Directory ready: {}", path.display()));
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        },
        Commands::Home => {
            presenter.output(&get_home_dir());
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::Expand { path } => {
            presenter.output(&expand_path(&path).to_string_lossy());
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::Size { bytes } => {
            presenter.output(&format_file_size(bytes));
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::Sanitize { name } => {
            presenter.output(&sanitize_filename(&name));
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::CheckUrl { url } => {
            if is_valid_url(&url) {
                presenter.output("valid");
                ExitCode::from(EXIT_SUCCESS)
            } else {
                presenter.output("invalid");
                ExitCode::from(EXIT_ERROR)
            }
        }
    }
}

/// Send a single notification using defaults merged with flag/env overrides
async fn run_notify(args: NotifyArgs, presenter: &Presenter) -> ExitCode {
    let config = NotifierConfig::defaults().merge(args.config());

    let notifier = match create_notifier(&config) {
        Ok(n) => n,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let notification = Notification::new(args.title, args.message).with_sound(args.sound);
    info!(backend = ?config.backend, sound = notification.sound, "sending notification");

    match notifier.send(&notification).await {
        Ok(()) => {
            presenter.success("Notification sent");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.warn(&format!("Notification failed: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}
