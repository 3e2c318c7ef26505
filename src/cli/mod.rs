use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

pub mod day;
pub mod edit;
pub mod serve;
pub mod todo;

use crate::core::{AppConfig, init_tracing};
use crate::views::ViewMode;
use todo::TodoCommand;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,

        /// Day to open, defaults to tomorrow
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print the day from the backend
    Show {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_enum)]
        view: Option<ViewMode>,
    },
    /// Decode a schedule file and print its events
    Decode {
        file: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Rewrite a schedule file in canonical form on stdout
    Normalize { file: String },
    /// Upload a schedule file to the backend
    Push {
        file: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_enum)]
        view: Option<ViewMode>,
    },
    /// Edit the day interactively
    Edit {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_enum)]
        view: Option<ViewMode>,
    },
    /// Manage the todo list
    Todo {
        #[command(subcommand)]
        command: TodoCommand,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

fn log_filter(command: Option<&Command>) -> String {
    match command {
        Some(Command::Serve { .. }) => format!(
            "{}=debug,tower_http=debug,axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        ),
        _ => format!("{}=info", env!("CARGO_CRATE_NAME")),
    }
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Installed before reading the config so its warnings are seen
    init_tracing(&log_filter(args.command.as_ref()));
    let mut config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port, date }) => {
            let date = date.unwrap_or_else(|| config.default_date());
            serve::run(host, port, config, date).await?;
        }
        Some(Command::Show { date, view }) => {
            config.view = view.unwrap_or(config.view);
            let date = date.unwrap_or_else(|| config.default_date());
            day::show(&config, date).await?;
        }
        Some(Command::Decode { file, date }) => {
            let date = date.unwrap_or_else(|| config.default_date());
            day::decode(&config, &file, date)?;
        }
        Some(Command::Normalize { file }) => {
            day::normalize(&config, &file)?;
        }
        Some(Command::Push { file, date, view }) => {
            config.view = view.unwrap_or(config.view);
            let date = date.unwrap_or_else(|| config.default_date());
            day::push(&config, &file, date).await?;
        }
        Some(Command::Edit { date, view }) => {
            config.view = view.unwrap_or(config.view);
            let date = date.unwrap_or_else(|| config.default_date());
            edit::run(&config, date).await?;
        }
        Some(Command::Todo { command }) => {
            todo::run(&config, command).await?;
        }
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_logs_requests_only_when_serving() {
        let serve = Cli::parse_from(["dayplan", "serve"]);
        assert!(log_filter(serve.command.as_ref()).contains("tower_http=debug"));

        let show = Cli::parse_from(["dayplan", "show", "--view", "file"]);
        assert_eq!(log_filter(show.command.as_ref()), "dayplan=info");
        assert_eq!(log_filter(None), "dayplan=info");
    }
}
