use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;
use weather_core::{Config, SearchController, ViewState, provider_from_config, render};

use crate::interactive;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for any city")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Search cities interactively (the default).
    Search,

    /// Show weather for one city and exit.
    Show {
        /// City name, e.g. "London" or "São Paulo".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Search) {
            Command::Configure => {
                configure(self.config)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Search => {
                let config = load_config(self.config.as_ref())?;
                let controller = SearchController::new(provider_from_config(&config));
                interactive::run(&controller).await?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city } => {
                let config = load_config(self.config.as_ref())?;
                let controller = SearchController::new(provider_from_config(&config));
                show(&controller, &city).await
            }
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn configure(path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = load_config(path.as_ref())?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_help_message("Get one at https://openweathermap.org/api")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());

    let saved_to = match path {
        Some(path) => {
            config.save_to(&path)?;
            path
        }
        None => config.save()?,
    };

    println!("Saved configuration to {}", saved_to.display());
    Ok(())
}

async fn show(controller: &SearchController, city: &str) -> anyhow::Result<ExitCode> {
    controller.on_search(city).await?;

    let state = controller.snapshot();
    println!("{}", render(&state));

    Ok(match state {
        ViewState::Ready(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
