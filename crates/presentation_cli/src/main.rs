//! Weather CLI
//!
//! Looks up current weather and a daily forecast from OpenWeatherMap.

#![allow(clippy::print_stdout)]

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, anyhow};
use application::{PreferenceStore, WeatherSession};
use clap::Parser;
use domain::UnitPreference;
use infrastructure::{AppConfig, JsonPreferenceStore, WeatherAdapter, init_telemetry};
use presentation_cli::{
    cli::{Cli, Commands, UnitsAction, log_filter_from_verbosity},
    render::{NO_DATA, render_session, render_units},
    shell,
};
use tokio::io::BufReader;

async fn start_session(
    config: &AppConfig,
    preferences: Arc<JsonPreferenceStore>,
) -> anyhow::Result<WeatherSession> {
    let client_config = config.weather.client_config()?;
    let adapter = WeatherAdapter::with_config(client_config)?;
    Ok(WeatherSession::start_with_settings(
        Arc::new(adapter),
        preferences,
        config.weather.session_settings(),
    )
    .await)
}

async fn units_command(
    store: &JsonPreferenceStore,
    action: Option<UnitsAction>,
) -> anyhow::Result<UnitPreference> {
    let stored = store.load().await?.unwrap_or_default();
    let units = match action {
        None | Some(UnitsAction::Show) => return Ok(stored),
        Some(UnitsAction::Toggle) => stored.toggled(),
        Some(UnitsAction::Set { unit }) => unit,
    };
    store.save(units).await?;
    Ok(units)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    // -v flags win over the configured filter
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_telemetry(&config.telemetry)?;

    let preferences = Arc::new(JsonPreferenceStore::new(&config.preferences.path));

    match cli.command {
        Commands::Units { action } => {
            let units = units_command(&preferences, action).await?;
            println!("{}", render_units(units));
        },

        Commands::Lookup(args) => {
            let query = args
                .query()?
                .or_else(|| config.weather.default_query())
                .ok_or_else(|| {
                    anyhow!("no location given and no weather.default_city configured")
                })?;

            let mut session = start_session(&config, preferences).await?;
            let units = args.units.unwrap_or_else(|| session.units());

            if !session.lookup(&query).await.has_data() {
                println!("{NO_DATA}");
                return Ok(ExitCode::FAILURE);
            }
            print!("{}", render_session(&session, units));
        },

        Commands::Shell => {
            let mut session = start_session(&config, preferences).await?;
            if let Some(query) = config.weather.default_query() {
                if session.lookup(&query).await.has_data() {
                    print!("{}", render_session(&session, session.units()));
                }
            }

            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            shell::run(&mut session, stdin, &mut stdout).await?;
        },
    }

    Ok(ExitCode::SUCCESS)
}
