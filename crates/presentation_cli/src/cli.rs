//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use domain::{DomainError, LocationQuery, UnitPreference};

/// Weather lookup CLI
#[derive(Debug, Parser)]
#[command(name = "weather-cli")]
#[command(author, version, about = "Current weather and 5-day forecast lookup", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./weather.toml when present)
    #[arg(short, long, global = true, env = "WEATHER_CLI_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up current weather and the daily forecast
    ///
    /// Example: weather-cli lookup London
    /// Example: weather-cli lookup --lat 52.52 --lon 13.405
    Lookup(LookupArgs),

    /// Interactive prompt: type a city per line, `:units` toggles units
    Shell,

    /// Show or change the stored temperature unit
    Units {
        #[command(subcommand)]
        action: Option<UnitsAction>,
    },
}

/// Arguments of `lookup`
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// City name, e.g. "London" or "Paris,FR" (default: configured location)
    #[arg(conflicts_with_all = ["lat", "lon"])]
    pub city: Vec<String>,

    /// Latitude in degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Display unit for this lookup only (metric or imperial)
    #[arg(short, long)]
    pub units: Option<UnitPreference>,
}

impl LookupArgs {
    /// Location named on the command line, if any
    pub fn query(&self) -> Result<Option<LocationQuery>, DomainError> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return LocationQuery::coordinates(lat, lon).map(Some);
        }
        if self.city.is_empty() {
            return Ok(None);
        }
        LocationQuery::city(self.city.join(" ")).map(Some)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum UnitsAction {
    /// Print the stored unit
    Show,
    /// Switch between metric and imperial
    Toggle,
    /// Store a specific unit
    Set {
        /// metric or imperial
        unit: UnitPreference,
    },
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
