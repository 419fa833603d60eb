use std::time::Duration;

use cityweather_core::{
    ClientConfig, OpenMeteoClient, UnitSystem,
    config::{DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL},
    lookup,
};
use clap::{Parser, ValueEnum, builder::NonEmptyStringValueParser};
use tracing::debug;

use crate::render;

/// Exit status for malformed arguments, kept apart from the lookup failures.
pub const USAGE_EXIT_CODE: u8 = 64;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city (Open-Meteo, no key)")]
pub struct Cli {
    /// City name (e.g. 'Gaborone' or 'Paris, FR').
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub city: String,

    /// Units for temperature and wind.
    #[arg(long, value_enum, default_value_t = Units::Metric)]
    pub units: Units,

    /// Log requests and decoded responses to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, hide = true, default_value = DEFAULT_GEOCODING_URL)]
    pub geocoding_url: String,

    #[arg(long, hide = true, default_value = DEFAULT_FORECAST_URL)]
    pub forecast_url: String,

    #[arg(long, hide = true, default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Units {
    Metric,
    Imperial,
}

impl From<Units> for UnitSystem {
    fn from(units: Units) -> Self {
        match units {
            Units::Metric => UnitSystem::Metric,
            Units::Imperial => UnitSystem::Imperial,
        }
    }
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_geocoding_url(self.geocoding_url.as_str())
            .with_forecast_url(self.forecast_url.as_str())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let units = UnitSystem::from(self.units);
        let client = OpenMeteoClient::new(self.client_config())?;
        debug!(city = %self.city, %units, "looking up weather");

        let report = lookup(&client, &client, &self.city, units).await?;
        render::print(&report)?;

        Ok(())
    }
}
