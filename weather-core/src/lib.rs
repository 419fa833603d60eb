//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The request-scoped domain model (places, current conditions, units)
//! - The WMO condition table and country flag glyphs
//! - Open-Meteo geocoding and forecast clients behind small traits
//! - The display content of a lookup, independent of terminal styling
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries.

pub mod conditions;
pub mod config;
pub mod error;
pub mod flag;
pub mod model;
pub mod provider;
pub mod report;

pub use conditions::describe;
pub use config::ClientConfig;
pub use error::{Result, WeatherError};
pub use flag::flag_for;
pub use model::{ConditionDescriptor, CurrentConditions, Place, UnitSystem};
pub use provider::{Forecaster, Geocoder, OpenMeteoClient};
pub use report::Report;

use tracing::info;

/// Resolve `city`, fetch its current conditions and build the report.
///
/// The forecast is only requested once geocoding has succeeded.
pub async fn lookup<G, F>(
    geocoder: &G,
    forecaster: &F,
    city: &str,
    units: UnitSystem,
) -> Result<Report>
where
    G: Geocoder + ?Sized,
    F: Forecaster + ?Sized,
{
    let place = geocoder.resolve(city).await?;
    info!(
        name = %place.name,
        latitude = place.latitude,
        longitude = place.longitude,
        "resolved place"
    );

    let current = forecaster.fetch(place.latitude, place.longitude, units).await?;

    Ok(Report::build(&place, &current, units))
}
