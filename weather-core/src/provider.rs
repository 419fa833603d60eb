use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::Result,
    model::{CurrentConditions, Place, UnitSystem},
};

pub mod openmeteo;

pub use openmeteo::OpenMeteoClient;

/// Resolves free-text place names to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Return the first candidate for `city`. The text, including any
    /// comma-separated qualifier, is passed to the service unchanged.
    async fn resolve(&self, city: &str) -> Result<Place>;
}

/// Fetches current conditions for a coordinate.
#[async_trait]
pub trait Forecaster: Send + Sync + Debug {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<CurrentConditions>;
}
