use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    config::ClientConfig,
    error::{Result, WeatherError},
    model::{CurrentConditions, MISSING_CONDITION_CODE, Place, UnitSystem},
};

use super::{Forecaster, Geocoder};

/// Client for the Open-Meteo geocoding and forecast APIs. Neither needs a key.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    config: ClientConfig,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|source| WeatherError::Network {
                context: "Failed to build HTTP client".to_string(),
                source,
            })?;

        Ok(Self { config, http })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        what: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!(%url, ?query, "sending {what} request");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| self.network_error(what, source))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| self.network_error(what, source))?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                context: format!("Open-Meteo {what} request"),
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| WeatherError::MalformedResponse {
            context: format!("Failed to parse Open-Meteo {what} JSON"),
            source,
        })
    }

    fn network_error(&self, what: &str, source: reqwest::Error) -> WeatherError {
        let context = if source.is_timeout() {
            format!(
                "Open-Meteo {what} request timed out after {}s",
                self.config.timeout.as_secs_f64()
            )
        } else {
            format!("Failed to send request to Open-Meteo ({what})")
        };

        WeatherError::Network { context, source }
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Option<Vec<GeoResult>>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    name: String,
    country_code: Option<String>,
    admin1: Option<String>,
}

impl From<GeoResult> for Place {
    fn from(it: GeoResult) -> Self {
        Place {
            latitude: it.latitude,
            longitude: it.longitude,
            name: it.name,
            country_code: it.country_code,
            region: it.admin1,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<OmCurrent>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature: Option<f64>,
    windspeed: Option<f64>,
    // Integral in practice; accepted as a float and truncated.
    weathercode: Option<f64>,
}

impl From<OmCurrent> for CurrentConditions {
    fn from(current: OmCurrent) -> Self {
        CurrentConditions {
            temperature: current.temperature,
            wind_speed: current.windspeed,
            code: current
                .weathercode
                .map(|code| code as i32)
                .unwrap_or(MISSING_CONDITION_CODE),
        }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    async fn resolve(&self, city: &str) -> Result<Place> {
        let query = [
            ("name", city.to_string()),
            ("count", "1".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];

        let parsed: GeoResponse = self
            .get_json("geocoding", &self.config.geocoding_url, &query)
            .await?;

        let place: Place = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NotFound { query: city.to_string() })?
            .into();

        debug!(?place, "geocoding resolved");
        Ok(place)
    }
}

#[async_trait]
impl Forecaster for OpenMeteoClient {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<CurrentConditions> {
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("temperature_unit", units.temperature_param().to_string()),
            ("windspeed_unit", units.wind_param().to_string()),
            ("timezone", "auto".to_string()),
        ];

        let parsed: ForecastResponse = self
            .get_json("forecast", &self.config.forecast_url, &query)
            .await?;

        let current = parsed
            .current_weather
            .map(CurrentConditions::from)
            .unwrap_or_default();

        debug!(?current, "forecast decoded");
        Ok(current)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn client_for(server: &MockServer) -> OpenMeteoClient {
        let config = ClientConfig::default()
            .with_geocoding_url(server.url("/v1/search"))
            .with_forecast_url(server.url("/v1/forecast"))
            .with_timeout(Duration::from_millis(500));
        OpenMeteoClient::new(config).expect("client should build")
    }

    #[tokio::test]
    async fn resolve_returns_first_candidate() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/search")
                    .query_param("name", "Paris, FR")
                    .query_param("count", "1")
                    .query_param("language", "en")
                    .query_param("format", "json");
                then.status(200).json_body(json!({
                    "results": [
                        {
                            "latitude": 48.8566,
                            "longitude": 2.3522,
                            "name": "Paris",
                            "country_code": "FR"
                        },
                        {
                            "latitude": 33.66,
                            "longitude": -95.55,
                            "name": "Paris",
                            "country_code": "US",
                            "admin1": "Texas"
                        }
                    ]
                }));
            })
            .await;

        let place = client_for(&server).resolve("Paris, FR").await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            place,
            Place {
                latitude: 48.8566,
                longitude: 2.3522,
                name: "Paris".into(),
                country_code: Some("FR".into()),
                region: None,
            }
        );
    }

    #[tokio::test]
    async fn resolve_without_results_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/search");
                then.status(200).json_body(json!({ "generationtime_ms": 0.5 }));
            })
            .await;

        let err = client_for(&server).resolve("Nowhereville").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("Nowhereville"));
    }

    #[tokio::test]
    async fn resolve_with_empty_results_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/search");
                then.status(200).json_body(json!({ "results": [] }));
            })
            .await;

        let err = client_for(&server).resolve("Qwxz").await.unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn non_success_status_is_network_class_regardless_of_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/search");
                then.status(503).json_body(json!({
                    "results": [{ "latitude": 1.0, "longitude": 2.0, "name": "Ghost" }]
                }));
            })
            .await;

        let err = client_for(&server).resolve("Ghost").await.unwrap_err();

        assert!(matches!(err, WeatherError::Status { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn slow_service_times_out_as_network_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/forecast");
                then.status(200)
                    .delay(Duration::from_secs(2))
                    .json_body(json!({ "current_weather": { "temperature": 1.0 } }));
            })
            .await;

        let err = client_for(&server)
            .fetch(0.0, 0.0, UnitSystem::Metric)
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Network { .. }));
        assert!(err.to_string().contains("timed out"));
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn fetch_requests_current_weather_in_metric_units() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/forecast")
                    .query_param("latitude", "48.8566")
                    .query_param("longitude", "2.3522")
                    .query_param("current_weather", "true")
                    .query_param("temperature_unit", "celsius")
                    .query_param("windspeed_unit", "kmh")
                    .query_param("timezone", "auto");
                then.status(200).json_body(json!({
                    "timezone": "Europe/Paris",
                    "current_weather": { "temperature": 18.5, "windspeed": 12.0, "weathercode": 1 }
                }));
            })
            .await;

        let current = client_for(&server)
            .fetch(48.8566, 2.3522, UnitSystem::Metric)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            current,
            CurrentConditions {
                temperature: Some(18.5),
                wind_speed: Some(12.0),
                code: 1,
            }
        );
    }

    #[tokio::test]
    async fn fetch_requests_imperial_units() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/forecast")
                    .query_param("temperature_unit", "fahrenheit")
                    .query_param("windspeed_unit", "mph");
                then.status(200).json_body(json!({
                    "current_weather": { "temperature": 65.3, "windspeed": 7.5, "weathercode": 3.0 }
                }));
            })
            .await;

        let current = client_for(&server)
            .fetch(40.71, -74.01, UnitSystem::Imperial)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(current.code, 3);
    }

    #[tokio::test]
    async fn missing_current_block_yields_defaults() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/forecast");
                then.status(200).json_body(json!({ "latitude": 10.0, "longitude": 20.0 }));
            })
            .await;

        let current = client_for(&server)
            .fetch(10.0, 20.0, UnitSystem::Metric)
            .await
            .unwrap();

        assert_eq!(current, CurrentConditions::default());
        assert_eq!(current.code, MISSING_CONDITION_CODE);
    }

    #[tokio::test]
    async fn partial_current_block_keeps_what_was_sent() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/forecast");
                then.status(200).json_body(json!({ "current_weather": { "temperature": 5.0 } }));
            })
            .await;

        let current = client_for(&server)
            .fetch(60.17, 24.94, UnitSystem::Metric)
            .await
            .unwrap();

        assert_eq!(
            current,
            CurrentConditions {
                temperature: Some(5.0),
                wind_speed: None,
                code: MISSING_CONDITION_CODE,
            }
        );
    }

    #[tokio::test]
    async fn garbage_body_is_malformed_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/forecast");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let err = client_for(&server)
            .fetch(1.0, 1.0, UnitSystem::Metric)
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::MalformedResponse { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(150);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
