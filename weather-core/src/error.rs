use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can end a lookup early.
///
/// Apart from [`WeatherError::NotFound`], every variant is a network-class
/// failure: the service could not be reached or did not answer usefully.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("No results found for '{query}'. Try a larger city or add country (e.g., 'Paris, FR').")]
    NotFound { query: String },

    #[error("{context}: {source}")]
    Network {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context} failed with status {status}: {body}")]
    Status {
        context: String,
        status: StatusCode,
        body: String,
    },

    #[error("{context}: {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl WeatherError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, WeatherError::NotFound { .. })
    }

    /// Process exit status for this failure class.
    pub fn exit_code(&self) -> u8 {
        if self.is_not_found() { 2 } else { 1 }
    }
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
