use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// City used when a weather request does not name one.
pub const DEFAULT_CITY: &str = "Toronto";

/// Errors raised when a provider payload lacks the fields we render.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("weather payload missing field: {0}")]
    MissingField(&'static str),
}

/// Current conditions for a city, as rendered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Primary category, e.g. "Rain" or "Clear".
    pub condition: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Free-text description, e.g. "light rain". Empty when the provider
    /// omits it.
    pub description: String,
}

impl WeatherSnapshot {
    /// Pull a snapshot out of a raw OpenWeatherMap current-weather payload.
    ///
    /// Reads `weather[0].main` and `main.temp`. `weather[0].description` is
    /// optional since only the catch-all reply shows it.
    pub fn from_payload(payload: &Value) -> Result<Self, ProtocolError> {
        let first = payload
            .get("weather")
            .and_then(|w| w.get(0))
            .ok_or(ProtocolError::MissingField("weather[0]"))?;

        let condition = first
            .get("main")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingField("weather[0].main"))?;

        let description = first
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let temperature = payload
            .get("main")
            .and_then(|m| m.get("temp"))
            .and_then(Value::as_f64)
            .ok_or(ProtocolError::MissingField("main.temp"))?;

        Ok(Self {
            condition: condition.to_string(),
            temperature,
            description: description.to_string(),
        })
    }
}
