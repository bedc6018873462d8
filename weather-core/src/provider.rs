use crate::{Config, WeatherError, WeatherRecord, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Current-weather endpoint used when the config does not name one.
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Source of current conditions for a city.
///
/// One call is one outbound request: no caching, no retries.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherRecord, WeatherError>;
}

/// Construct the OpenWeather provider from config.
///
/// A missing API key is not an error here; it surfaces as
/// [`WeatherError::ConfigurationError`] on the first lookup so the UI can show it.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    let provider = OpenWeatherProvider::new(config.api_key().map(str::to_owned))
        .with_endpoint(config.endpoint());

    Box::new(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn provider_from_config_without_key_reports_configuration_error() {
        let cfg = Config::default();
        let provider = provider_from_config(&cfg);

        let err = provider.fetch_weather("London").await.unwrap_err();
        assert!(matches!(err, WeatherError::ConfigurationError));
        assert!(err.to_string().contains("weather configure"));
    }

    #[tokio::test]
    async fn blank_key_counts_as_missing() {
        let mut cfg = Config::default();
        cfg.set_api_key("   ".to_string());

        let err = provider_from_config(&cfg).fetch_weather("London").await.unwrap_err();
        assert!(matches!(err, WeatherError::ConfigurationError));
    }
}
