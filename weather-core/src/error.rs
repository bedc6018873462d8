use thiserror::Error;

/// Failure of a single weather lookup. The `Display` text of each variant is
/// what the user gets to see.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("API key is not configured. Run `weather configure` and enter your OpenWeather API key.")]
    ConfigurationError,

    #[error("Weather endpoint \"{0}\" is not a valid URL. Check `endpoint` in your config.")]
    InvalidEndpoint(String),

    #[error("Network error. Please check your internet connection.")]
    NetworkError(#[source] reqwest::Error),

    #[error("City \"{0}\" not found. Please check the spelling and try again.")]
    NotFound(String),

    #[error("API authentication failed. Please check your API key.")]
    AuthenticationError,

    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    #[error("Unable to fetch weather data. Please try again.")]
    UnknownProviderError(u16),

    #[error("Received an unexpected response from the weather service.")]
    MalformedResponse(#[source] serde_json::Error),
}

impl WeatherError {
    /// Map a non-success HTTP status to its error.
    pub fn from_status(status: u16, city: &str) -> Self {
        match status {
            404 => WeatherError::NotFound(city.to_string()),
            401 => WeatherError::AuthenticationError,
            429 => WeatherError::RateLimited,
            other => WeatherError::UnknownProviderError(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(
            WeatherError::from_status(404, "Atlantis"),
            WeatherError::NotFound(city) if city == "Atlantis"
        ));
        assert!(matches!(WeatherError::from_status(401, "x"), WeatherError::AuthenticationError));
        assert!(matches!(WeatherError::from_status(429, "x"), WeatherError::RateLimited));
        assert!(matches!(
            WeatherError::from_status(503, "x"),
            WeatherError::UnknownProviderError(503)
        ));
    }

    #[test]
    fn not_found_message_names_the_city() {
        let msg = WeatherError::NotFound("Atlantis".into()).to_string();
        assert_eq!(msg, "City \"Atlantis\" not found. Please check the spelling and try again.");
    }
}
