use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{WeatherError, WeatherRecord, provider::DEFAULT_ENDPOINT};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<String>,
    endpoint: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at another base URL (self-hosted proxy, mock server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        let api_key = self.api_key().ok_or(WeatherError::ConfigurationError)?;

        debug!(%city, endpoint = %self.endpoint, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    warn!(endpoint = %self.endpoint, error = %e, "invalid weather endpoint");
                    WeatherError::InvalidEndpoint(self.endpoint.clone())
                } else {
                    warn!(%city, error = %e, "weather request failed in transport");
                    WeatherError::NetworkError(e)
                }
            })?;

        let status = res.status();
        debug!(%city, status = status.as_u16(), "weather response received");

        if !status.is_success() {
            return Err(WeatherError::from_status(status.as_u16(), city));
        }

        let body = res.text().await.map_err(WeatherError::NetworkError)?;

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).map_err(WeatherError::MalformedResponse)?;

        Ok(parsed.normalize())
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwCurrentResponse {
    fn normalize(self) -> WeatherRecord {
        let (condition, description) = self
            .weather
            .into_iter()
            .next()
            .map(|w| (w.main.to_lowercase(), w.description))
            .unwrap_or_else(|| ("unknown".to_string(), "unknown".to_string()));

        WeatherRecord {
            city: self.name,
            country: self.sys.country,
            temperature_c: round(self.main.temp),
            feels_like_c: round(self.main.feels_like),
            temp_min_c: round(self.main.temp_min),
            temp_max_c: round(self.main.temp_max),
            humidity_pct: self.main.humidity,
            wind_speed_kmh: round(mps_to_kmh(self.wind.speed)),
            pressure_hpa: self.main.pressure,
            description,
            condition,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        self.fetch_current(city).await
    }
}

fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}

// Half away from zero.
fn round(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(temp: f64, wind: f64) -> OwCurrentResponse {
        let body = serde_json::json!({
            "name": "London",
            "sys": { "country": "GB" },
            "main": {
                "temp": temp,
                "feels_like": 14.6,
                "temp_min": 13.5,
                "temp_max": 16.49,
                "humidity": 72,
                "pressure": 1012
            },
            "wind": { "speed": wind },
            "weather": [{ "main": "Clouds", "description": "broken clouds" }]
        });
        serde_json::from_value(body).expect("fixture must parse")
    }

    #[test]
    fn normalizes_all_fields() {
        let record = response(15.2, 4.0).normalize();

        assert_eq!(
            record,
            WeatherRecord {
                city: "London".into(),
                country: "GB".into(),
                temperature_c: 15,
                feels_like_c: 15,
                temp_min_c: 14,
                temp_max_c: 16,
                humidity_pct: 72,
                wind_speed_kmh: 14,
                pressure_hpa: 1012,
                description: "broken clouds".into(),
                condition: "clouds".into(),
            }
        );
    }

    #[test]
    fn wind_speed_is_converted_to_kmh() {
        assert_eq!(response(0.0, 5.0).normalize().wind_speed_kmh, 18);
        assert_eq!(response(0.0, 0.0).normalize().wind_speed_kmh, 0);
        assert_eq!(response(0.0, 10.3).normalize().wind_speed_kmh, 37);
    }

    #[test]
    fn temperature_rounds_half_away_from_zero() {
        assert_eq!(response(21.4, 0.0).normalize().temperature_c, 21);
        assert_eq!(response(21.5, 0.0).normalize().temperature_c, 22);
        assert_eq!(response(-0.4, 0.0).normalize().temperature_c, 0);
        assert_eq!(response(-2.5, 0.0).normalize().temperature_c, -3);
    }

    #[test]
    fn missing_weather_entry_falls_back_to_unknown() {
        let body = serde_json::json!({
            "name": "Nowhere",
            "sys": {},
            "main": {
                "temp": 1.0, "feels_like": 1.0, "temp_min": 1.0, "temp_max": 1.0,
                "humidity": 10, "pressure": 1000
            },
            "wind": { "speed": 1.0 },
            "weather": []
        });
        let parsed: OwCurrentResponse = serde_json::from_value(body).unwrap();
        let record = parsed.normalize();

        assert_eq!(record.condition, "unknown");
        assert_eq!(record.description, "unknown");
        assert_eq!(record.country, "");
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        // Unroutable endpoint: a network attempt would surface as NetworkError.
        let provider = OpenWeatherProvider::new(None).with_endpoint("http://127.0.0.1:9/weather");

        let err = provider.fetch_weather("London").await.unwrap_err();
        assert!(matches!(err, WeatherError::ConfigurationError));
    }
}
