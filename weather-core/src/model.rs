use serde::{Deserialize, Serialize};

/// Normalized current conditions for one city.
///
/// Temperatures are whole degrees Celsius and wind speed is whole km/h, both
/// rounded half away from zero. `description` is stored exactly as the
/// provider sent it; capitalization is a rendering concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub country: String,
    pub temperature_c: i64,
    pub feels_like_c: i64,
    pub temp_min_c: i64,
    pub temp_max_c: i64,
    pub humidity_pct: u8,
    pub wind_speed_kmh: i64,
    pub pressure_hpa: u32,
    pub description: String,
    /// Lower-cased primary category, e.g. "clear", "clouds", "rain".
    pub condition: String,
}
