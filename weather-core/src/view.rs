//! Maps [`ViewState`] to what gets shown.

use std::fmt;

use crate::{WeatherRecord, state::ViewState};

/// One of the four mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    Welcome,
    Loading,
    Error { message: &'a str },
    Weather(&'a WeatherRecord),
}

/// Pick the screen for `state`.
pub fn render(state: &ViewState) -> Screen<'_> {
    match state {
        ViewState::Loading => Screen::Loading,
        ViewState::Failed(message) => Screen::Error { message: message.as_str() },
        ViewState::Ready(record) => Screen::Weather(record),
        ViewState::Idle => Screen::Welcome,
    }
}

impl Screen<'_> {
    /// Only the error screen offers "Try again".
    pub fn offers_retry(&self) -> bool {
        matches!(self, Screen::Error { .. })
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Welcome => {
                writeln!(f, "Weather App")?;
                writeln!(f, "Get real-time weather information for any city in the world")?;
                writeln!(f)?;
                writeln!(f, "  - Current temperature")?;
                writeln!(f, "  - Wind speed")?;
                writeln!(f, "  - Humidity level")?;
                writeln!(f, "  - More details")?;
                writeln!(f)?;
                write!(f, "Start by searching for a city")
            }
            Screen::Loading => write!(f, "Fetching weather data..."),
            Screen::Error { message } => {
                writeln!(f, "Oops! Something went wrong")?;
                writeln!(f, "{message}")?;
                write!(f, "[Try again]")
            }
            Screen::Weather(w) => {
                if w.country.is_empty() {
                    writeln!(f, "{}", w.city)?;
                } else {
                    writeln!(f, "{}, {}", w.city, w.country)?;
                }
                writeln!(f, "{}°C  Feels like {}°C", w.temperature_c, w.feels_like_c)?;
                writeln!(f, "{}", capitalize(&w.description))?;
                writeln!(f)?;
                writeln!(f, "{:<12}{}%", "Humidity", w.humidity_pct)?;
                writeln!(f, "{:<12}{} km/h", "Wind speed", w.wind_speed_kmh)?;
                writeln!(f, "{:<12}{}°C / {}°C", "Min/Max", w.temp_min_c, w.temp_max_c)?;
                write!(f, "{:<12}{} hPa", "Pressure", w.pressure_hpa)
            }
        }
    }
}

/// Upper-case the first character, leave the rest alone.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
