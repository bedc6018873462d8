//! City name validation and the search form that owns it.

use thiserror::Error;

/// Longest accepted city name, counted in characters after trimming.
pub const MAX_CITY_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a city name")]
    Empty,

    #[error("City name is too long")]
    TooLong,
}

/// Trim `raw` and check its length. The trimmed text is returned verbatim:
/// no case folding, no diacritic stripping.
pub fn validate_city(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if trimmed.chars().count() > MAX_CITY_LEN {
        return Err(ValidationError::TooLong);
    }

    Ok(trimmed.to_string())
}

/// Local state of the search input: the text being typed and the last
/// validation error, if any. Never touches the global view state.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    input: String,
    error: Option<ValidationError>,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Replace the input text. Any displayed error goes away as soon as the
    /// user edits the field.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.error = None;
    }

    /// Validate the current input. On failure the error is kept for display
    /// and `None` is returned.
    pub fn submit(&mut self) -> Option<String> {
        match validate_city(&self.input) {
            Ok(city) => {
                self.error = None;
                Some(city)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}
