//! View state and the reducer that moves it.
//!
//! All transitions go through [`reducer`]. It is a pure function, so the
//! transition rules can be tested without a network or a runtime.

use crate::WeatherRecord;

/// Shown when a failure carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch weather data";

/// What the UI currently shows. Exactly one variant holds at a time, which is
/// what makes the screen precedence (loading over error over result) hold by
/// construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// No search attempted yet, or the user reset after an error.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last request failed with this user-facing message.
    Failed(String),
    /// The last request succeeded.
    Ready(WeatherRecord),
}

impl ViewState {
    pub fn record(&self) -> Option<&WeatherRecord> {
        match self {
            ViewState::Ready(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// State transitions. "Did" marks the result of the async lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A validated search was submitted.
    SearchStart,
    SearchDidLoad(WeatherRecord),
    SearchDidError(String),
    /// Explicit user reset back to the welcome screen.
    Retry,
}

/// Apply `action` to `state`. Returns `true` if the state changed and the UI
/// should re-render.
pub fn reducer(state: &mut ViewState, action: Action) -> bool {
    let next = match action {
        // Drops any previous record or error.
        Action::SearchStart => ViewState::Loading,

        Action::SearchDidLoad(record) => ViewState::Ready(record),

        Action::SearchDidError(message) => {
            if message.trim().is_empty() {
                ViewState::Failed(FALLBACK_ERROR_MESSAGE.to_string())
            } else {
                ViewState::Failed(message)
            }
        }

        Action::Retry => ViewState::Idle,
    };

    if *state == next {
        return false;
    }

    *state = next;
    true
}
