//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - City name validation and the search form
//! - The OpenWeather client and response normalization
//! - The view state, its reducer and the controller that owns it
//! - Rendering of the current state to one of four screens
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;
pub mod state;
pub mod validate;
pub mod view;

pub use config::Config;
pub use controller::SearchController;
pub use error::WeatherError;
pub use model::WeatherRecord;
pub use provider::{WeatherProvider, provider_from_config};
pub use state::ViewState;
pub use validate::{SearchForm, ValidationError, validate_city};
pub use view::{Screen, render};
