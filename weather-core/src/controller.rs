//! The single owner of [`ViewState`].
//!
//! The controller validates input, flips the state to `Loading`, awaits the
//! provider and applies the outcome. Readers get either a snapshot or a
//! `watch` receiver that wakes on every change.
//!
//! Overlapping searches are not sequenced: if a second search starts before
//! the first resolves, both complete and whichever finishes last decides the
//! final state. There is no cancellation and no request generation counter.

use tokio::sync::watch;
use tracing::{info, warn};

use crate::{
    provider::WeatherProvider,
    state::{Action, ViewState, reducer},
    validate::{ValidationError, validate_city},
};

#[derive(Debug)]
pub struct SearchController {
    provider: Box<dyn WeatherProvider>,
    state: watch::Sender<ViewState>,
}

impl SearchController {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self { provider, state }
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    fn dispatch(&self, action: Action) {
        self.state.send_if_modified(|state| reducer(state, action));
    }

    /// Look up `raw` after validating it.
    ///
    /// A validation failure is returned to the caller for the form to show;
    /// the view state is left alone. Provider failures do not come back as
    /// `Err`: they end up in [`ViewState::Failed`].
    pub async fn on_search(&self, raw: &str) -> Result<(), ValidationError> {
        let city = validate_city(raw)?;

        info!(%city, "search started");
        self.dispatch(Action::SearchStart);

        let action = match self.provider.fetch_weather(&city).await {
            Ok(record) => {
                info!(%city, temperature_c = record.temperature_c, "search succeeded");
                Action::SearchDidLoad(record)
            }
            Err(err) => {
                warn!(%city, error = ?err, "search failed");
                Action::SearchDidError(err.to_string())
            }
        };

        self.dispatch(action);
        Ok(())
    }

    /// Back to the welcome screen, whatever was showing.
    pub fn on_retry(&self) {
        info!("view reset");
        self.dispatch(Action::Retry);
    }
}
