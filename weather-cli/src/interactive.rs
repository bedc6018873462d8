//! Prompt loop: read a city, print every screen the search goes through.

use inquire::{Confirm, InquireError, Text};
use tokio::sync::watch;
use weather_core::{SearchController, SearchForm, ValidationError, ViewState, render};

pub async fn run(controller: &SearchController) -> anyhow::Result<()> {
    let mut rx = controller.subscribe();
    let mut form = SearchForm::new();

    show(&rx.borrow_and_update());

    loop {
        let Some(input) = prompt_city().await? else {
            break;
        };

        form.set_input(input);
        let Some(city) = form.submit() else {
            if let Some(err) = form.error() {
                println!("{err}");
            }
            continue;
        };

        if let Err(err) = search(controller, &mut rx, &city).await {
            println!("{err}");
            continue;
        }

        if render(&rx.borrow()).offers_retry() {
            match prompt_retry().await? {
                AfterError::Reset => {
                    controller.on_retry();
                    show(&rx.borrow_and_update());
                }
                // Error screen stays up; the search prompt is still there.
                AfterError::KeepSearching => {}
                AfterError::Quit => break,
            }
        }
    }

    Ok(())
}

/// Run one search, printing each state change as it happens.
async fn search(
    controller: &SearchController,
    rx: &mut watch::Receiver<ViewState>,
    city: &str,
) -> Result<(), ValidationError> {
    let search = controller.on_search(city);
    tokio::pin!(search);

    loop {
        let finished = tokio::select! {
            result = &mut search => Some(result),
            Ok(()) = rx.changed() => None,
        };

        match finished {
            None => show(&rx.borrow_and_update()),
            Some(result) => {
                if rx.has_changed().unwrap_or(false) {
                    show(&rx.borrow_and_update());
                }
                return result;
            }
        }
    }
}

fn show(state: &ViewState) {
    println!("\n{}\n", render(state));
}

/// `None` when the user cancels (Esc / Ctrl-C).
async fn prompt_city() -> anyhow::Result<Option<String>> {
    let answer = tokio::task::spawn_blocking(|| {
        Text::new("City:").with_placeholder("Enter city name...").prompt()
    })
    .await?;

    match answer {
        Ok(input) => Ok(Some(input)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// What to do once the error screen has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AfterError {
    /// Back to the welcome screen.
    Reset,
    KeepSearching,
    Quit,
}

async fn prompt_retry() -> anyhow::Result<AfterError> {
    let answer =
        tokio::task::spawn_blocking(|| Confirm::new("Try again?").with_default(true).prompt())
            .await?;

    after_error(answer)
}

fn after_error(answer: Result<bool, InquireError>) -> anyhow::Result<AfterError> {
    match answer {
        Ok(true) => Ok(AfterError::Reset),
        Ok(false) | Err(InquireError::OperationCanceled) => Ok(AfterError::KeepSearching),
        Err(InquireError::OperationInterrupted) => Ok(AfterError::Quit),
        Err(err) => Err(err.into()),
    }
}
