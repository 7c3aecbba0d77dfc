//! Failure kinds of the fetch flow and how each is presented.

use thiserror::Error;

use crate::Tone;

/// Everything that can keep the chart from being populated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The fetch button was pressed without a city selected.
    #[error("no city selected")]
    NoSelection,

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The backend answered 2xx but without a usable series.
    #[error("no temperature data in response")]
    EmptyData,

    /// The request never completed, or its body could not be decoded.
    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// Text shown in the page's message area.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::NoSelection => "Please select a city.".to_string(),
            FetchError::EmptyData => {
                "No temperature data found for the selected city.".to_string()
            }
            FetchError::Http { message, .. } | FetchError::Transport(message) => {
                format!("Unable to retrieve data: {}.", message)
            }
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            FetchError::EmptyData => Tone::Info,
            _ => Tone::Alert,
        }
    }
}
