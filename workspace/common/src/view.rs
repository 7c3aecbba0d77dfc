//! The page's visual modes and the single mapping from mode to what is
//! on screen.

use crate::{FetchError, TemperatureSeries};

pub const IDLE_MESSAGE: &str = "Select a city and press 'Show chart' to display the data.";

/// Mutually exclusive visual mode of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle(String),
    Loading,
    Error(FetchError),
    /// Never holds an empty series.
    Populated(TemperatureSeries),
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Idle(IDLE_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Alert,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

/// What the page shows for a given [`ViewState`].
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub message: Option<Message>,
    pub show_chart: bool,
    pub show_spinner: bool,
    pub trigger_enabled: bool,
}

impl ViewState {
    /// State reached when a request completes.
    pub fn from_outcome(outcome: Result<TemperatureSeries, FetchError>) -> Self {
        match outcome {
            Ok(series) if series.is_empty() => Self::Error(FetchError::EmptyData),
            Ok(series) => Self::Populated(series),
            Err(err) => Self::Error(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn series(&self) -> Option<&TemperatureSeries> {
        match self {
            Self::Populated(series) => Some(series),
            _ => None,
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Self::Idle(text) => Layout {
                message: Some(Message {
                    text: text.clone(),
                    tone: Tone::Info,
                }),
                show_chart: false,
                show_spinner: false,
                trigger_enabled: true,
            },
            Self::Loading => Layout {
                message: None,
                show_chart: false,
                show_spinner: true,
                trigger_enabled: false,
            },
            Self::Error(err) => Layout {
                message: Some(Message {
                    text: err.user_message(),
                    tone: err.tone(),
                }),
                show_chart: false,
                show_spinner: false,
                trigger_enabled: true,
            },
            Self::Populated(_) => Layout {
                message: None,
                show_chart: true,
                show_spinner: false,
                trigger_enabled: true,
            },
        }
    }
}
