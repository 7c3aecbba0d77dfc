//! Target-independent pieces of the temperature chart page.
//! The frontend crate wires these to the DOM, to the HTTP client and to
//! Plotly; everything here runs (and is tested) natively.

mod chart;
mod error;
mod fetch;
mod location;
mod series;
mod view;

pub use chart::{tick_label, tooltip_label, ChartData, DEGREE_SUFFIX, SERIES_LABEL};
pub use error::FetchError;
pub use fetch::{run_fetch, TemperatureSource, TEMPERATURES_ENDPOINT};
pub use location::{Coordinates, Location, CITIES};
pub use series::{classify_response, ErrorBody, RawResponse, TemperatureSeries};
pub use view::{Layout, Message, Tone, ViewState, IDLE_MESSAGE};
