//! One press of the fetch button, from the selection value to the final
//! [`ViewState`].

use async_trait::async_trait;

use crate::{classify_response, Coordinates, FetchError, Location, RawResponse, ViewState};

pub const TEMPERATURES_ENDPOINT: &str = "/api/temperatures";

impl Coordinates {
    /// Path and query of the temperature request for these coordinates.
    pub fn query_path(&self) -> String {
        format!(
            "{}?latitude={}&longitude={}",
            TEMPERATURES_ENDPOINT, self.latitude, self.longitude
        )
    }
}

/// Something that can perform the temperature request.
///
/// Implementations report failures to reach the backend or to read the
/// body as [`FetchError::Transport`]; any completed reply, whatever its
/// status, is returned as a [`RawResponse`].
#[async_trait(?Send)]
pub trait TemperatureSource {
    async fn get(&self, coordinates: &Coordinates) -> Result<RawResponse, FetchError>;
}

/// Runs the fetch flow for `selection`, handing every state transition to
/// `render`. Returns the final state, which is never [`ViewState::Loading`].
pub async fn run_fetch<S, F>(source: &S, selection: &str, mut render: F) -> ViewState
where
    S: TemperatureSource + ?Sized,
    F: FnMut(ViewState),
{
    let coordinates = match selection.parse::<Coordinates>() {
        Ok(coordinates) => coordinates,
        Err(err) => {
            tracing::debug!("Fetch requested without a valid selection");
            let state = ViewState::Error(err);
            render(state.clone());
            return state;
        }
    };

    let city = Location::lookup(&coordinates).map_or("custom location", |city| city.name);
    tracing::info!("Fetching temperatures for {} ({})", city, coordinates);
    render(ViewState::Loading);

    let outcome = match source.get(&coordinates).await {
        Ok(response) => classify_response(&response),
        Err(err) => Err(err),
    };

    match &outcome {
        Ok(series) => tracing::info!("Loaded {} days for {}", series.len(), city),
        Err(err @ (FetchError::Http { .. } | FetchError::Transport(_))) => {
            tracing::error!("Failed to fetch temperatures for {}: {}", city, err)
        }
        Err(err) => tracing::debug!("No chart for {}: {}", city, err),
    }

    let state = ViewState::from_outcome(outcome);
    render(state.clone());
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tone, CITIES};
    use std::cell::RefCell;

    /// Replays a canned reply and records every request.
    struct FakeSource {
        reply: Result<RawResponse, FetchError>,
        requests: RefCell<Vec<Coordinates>>,
    }

    impl FakeSource {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(RawResponse::new(status, body)),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(FetchError::Transport(message.to_string())),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl TemperatureSource for FakeSource {
        async fn get(&self, coordinates: &Coordinates) -> Result<RawResponse, FetchError> {
            self.requests.borrow_mut().push(*coordinates);
            self.reply.clone()
        }
    }

    async fn fetch_recording(source: &FakeSource, selection: &str) -> Vec<ViewState> {
        let mut states = Vec::new();
        let last = run_fetch(source, selection, |state| states.push(state)).await;
        assert_eq!(states.last(), Some(&last));
        states
    }

    #[test]
    fn test_query_path() {
        let coordinates = CITIES[1].coordinates();
        assert_eq!(
            coordinates.query_path(),
            "/api/temperatures?latitude=45.46&longitude=9.19"
        );
    }

    #[tokio::test]
    async fn test_every_city_requests_its_own_coordinates() {
        for city in CITIES.iter() {
            let source = FakeSource::replying(200, r#"{"dates":["2024-01-01"],"temperatures":[1.0]}"#);
            fetch_recording(&source, &city.option_value()).await;

            let requests = source.requests.borrow();
            assert_eq!(requests.len(), 1, "{}", city.name);
            assert_eq!(requests[0].latitude, city.latitude, "{}", city.name);
            assert_eq!(requests[0].longitude, city.longitude, "{}", city.name);
            assert_eq!(
                requests[0].query_path(),
                format!(
                    "/api/temperatures?latitude={}&longitude={}",
                    city.latitude, city.longitude
                )
            );
        }
    }

    #[tokio::test]
    async fn test_no_selection_never_calls_the_source() {
        let source = FakeSource::replying(200, "{}");
        let states = fetch_recording(&source, "").await;

        assert_eq!(source.calls(), 0);
        assert_eq!(states, vec![ViewState::Error(FetchError::NoSelection)]);
        let layout = states[0].layout();
        assert_eq!(layout.message.unwrap().text, "Please select a city.");
    }

    #[tokio::test]
    async fn test_success_populates_chart() {
        let source = FakeSource::replying(
            200,
            r#"{"dates":["2024-01-01","2024-01-02"],"temperatures":[5.2,6.1]}"#,
        );
        let states = fetch_recording(&source, &CITIES[0].option_value()).await;

        assert_eq!(states.len(), 2);
        assert_eq!(states[0], ViewState::Loading);
        let series = states[1].series().expect("chart should be populated");
        assert_eq!(series.dates, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(series.temperatures, vec![5.2, 6.1]);

        let layout = states[1].layout();
        assert!(layout.show_chart);
        assert!(layout.message.is_none());
    }

    #[tokio::test]
    async fn test_empty_success_shows_no_data_message() {
        let source = FakeSource::replying(200, r#"{"dates":[],"temperatures":[]}"#);
        let states = fetch_recording(&source, &CITIES[2].option_value()).await;

        let layout = states.last().unwrap().layout();
        assert!(!layout.show_chart);
        let message = layout.message.expect("message should be visible");
        assert_eq!(message.text, "No temperature data found for the selected city.");
        assert_eq!(message.tone, Tone::Info);
    }

    #[tokio::test]
    async fn test_backend_error_message_is_shown() {
        let source = FakeSource::replying(400, r#"{"error":"bad coordinates"}"#);
        let states = fetch_recording(&source, &CITIES[3].option_value()).await;

        let layout = states.last().unwrap().layout();
        assert!(!layout.show_chart);
        let message = layout.message.unwrap();
        assert_eq!(message.text, "Unable to retrieve data: bad coordinates.");
        assert_eq!(message.tone, Tone::Alert);
    }

    #[tokio::test]
    async fn test_status_code_without_error_field() {
        let source = FakeSource::replying(500, "{}");
        let states = fetch_recording(&source, &CITIES[4].option_value()).await;

        let text = states.last().unwrap().layout().message.unwrap().text;
        assert!(text.contains("500"), "{}", text);
    }

    #[tokio::test]
    async fn test_transport_failure_shows_exception_message() {
        let source = FakeSource::failing("Request failed: connection refused");
        let states = fetch_recording(&source, &CITIES[5].option_value()).await;

        assert_eq!(source.calls(), 1);
        assert_eq!(
            states.last().unwrap().layout().message.unwrap().text,
            "Unable to retrieve data: Request failed: connection refused."
        );
    }

    #[tokio::test]
    async fn test_trigger_enabled_after_every_outcome() {
        let sources = vec![
            FakeSource::replying(200, r#"{"dates":["2024-01-01"],"temperatures":[1.0]}"#),
            FakeSource::replying(200, r#"{"dates":[],"temperatures":[]}"#),
            FakeSource::replying(404, r#"{"error":"not found"}"#),
            FakeSource::replying(502, "Bad Gateway"),
            FakeSource::replying(200, "not json"),
            FakeSource::failing("offline"),
        ];

        for source in sources {
            let states = fetch_recording(&source, &CITIES[6].option_value()).await;
            assert_eq!(states.first(), Some(&ViewState::Loading));
            let layout = states.last().unwrap().layout();
            assert!(layout.trigger_enabled);
            assert!(!layout.show_spinner);
        }
    }
}
