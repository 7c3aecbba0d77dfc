//! Wire format of `/api/temperatures` and the mapping from a raw HTTP
//! reply to either a series or a [`FetchError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::FetchError;

/// Daily temperatures, index-aligned with their ISO dates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemperatureSeries {
    pub dates: Vec<String>,
    pub temperatures: Vec<f64>,
}

impl TemperatureSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Pulls a series out of a decoded success body.
    ///
    /// Returns `None` when either array is missing, holds a value of the
    /// wrong type, the arrays differ in length, or they are empty.
    pub fn from_body(body: &Value) -> Option<Self> {
        let dates = body
            .get("dates")?
            .as_array()?
            .iter()
            .map(|date| date.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()?;
        let temperatures = body
            .get("temperatures")?
            .as_array()?
            .iter()
            .map(Value::as_f64)
            .collect::<Option<Vec<_>>>()?;

        if dates.is_empty() || dates.len() != temperatures.len() {
            return None;
        }

        Some(Self {
            dates,
            temperatures,
        })
    }
}

/// Error body the backend may attach to a failed reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Status and undecoded body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Classifies a completed request.
pub fn classify_response(response: &RawResponse) -> Result<TemperatureSeries, FetchError> {
    if !response.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.error)
            .filter(|error| !error.is_empty())
            .unwrap_or_else(|| format!("HTTP error {}", response.status));
        return Err(FetchError::Http {
            status: response.status,
            message,
        });
    }

    let body: Value = serde_json::from_str(&response.body)
        .map_err(|e| FetchError::Transport(format!("Failed to parse response: {}", e)))?;

    match TemperatureSeries::from_body(&body) {
        Some(series) => {
            tracing::debug!("Received {} daily temperatures", series.len());
            Ok(series)
        }
        None => {
            // The backend reports upstream failures with a 2xx status and an `error` field.
            if let Some(error) = body.get("error").and_then(Value::as_str) {
                tracing::warn!("Backend returned no series: {}", error);
            }
            Err(FetchError::EmptyData)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_becomes_series() {
        let response = RawResponse::new(
            200,
            r#"{"dates":["2024-01-01","2024-01-02"],"temperatures":[5.2,6.1]}"#,
        );
        let series = classify_response(&response).expect("should classify as success");
        assert_eq!(series.dates, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(series.temperatures, vec![5.2, 6.1]);
    }

    #[test]
    fn test_integer_temperatures_are_accepted() {
        let response = RawResponse::new(200, r#"{"dates":["2024-01-01"],"temperatures":[7]}"#);
        let series = classify_response(&response).unwrap();
        assert_eq!(series.temperatures, vec![7.0]);
    }

    #[test]
    fn test_empty_arrays_are_empty_data() {
        let response = RawResponse::new(200, r#"{"dates":[],"temperatures":[]}"#);
        assert_eq!(classify_response(&response), Err(FetchError::EmptyData));
    }

    #[test]
    fn test_malformed_series_is_empty_data() {
        for body in [
            r#"{}"#,
            r#"{"dates":"2024-01-01","temperatures":[1.0]}"#,
            r#"{"dates":["2024-01-01"],"temperatures":["warm"]}"#,
            r#"{"dates":["2024-01-01","2024-01-02"],"temperatures":[1.0]}"#,
            r#"{"error":"Upstream weather service failed"}"#,
        ] {
            let response = RawResponse::new(200, body);
            assert_eq!(classify_response(&response), Err(FetchError::EmptyData), "{}", body);
        }
    }

    #[test]
    fn test_undecodable_success_body_is_transport_error() {
        let response = RawResponse::new(200, "<html>oops</html>");
        match classify_response(&response) {
            Err(FetchError::Transport(message)) => {
                assert!(message.starts_with("Failed to parse response"))
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_field_is_used_for_http_errors() {
        let response = RawResponse::new(400, r#"{"error":"bad coordinates"}"#);
        assert_eq!(
            classify_response(&response),
            Err(FetchError::Http {
                status: 400,
                message: "bad coordinates".to_string()
            })
        );
    }

    #[test]
    fn test_missing_error_field_synthesizes_status_message() {
        for body in ["{}", "", "Internal Server Error", r#"{"error":""}"#] {
            let response = RawResponse::new(500, body);
            match classify_response(&response) {
                Err(FetchError::Http { status, message }) => {
                    assert_eq!(status, 500);
                    assert!(message.contains("500"), "{}", message);
                }
                other => panic!("expected HTTP error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(304, "").is_success());
        assert!(!RawResponse::new(404, "").is_success());
    }
}
