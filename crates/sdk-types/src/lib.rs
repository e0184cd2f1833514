//! Wire types for the Replicate predictions API.
//!
//! These are the request envelope and the prediction result shared by every
//! model in the registry; per-model input payloads live in `models`.

use serde::{Deserialize, Serialize};

/// Request body for a prediction: the caller's payload under a single
/// `input` field. Exists only while the request is being serialized.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest<'a, T> {
    pub input: &'a T,
}

/// Lifecycle state reported by Replicate for a prediction.
///
/// Unrecognized wire values decode as [`PredictionStatus::Unknown`] so new
/// server-side states never break deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl PredictionStatus {
    /// True once the prediction reached a final state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PredictionStatus::Succeeded | PredictionStatus::Failed | PredictionStatus::Canceled
        )
    }
}

/// Decoded prediction response.
///
/// A populated `error` with an empty `output` is a remote generation failure,
/// not a client error; callers must branch on `status` and `error` together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Opaque prediction id assigned by Replicate.
    pub id: String,
    /// Echoed model identifier.
    pub model: String,
    /// Echoed model version identifier.
    pub version: String,
    /// Free-form log text accumulated while the prediction ran.
    #[serde(default)]
    pub logs: String,
    /// Output artifact references, typically URIs. Empty when generation
    /// failed or is still pending.
    #[serde(default)]
    pub output: Vec<String>,
    /// Whether Replicate removed the prediction data after completion.
    #[serde(default)]
    pub data_removed: bool,
    /// Error message reported by the model; present only on failure.
    #[serde(default)]
    pub error: Option<String>,
    pub status: PredictionStatus,
    /// Creation timestamp as reported by the API (RFC 3339 string).
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prediction_round_trips_all_fields() {
        let payload = json!({
            "id": "abc",
            "model": "black-forest-labs/flux-schnell",
            "version": "v1",
            "logs": "step 1/4",
            "output": ["https://x/out.png"],
            "data_removed": false,
            "error": null,
            "status": "succeeded",
            "created_at": "2024-01-01T00:00:00Z"
        });

        let prediction: Prediction = serde_json::from_value(payload).expect("decode");
        assert_eq!(prediction.id, "abc");
        assert_eq!(prediction.model, "black-forest-labs/flux-schnell");
        assert_eq!(prediction.version, "v1");
        assert_eq!(prediction.logs, "step 1/4");
        assert_eq!(prediction.output, vec!["https://x/out.png"]);
        assert!(!prediction.data_removed);
        assert_eq!(prediction.error, None);
        assert_eq!(prediction.status, PredictionStatus::Succeeded);
        assert_eq!(prediction.created_at, "2024-01-01T00:00:00Z");

        let reencoded = serde_json::to_value(&prediction).expect("encode");
        let decoded_again: Prediction = serde_json::from_value(reencoded).expect("decode again");
        assert_eq!(decoded_again.output, prediction.output);
        assert_eq!(decoded_again.error, prediction.error);
        assert_eq!(decoded_again.status, prediction.status);
    }

    #[test]
    fn prediction_with_empty_output_and_error_decodes() {
        let payload = json!({
            "id": "def",
            "model": "black-forest-labs/flux-dev",
            "version": "v2",
            "logs": "",
            "output": [],
            "data_removed": true,
            "error": "NSFW content detected",
            "status": "failed",
            "created_at": "2024-01-02T00:00:00Z"
        });

        let prediction: Prediction = serde_json::from_value(payload).expect("decode");
        assert!(prediction.output.is_empty());
        assert_eq!(prediction.error.as_deref(), Some("NSFW content detected"));
        assert_eq!(prediction.status, PredictionStatus::Failed);
        assert!(prediction.status.is_terminal());
    }

    #[test]
    fn missing_optional_fields_default() {
        let payload = json!({
            "id": "ghi",
            "model": "m",
            "version": "v",
            "status": "processing",
            "created_at": "2024-01-03T00:00:00Z"
        });

        let prediction: Prediction = serde_json::from_value(payload).expect("decode");
        assert!(prediction.logs.is_empty());
        assert!(prediction.output.is_empty());
        assert!(!prediction.data_removed);
        assert_eq!(prediction.error, None);
        assert!(!prediction.status.is_terminal());
    }

    #[test]
    fn unknown_status_values_decode_as_unknown() {
        let status: PredictionStatus =
            serde_json::from_value(json!("queued-for-review")).expect("decode");
        assert_eq!(status, PredictionStatus::Unknown);
    }

    #[test]
    fn envelope_wraps_payload_under_input_key() {
        #[derive(Serialize)]
        struct Payload {
            prompt: String,
        }

        let payload = Payload {
            prompt: "cat".into(),
        };
        let body = serde_json::to_value(PredictionRequest { input: &payload }).expect("encode");
        assert_eq!(body, json!({"input": {"prompt": "cat"}}));
    }
}
