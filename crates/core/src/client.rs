use serde::Serialize;
use tracing::debug;

use crate::core::error::SdkError;
use crate::core::json::without_null_fields;
use crate::core::model::ReplicateModel;
use crate::core::transport::{HttpTransport, TransportConfig};
use crate::sdk_types::{Prediction, PredictionRequest};

const API_BASE: &str = "https://api.replicate.com/v1";

/// Build and validate the predictions endpoint for a model identifier.
///
/// Pure string formatting plus a `url` parse; the parse cannot fail for
/// well-formed `owner/name` ids.
pub fn prediction_url(model_id: &str) -> Result<url::Url, url::ParseError> {
    url::Url::parse(&format!("{API_BASE}/models/{model_id}/predictions"))
}

/// Client for one registry entry: issues synchronous prediction requests for
/// the model `model` describes, with input payloads of shape `T`.
///
/// The client holds only immutable configuration captured at construction.
/// Each [`Client::generate`] call is independent; cloning the client or
/// calling it from several tasks concurrently is safe as long as the
/// transport is (the default reqwest transport is).
pub struct Client<T, H: HttpTransport = crate::reqwest_transport::ReqwestTransport> {
    model: ReplicateModel<T>,
    api_key: String,
    http: H,
    transport_cfg: TransportConfig,
}

impl<T> Client<T> {
    /// Client over the default reqwest transport. Stores the descriptor and
    /// the raw key verbatim; no validation, no network access here.
    pub fn new(model: ReplicateModel<T>, api_key: impl Into<String>) -> Self {
        Self::with_config(model, api_key, TransportConfig::default())
    }

    /// Same as [`Client::new`] with an explicit transport configuration.
    /// This is the extension point for callers that want a request timeout;
    /// the default leaves `request_timeout` unset because `Prefer: wait`
    /// calls legitimately run for as long as the prediction does.
    pub fn with_config(
        model: ReplicateModel<T>,
        api_key: impl Into<String>,
        cfg: TransportConfig,
    ) -> Self {
        let http = crate::reqwest_transport::ReqwestTransport::new(&cfg);
        Self::with_transport(model, api_key, http, cfg)
    }
}

impl<T, H: HttpTransport> Client<T, H> {
    /// Client over a caller-supplied transport. Used by tests to substitute
    /// a stub for the network.
    pub fn with_transport(
        model: ReplicateModel<T>,
        api_key: impl Into<String>,
        http: H,
        cfg: TransportConfig,
    ) -> Self {
        Self {
            model,
            api_key: api_key.into(),
            http,
            transport_cfg: cfg,
        }
    }

    pub fn model(&self) -> &ReplicateModel<T> {
        &self.model
    }

    pub fn transport(&self) -> &H {
        &self.http
    }

    /// Run one prediction and wait for it to complete.
    ///
    /// Serializes `input` under the `{"input": ...}` envelope (null fields
    /// pruned), POSTs it once with `Prefer: wait`, and decodes the response
    /// into a [`Prediction`]. The awaiting task blocks for the full remote
    /// round trip.
    ///
    /// Any URL, serialization, transport, or decode failure is returned
    /// unmodified; there is no retry and no fallback. A remote generation
    /// failure (`error` populated, `output` empty in a well-formed body)
    /// comes back as `Ok`; inspect `status` and `error` on the result.
    pub async fn generate(&self, input: &T) -> Result<Prediction, SdkError>
    where
        T: Serialize,
    {
        let url = prediction_url(self.model.id())?;

        let envelope = PredictionRequest { input };
        let body = serde_json::to_value(&envelope)?;
        let body = without_null_fields(&body);

        let headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.api_key),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Prefer".to_string(), "wait".to_string()),
        ];

        debug!(
            target: "replicate_sdk::client",
            model = %self.model.id(),
            "sending prediction request"
        );

        let (value, _response_headers) = self
            .http
            .post_json(url.as_str(), &headers, &body, &self.transport_cfg)
            .await?;

        let prediction: Prediction = serde_json::from_value(value)?;
        Ok(prediction)
    }
}
