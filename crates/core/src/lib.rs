pub mod client;
pub mod error;
pub mod json;
pub mod model;
pub mod transport;

pub use crate::core::client::{prediction_url, Client};
pub use crate::core::error::{SdkError, TransportError};
pub use crate::core::model::ReplicateModel;
pub use crate::core::transport::{
    emit_transport_event, set_transport_observer, HttpTransport, TransportConfig, TransportEvent,
    TransportObserver,
};

// Convenience re-exports of the wire types
pub use crate::sdk_types::{Prediction, PredictionRequest, PredictionStatus};
