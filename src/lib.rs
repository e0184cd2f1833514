#[path = "../crates/sdk-types/src/lib.rs"]
pub mod types;
#[path = "../crates/core/src/lib.rs"]
pub mod core;
#[path = "../crates/transports/reqwest/src/lib.rs"]
pub mod transport_reqwest;
#[path = "../crates/models/src/lib.rs"]
pub mod models;

pub mod transports {
    pub use crate::transport_reqwest as reqwest;
}

pub(crate) use crate::core as sdk_core;
pub(crate) use crate::transport_reqwest as reqwest_transport;
pub(crate) use crate::types as sdk_types;

pub use crate::core::client::{prediction_url, Client};
pub use crate::core::error::{SdkError, TransportError};
pub use crate::core::model::ReplicateModel;
pub use crate::core::transport::{HttpTransport, TransportConfig};
pub use crate::types::{Prediction, PredictionRequest, PredictionStatus};
