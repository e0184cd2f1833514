//! Model registry: one `const` descriptor per supported Replicate model,
//! each bound to the input payload struct that model accepts.
//!
//! Descriptors are immutable, created once for the process lifetime, and
//! informational costs aside carry nothing but the remote identifier. Models
//! not listed here can still be used via `ReplicateModel::from_id` with a
//! caller-defined payload type.

pub mod image;
pub mod text;

pub use image::{
    FluxDevInput, FluxProInput, FluxSchnellInput, FluxUltraInput, FLUX_DEV, FLUX_PRO,
    FLUX_SCHNELL, FLUX_ULTRA,
};
pub use text::{
    DeepSeekInput, Gpt4SeriesInput, Gpt5SeriesInput, DEEPSEEK_R1, DEEPSEEK_V3, GPT41, GPT41_MINI,
    GPT41_NANO, GPT4O, GPT4O_MINI, GPT5, GPT5_MINI, GPT5_NANO,
};
