use serde::Serialize;

use crate::sdk_core::model::ReplicateModel;

/// Flux Schnell is a fast model optimized for quick generation.
pub const FLUX_SCHNELL: ReplicateModel<FluxSchnellInput> =
    ReplicateModel::with_cost("black-forest-labs/flux-schnell", 0.003);

/// Flux Dev is better suited for images containing text, though it is
/// slightly more expensive and slower than Schnell.
pub const FLUX_DEV: ReplicateModel<FluxDevInput> =
    ReplicateModel::with_cost("black-forest-labs/flux-dev", 0.025);

/// Flux 1.1 Pro balances quality and speed for production use.
pub const FLUX_PRO: ReplicateModel<FluxProInput> =
    ReplicateModel::with_cost("black-forest-labs/flux-1.1-pro", 0.04);

/// Flux 1.1 Pro Ultra generates less processed, more natural-looking images.
pub const FLUX_ULTRA: ReplicateModel<FluxUltraInput> =
    ReplicateModel::with_cost("black-forest-labs/flux-1.1-pro-ultra", 0.06);

/// Input parameters for the Flux Schnell model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FluxSchnellInput {
    /// Main text input for image generation. Always sent.
    pub prompt: String,

    /// Width-to-height ratio of the output image. Allowed values include
    /// "21:9", "16:9", "3:2", "4:3", "5:4", "1:1", "4:5", "3:4", "2:3",
    /// "9:16", "9:21".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    /// How many images to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_outputs: Option<u32>,

    /// Number of steps in the diffusion process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,

    /// Random seed for reproducible generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,

    /// File format for the generated images ("jpg" or "png").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,

    /// Quality of the output images (1-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_quality: Option<u32>,

    /// Faster but less precise generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_fast: Option<bool>,

    /// Resolution of the generated image, e.g. "1".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub megapixels: Option<String>,

    /// Disables the built-in content filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_safety_checker: Option<bool>,
}

/// Input parameters for the Flux Dev model, which supports image-based
/// prompting alongside the text prompt.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FluxDevInput {
    pub prompt: String,

    /// Random seed for reproducibility. Use -1 for a random seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,

    /// URI of an image to guide generation along with the text prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_outputs: Option<u32>,

    /// Blends the influence of the prompt and the guide image; 1.0 fully
    /// replaces the image information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_strength: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,

    /// Influence of the prompt on generation. Lower values produce more
    /// realistic images; try values between 2 and 3.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_safety_checker: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_fast: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub megapixels: Option<String>,

    /// Output format; supports "jpg", "png", and "webp".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,

    /// Quality for jpg and webp (0-100), ignored for png.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_quality: Option<u32>,
}

/// Input parameters for the Flux 1.1 Pro model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FluxProInput {
    pub prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,

    /// URI of an image used to guide generation composition. Must be jpeg,
    /// png, gif, or webp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,

    /// Allowed values: "custom", "1:1", "16:9", "3:2", "2:3", "4:5", "5:4",
    /// "9:16", "3:4", "4:3".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_outputs: Option<u32>,

    /// Safety filter tolerance, 1 (strict) to 6 (permissive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_tolerance: Option<u32>,

    /// Automatically rewrites the prompt for more creative generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_upsampling: Option<bool>,

    /// Output format: "webp", "jpg", or "png".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_quality: Option<u32>,

    /// Width for the "custom" aspect ratio; multiple of 32, 256-1440.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Height for the "custom" aspect ratio; multiple of 32, 256-1440.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Input parameters for the Flux 1.1 Pro Ultra model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FluxUltraInput {
    pub prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_outputs: Option<u32>,

    /// Blends the influence between text prompt and image prompt, 0 (only
    /// text) to 1 (only image). Default is 0.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_prompt_strength: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_tolerance: Option<u32>,

    /// When true, generates less processed, more natural-looking images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,

    /// Output format: "jpg" or "png".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
}
