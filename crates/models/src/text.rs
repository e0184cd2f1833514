use serde::Serialize;
use serde_json::Value;

use crate::sdk_core::model::ReplicateModel;

/// GPT-5 Nano is a lightweight variant suitable for fast and cost-effective
/// text tasks, with limited reasoning capabilities.
pub const GPT5_NANO: ReplicateModel<Gpt5SeriesInput> = ReplicateModel::new("openai/gpt-5-nano");
/// GPT-5 Mini offers better performance and reasoning, slightly more
/// expensive and slower than Nano.
pub const GPT5_MINI: ReplicateModel<Gpt5SeriesInput> = ReplicateModel::new("openai/gpt-5-mini");
/// GPT-5 is the full model for high reasoning effort and complex text
/// understanding.
pub const GPT5: ReplicateModel<Gpt5SeriesInput> = ReplicateModel::new("openai/gpt-5");

pub const GPT41_NANO: ReplicateModel<Gpt4SeriesInput> = ReplicateModel::new("openai/gpt-4.1-nano");
pub const GPT41_MINI: ReplicateModel<Gpt4SeriesInput> = ReplicateModel::new("openai/gpt-4.1-mini");
pub const GPT41: ReplicateModel<Gpt4SeriesInput> = ReplicateModel::new("openai/gpt-4.1");
pub const GPT4O: ReplicateModel<Gpt4SeriesInput> = ReplicateModel::new("openai/gpt-4o");
pub const GPT4O_MINI: ReplicateModel<Gpt4SeriesInput> = ReplicateModel::new("openai/gpt-4o-mini");

/// DeepSeek-R1 is the reasoning-capable model of the DeepSeek family.
pub const DEEPSEEK_R1: ReplicateModel<DeepSeekInput> =
    ReplicateModel::new("deepseek-ai/deepseek-r1");
/// DeepSeek-V3 is optimized for diverse text tasks with improved throughput.
pub const DEEPSEEK_V3: ReplicateModel<DeepSeekInput> =
    ReplicateModel::new("deepseek-ai/deepseek-v3");

/// Input parameters for the GPT-5 model family.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Gpt5SeriesInput {
    /// Prompt to send to the model. Do not use together with `messages`.
    pub prompt: String,

    /// Chat messages; when provided, `prompt` and `system_prompt` are
    /// ignored by the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Value>>,

    /// Sets the assistant's behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// Image URIs to send to the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_input: Option<Vec<String>>,

    /// Constrains reasoning effort: "minimal", "low", "medium", or "high".
    /// "minimal" responds faster with less reasoning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<String>,

    /// Response verbosity: "low", "medium", or "high".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<String>,

    /// Max completion tokens. Increase for higher reasoning efforts to avoid
    /// empty responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
}

/// Input parameters for the GPT-4o and GPT-4.1 model families.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Gpt4SeriesInput {
    /// Prompt to send to the model. Do not use together with `messages`.
    pub prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_input: Option<Vec<String>>,

    /// Sampling temperature between 0 and 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Nucleus sampling parameter between 0 and 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,

    /// Penalizes repeated tokens; between -2 and 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,

    /// Penalizes tokens already present in the text so far; between -2 and 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
}

/// Input parameters for the DeepSeek-R1 and DeepSeek-V3 models.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeepSeekInput {
    pub prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn gpt5_input_serializes_only_set_fields() {
        let input = Gpt5SeriesInput {
            prompt: "summarize this".into(),
            reasoning_effort: Some("minimal".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).expect("encode");
        assert_eq!(
            value,
            json!({"prompt": "summarize this", "reasoning_effort": "minimal"})
        );
    }

    #[test]
    fn messages_replace_prompt_shape() {
        let input = Gpt4SeriesInput {
            prompt: String::new(),
            messages: Some(vec![json!({"role": "user", "content": "hi"})]),
            temperature: Some(0.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).expect("encode");
        assert_eq!(
            value,
            json!({
                "prompt": "",
                "messages": [{"role": "user", "content": "hi"}],
                "temperature": 0.0
            })
        );
    }

    #[test]
    fn text_registry_entries_have_zero_informational_cost() {
        assert_eq!(GPT5.id(), "openai/gpt-5");
        assert_eq!(GPT5.cost(), 0.0);
        assert_eq!(DEEPSEEK_R1.id(), "deepseek-ai/deepseek-r1");
        assert_eq!(GPT4O_MINI.id(), "openai/gpt-4o-mini");
    }
}
