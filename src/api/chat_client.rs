use crate::{
    config::{GeminiConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL},
    error::{NutriError, Result},
    models::{Content, GenerateRequest, GenerateResponse, GeminiErrorBody, GenerationConfig, Part},
};
use reqwest::Client;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 800;

/// The persona preamble prepended to every question. Prompt wording, not a
/// contract: callers can swap it via `GeminiConfig::with_preamble`.
pub const DEFAULT_PREAMBLE: &str = "You are a friendly nutrition expert. Answer the question \
below with clear structure, short bullet points, and the occasional emoji to keep it engaging.";

pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    preamble: String,
}

impl ChatClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| NutriError::Config("Gemini API key is required".into()))?;
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
        let model = config
            .model
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
            temperature: config.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_output_tokens: config.max_output_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
            preamble: config.preamble.unwrap_or_else(|| DEFAULT_PREAMBLE.to_string()),
        })
    }

    fn build_prompt(&self, question: &str) -> String {
        format!("{}\n\n{}", self.preamble, question)
    }

    /// One stateless completion round-trip: no history is sent upstream even
    /// though the caller may keep a local transcript.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: self.build_prompt(question),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        log::debug!("Asking {} ({} question chars)", self.model, question.len());

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| NutriError::UpstreamUnavailable(format!("Chat request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<GeminiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| format!("Chat endpoint returned status {}", status));
            log::error!("Chat request to {} failed: {}", self.model, message);
            return Err(NutriError::UpstreamUnavailable(message));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            NutriError::MalformedResponse(format!("Chat body did not parse: {}", e))
        })?;

        extract_reply(body)
    }
}

/// First candidate, first part. Anything else is a malformed payload.
fn extract_reply(body: GenerateResponse) -> Result<String> {
    body.candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| {
            NutriError::MalformedResponse("Chat response contained no candidate text".into())
        })
}
