// src/gemini/mod.rs
//! Gemini generateContent client.
//!
//! One outbound call per operation: plain text, search-grounded, or
//! schema-constrained JSON. Grounding and response schemas are mutually
//! exclusive capabilities on the API, which `RequestMode` makes structural.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::StudioConfig;
use crate::types::GroundingSource;

/// Error types for inference calls
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("API key is missing or empty")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Gemini API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Gemini error: {0}")]
    Provider(String),
}

/// How a single generateContent call is configured.
#[derive(Debug, Clone)]
pub enum RequestMode {
    /// Prose reply, no special configuration
    Text,
    /// Google Search tool attached; JSON shape requested by instruction only
    Grounded,
    /// Provider-enforced response schema, application/json MIME type
    Schema(Value),
}

/// Raw reply from one call: concatenated text plus any grounding sources.
#[derive(Debug, Clone)]
pub struct GenerateReply {
    pub text: String,
    pub citations: Vec<GroundingSource>,
}

/// Seam between the service layer and the HTTP client, so tests can stub
/// the provider.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, mode: &RequestMode)
    -> Result<GenerateReply, InferenceError>;
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Serialize)]
struct Tool {
    #[serde(rename = "googleSearch")]
    google_search: GoogleSearchTool,
}

#[derive(Serialize)]
struct GoogleSearchTool {}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ReplyPart>>,
}

#[derive(Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks")]
    grounding_chunks: Option<Vec<GroundingChunk>>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ============================================================================
// Client Implementation
// ============================================================================

pub struct GeminiClient {
    client: Client,
    config: StudioConfig,
}

impl GeminiClient {
    pub fn new(config: StudioConfig) -> Result<Self, InferenceError> {
        if config.api_key.is_empty() {
            return Err(InferenceError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        )
    }
}

fn build_request(prompt: &str, mode: &RequestMode) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![TextPart { text: prompt.to_string() }],
        }],
        generation_config: match mode {
            RequestMode::Schema(schema) => Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.clone(),
            }),
            _ => None,
        },
        tools: matches!(mode, RequestMode::Grounded)
            .then(|| vec![Tool { google_search: GoogleSearchTool {} }]),
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        mode: &RequestMode,
    ) -> Result<GenerateReply, InferenceError> {
        let api_request = build_request(prompt, mode);

        let response = self
            .client
            .post(self.endpoint())
            .json(&api_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api { status, message });
        }

        let api_response: GenerateContentResponse = response.json().await?;

        if let Some(error) = api_response.error {
            return Err(InferenceError::Provider(error.message));
        }

        let mut text = String::new();
        let mut citations = Vec::new();

        if let Some(candidates) = api_response.candidates
            && let Some(candidate) = candidates.into_iter().next()
        {
            if let Some(content) = candidate.content {
                for part in content.parts.unwrap_or_default() {
                    if let Some(t) = part.text {
                        text.push_str(&t);
                    }
                }
            }

            if let Some(metadata) = candidate.grounding_metadata {
                for chunk in metadata.grounding_chunks.unwrap_or_default() {
                    if let Some(web) = chunk.web
                        && let Some(uri) = web.uri
                    {
                        citations.push(GroundingSource {
                            uri,
                            title: web.title.unwrap_or_default(),
                        });
                    }
                }
            }
        }

        debug!(
            chars = text.len(),
            citations = citations.len(),
            "gemini reply received"
        );

        Ok(GenerateReply { text, citations })
    }
}
