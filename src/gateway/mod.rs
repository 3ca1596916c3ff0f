//! Model gateway: the single seam to the hosted text-generation service.
//!
//! Each invocation issues exactly one outbound HTTPS call (per retry
//! attempt) and nothing else; all state is passed in and out by value.

mod gemini;

pub use gemini::{DEFAULT_MODEL, GeminiClient};

use async_trait::async_trait;

/// Output shape hint for a completion call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Free-form text (markdown documents)
    #[default]
    Text,
    /// Structured output; maps to `responseMimeType: "application/json"`
    Json,
}

/// Per-call generation options
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationOptions {
    /// Sampling temperature in [0, 1]; `None` uses the endpoint default
    pub temperature: Option<f32>,
    pub response_format: ResponseFormat,
}

impl GenerationOptions {
    /// Options for structured JSON output
    pub const fn json() -> Self {
        Self {
            temperature: None,
            response_format: ResponseFormat::Json,
        }
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// One completion request: prompt, optional system instruction, options
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_instruction: Option<String>,
    pub prompt: String,
    pub options: GenerationOptions,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: None,
            prompt: prompt.into(),
            options: GenerationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_system(mut self, system_instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(system_instruction.into());
        self
    }

    #[must_use]
    pub const fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

/// Gateway failure taxonomy
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(
        "API key not set. Export GEMINI_API_KEY or configure one with 'prodmuse config --api-key'"
    )]
    MissingApiKey,
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Generation endpoint rejected the request with status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Generation endpoint returned no text")]
    EmptyResponse,
    #[error("Generation call timed out after {0} seconds")]
    Timeout(u64),
}

impl GatewayError {
    /// Transport-class failures are worth one retry; API rejections are not
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_))
    }
}

/// A client for the hosted text-generation service.
///
/// The orchestrator depends on this trait only; tests substitute a stub.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Issue one completion call and return the raw response text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
