//! Optional AI-generated marketing blurbs for the admin form.
//!
//! One request, one response. The contract with the rest of the system is
//! that this module never surfaces a hard error: every failure mode collapses
//! into a fixed placeholder the form can display as-is.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{instrument, warn};

/// Shown when no API credential is configured.
pub const MISSING_KEY_NOTICE: &str = "Please set API_KEY to use AI features.";
/// Shown when the service answers without any usable text.
pub const EMPTY_RESPONSE_NOTICE: &str = "No description generated.";
/// Shown on any transport or service failure.
pub const UNAVAILABLE_NOTICE: &str = "Could not generate description at this time.";

const GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Result of a description request. The caller always receives displayable
/// text; `Fallback` makes the never-a-hard-error contract explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum Blurb {
    Generated(String),
    Fallback(&'static str),
}

impl Blurb {
    pub fn text(&self) -> &str {
        match self {
            Blurb::Generated(text) => text,
            Blurb::Fallback(placeholder) => placeholder,
        }
    }
}

/// Seam for the external text-generation collaborator, so the admin form can
/// be exercised without network access.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn generate(&self, product_name: &str, category: &str) -> Blurb;
}

#[derive(Debug, Error)]
enum AssistFailure {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Gemini-backed generator. No retry, no timeout, no streaming: a hung call
/// leaves the admin form in its generating state, which the source accepted.
pub struct GeminiAssist {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiAssist {
    /// Reads the credential from `GEMINI_API_KEY`, falling back to the
    /// `API_KEY` name the original deployment used. A missing credential is
    /// not an error; requests then short-circuit to the placeholder.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .unwrap_or_default();
        Self::new(api_key)
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: GEMINI_MODEL.to_string(),
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        )
    }

    fn prompt(product_name: &str, category: &str) -> String {
        format!(
            "Write a short, exciting, and appealing marketing description (max 2 sentences) for a K-pop product.\n\
             Product Name: {product_name}\n\
             Category: {category}\n\
             Target Audience: K-pop fans (stans).\n\
             Tone: Enthusiastic, trendy."
        )
    }

    async fn request_description(
        &self,
        product_name: &str,
        category: &str,
    ) -> Result<String, AssistFailure> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt(product_name, category),
                }],
            }],
        };

        let response = self
            .client
            .post(format!("{}?key={}", self.endpoint(), self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(AssistFailure::Status { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        Ok(text)
    }
}

#[async_trait]
impl DescriptionGenerator for GeminiAssist {
    #[instrument(skip(self))]
    async fn generate(&self, product_name: &str, category: &str) -> Blurb {
        if self.api_key.is_empty() {
            return Blurb::Fallback(MISSING_KEY_NOTICE);
        }

        match self.request_description(product_name, category).await {
            Ok(text) if text.is_empty() => Blurb::Fallback(EMPTY_RESPONSE_NOTICE),
            Ok(text) => Blurb::Generated(text),
            Err(error) => {
                warn!(error = %error, "Description generation failed");
                Blurb::Fallback(UNAVAILABLE_NOTICE)
            }
        }
    }
}

// Gemini generateContent wire types.

#[derive(Debug, Clone, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
