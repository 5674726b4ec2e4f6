//! GeminiProvider -- concrete [`ResponseProvider`] implementation for
//! Google Gemini.
//!
//! Sends the context window to the generateContent endpoint as a single
//! rendered transcript. Every failure maps to a [`ProviderError`]
//! variant; the caller degrades to the offline fallback rather than
//! surfacing these.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only
//! exposed when building the request header, never in the URL.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use colloquy_core::llm::provider::ResponseProvider;
use colloquy_types::context::ContextWindow;
use colloquy_types::provider::{ProviderError, ProviderReply, ReplySource};
use colloquy_types::turn::Role;

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};

/// Google Gemini response provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    const TEMPERATURE: f64 = 0.7;
    const MAX_OUTPUT_TOKENS: u32 = 500;

    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "gemini-pro")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30)) // bounds every remote call
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// The model this provider targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Full URL of the generateContent endpoint for this model.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Convert a [`ContextWindow`] into a [`GenerateContentRequest`].
    fn to_request(&self, window: &ContextWindow) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: render_transcript(window),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: Self::TEMPERATURE,
                max_output_tokens: Self::MAX_OUTPUT_TOKENS,
            },
        }
    }

    /// Pull the reply text out of a response, joining multi-part
    /// candidates. A structurally valid response with no usable text
    /// counts as malformed.
    fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ProviderError::MalformedReply(
                "no candidate text in response".to_string(),
            ));
        }

        Ok(text)
    }
}

/// Render the window as a plain-text transcript ending with an
/// `Assistant:` cue for the model to complete.
fn render_transcript(window: &ContextWindow) -> String {
    let mut transcript = String::new();
    for message in &window.messages {
        match message.role {
            Role::User => transcript.push_str("User: "),
            Role::Assistant => transcript.push_str("Assistant: "),
        }
        transcript.push_str(&message.content);
        transcript.push('\n');
    }
    transcript.push_str("Assistant:");
    transcript
}

// GeminiProvider intentionally does NOT derive Debug. The SecretString
// field already redacts the key, but omitting Debug keeps the whole
// request state out of accidental logging.

impl ResponseProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn respond(&self, window: &ContextWindow) -> Result<ProviderReply, ProviderError> {
        let body = self.to_request(window);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                code: status.as_u16(),
                body: error_body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedReply(format!("failed to parse response: {e}")))?;

        let text = Self::extract_text(parsed)?;

        Ok(ProviderReply {
            text,
            source: ReplySource::Remote,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::gemini::types::{Candidate, CandidateContent};
    use colloquy_types::context::ContextMessage;

    fn make_provider() -> GeminiProvider {
        GeminiProvider::new(
            SecretString::from("test-key-not-real"),
            "gemini-pro".to_string(),
        )
    }

    fn make_window() -> ContextWindow {
        ContextWindow {
            messages: vec![
                ContextMessage {
                    role: Role::User,
                    content: "hi".to_string(),
                },
                ContextMessage {
                    role: Role::Assistant,
                    content: "hello".to_string(),
                },
                ContextMessage {
                    role: Role::User,
                    content: "what now?".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_provider_name() {
        let provider = make_provider();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), "gemini-pro");
    }

    #[test]
    fn test_url_includes_model() {
        let provider = make_provider();
        assert_eq!(
            provider.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_with_base_url_override() {
        let provider = make_provider().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            provider.url(),
            "http://localhost:8080/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_render_transcript_format() {
        let transcript = render_transcript(&make_window());
        assert_eq!(
            transcript,
            "User: hi\nAssistant: hello\nUser: what now?\nAssistant:"
        );
    }

    #[test]
    fn test_request_carries_transcript_and_config() {
        let provider = make_provider();
        let request = provider.to_request(&make_window());

        let value = serde_json::to_value(&request).unwrap();
        let text = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("User: hi\n"));
        assert!(text.ends_with("Assistant:"));
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 500);
        assert_eq!(value["generationConfig"]["temperature"], 0.7);
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Hello"}, {"text": " world"}]}}]}"#,
        )
        .unwrap();

        let text = GeminiProvider::extract_text(response).unwrap();
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn test_extract_text_rejects_missing_candidates() {
        let response = GenerateContentResponse { candidates: vec![] };
        let err = GeminiProvider::extract_text(response).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedReply(_)));
    }

    #[test]
    fn test_extract_text_rejects_blank_text() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![Part {
                        text: "   ".to_string(),
                    }],
                }),
            }],
        };

        let err = GeminiProvider::extract_text(response).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedReply(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_maps_to_transport_error() {
        let provider = make_provider().with_base_url("http://127.0.0.1:9".to_string());

        let err = provider.respond(&make_window()).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Transport(_) | ProviderError::Timeout
        ));
    }
}
