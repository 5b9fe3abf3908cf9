use super::client::GeminiHttpClient;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::ai::EmailService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Low temperature keeps the wording formal and close to the template.
pub const EMAIL_TEMPERATURE: f64 = 0.2;

pub struct GeminiEmailClient {
    http: GeminiHttpClient,
}

impl GeminiEmailClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            http: GeminiHttpClient::new(api_key, model, timeout),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    pub fn model(&self) -> &str {
        self.http.model()
    }

    /// Concatenate every text part of the first candidate.
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let content = response.candidates.first()?.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|p| match p {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[async_trait]
impl EmailService for GeminiEmailClient {
    async fn compose(&self, parts: Vec<Part>) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: GenerationConfig {
                temperature: EMAIL_TEMPERATURE,
            },
        };

        tracing::debug!(model = self.model(), "Sending email request to Gemini");
        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        Self::extract_text(&response).ok_or_else(|| {
            match response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
            {
                Some(reason) => {
                    Error::AiProvider(format!("Gemini blocked the prompt: {}", reason))
                }
                None => Error::AiProvider("No text in Gemini response".to_string()),
            }
        })
    }
}
