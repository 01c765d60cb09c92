use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ai_service::{ModelClient, ModelError, ModelRequest};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
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
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Google Gemini `generateContent` client.
pub struct GeminiClient {
    api_key: String,
    model: String,
    api_base: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        api_base: String,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            model,
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }
}

#[async_trait::async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: ModelRequest) -> Result<String, ModelError> {
        let body = build_request(request);

        log::info!("🤖 Sending request to Gemini with model: {}", self.model);
        log::debug!(
            "📤 Request payload size: {} bytes",
            serde_json::to_string(&body)?.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        log::debug!("📥 Gemini response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            log::error!("❌ Gemini API error response: {}", error_text);
            return Err(ModelError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&error_text),
            });
        }

        let response_text = response.text().await?;
        log::debug!("📄 Raw Gemini response size: {} bytes", response_text.len());

        extract_text(&response_text)
    }
}

fn build_request(request: ModelRequest) -> GenerateRequest {
    let mut parts = Vec::with_capacity(2);
    if let Some(image) = request.image {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type().to_string(),
                data: image.data().to_string(),
            },
        });
    }
    parts.push(Part::Text {
        text: request.prompt,
    });

    GenerateRequest {
        contents: vec![Content { parts }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
        },
    }
}

/// Joins the text parts of the first candidate.
fn extract_text(body: &str) -> Result<String, ModelError> {
    let response: GenerateResponse = serde_json::from_str(body)?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(ModelError::EmptyResponse);
    }
    Ok(text)
}

fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "empty error response".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImagePayload;
    use serde_json::json;

    #[test]
    fn test_text_request_shape() {
        let body = build_request(ModelRequest::text("Describe a banana".to_string()));

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "contents": [{"parts": [{"text": "Describe a banana"}]}],
                "generationConfig": {"responseMimeType": "application/json"}
            })
        );
    }

    #[test]
    fn test_image_request_puts_image_first() {
        let image = ImagePayload::from_base64("anBlZ2J5dGVz", "image/jpeg").unwrap();
        let body = build_request(ModelRequest::with_image("Identify".to_string(), image));

        assert_eq!(
            serde_json::to_value(&body).unwrap()["contents"][0]["parts"],
            json!([
                {"inlineData": {"mimeType": "image/jpeg", "data": "anBlZ2J5dGVz"}},
                {"text": "Identify"}
            ])
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body = json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"identified\":"}, {"text": " false}"}], "role": "model"},
                "finishReason": "STOP"
            }]
        })
        .to_string();

        assert_eq!(extract_text(&body).unwrap(), "{\"identified\": false}");
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let body = json!({"promptFeedback": {"blockReason": "SAFETY"}}).to_string();

        assert!(matches!(
            extract_text(&body),
            Err(ModelError::EmptyResponse)
        ));
    }

    #[test]
    fn test_rejection_message_from_envelope() {
        let body = json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })
        .to_string();

        assert_eq!(
            rejection_message(&body),
            "API key not valid. Please pass a valid API key."
        );
        assert_eq!(rejection_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(
            "test_key".to_string(),
            "gemini-2.5-flash".to_string(),
            "https://generativelanguage.googleapis.com/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
