use std::sync::Arc;

use super::ai_service::{ModelClient, ModelError, ModelRequest};
use super::normalizer::{normalize, ReplyRecord};
use super::prompts;
use crate::models::{FoodRecord, ImagePayload, SymptomRecord};

pub const NOT_CONFIGURED: &str = "API Key is not configured. Cannot call AI service.";
pub const INVALID_API_KEY: &str = "Gemini API Key is invalid. Please check your configuration.";
pub const EMPTY_FOOD_NAME: &str = "Please enter a food name.";
pub const EMPTY_SYMPTOMS: &str = "Please describe your symptoms.";

/// The three operations the UI calls. Each issues at most one model call and
/// always answers with a displayable record.
pub struct NutritionService {
    model: Option<Arc<dyn ModelClient>>,
}

impl NutritionService {
    /// `None` means no credential was configured; every call short-circuits.
    pub fn new(model: Option<Arc<dyn ModelClient>>) -> Self {
        Self { model }
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    pub async fn identify_food(&self, image: ImagePayload) -> FoodRecord {
        let Some(model) = &self.model else {
            return FoodRecord::not_identified(NOT_CONFIGURED);
        };

        log::info!(
            "📸 Identifying food from {} image ({} base64 bytes)",
            image.mime_type(),
            image.data().len()
        );
        run(model.as_ref(), prompts::identify_food_request(image), "food identification").await
    }

    pub async fn lookup_food_by_name(&self, food_name: &str) -> FoodRecord {
        let Some(model) = &self.model else {
            return FoodRecord::not_identified(NOT_CONFIGURED);
        };
        let Ok(request) = prompts::food_by_name_request(food_name) else {
            return FoodRecord::not_identified(EMPTY_FOOD_NAME);
        };

        log::info!("🔎 Looking up food by name: {}", food_name.trim());
        run(model.as_ref(), request, "food lookup").await
    }

    pub async fn analyze_symptoms(&self, symptoms: &str) -> SymptomRecord {
        let Some(model) = &self.model else {
            return SymptomRecord::error(NOT_CONFIGURED);
        };
        let Ok(request) = prompts::symptom_analysis_request(symptoms) else {
            return SymptomRecord::error(EMPTY_SYMPTOMS);
        };

        log::info!("🩺 Analyzing symptoms ({} chars)", symptoms.trim().len());
        run(model.as_ref(), request, "symptom analysis").await
    }
}

/// Records that can carry a transport failure message.
trait FailureRecord: ReplyRecord {
    fn failure(message: String) -> Self;
}

impl FailureRecord for FoodRecord {
    fn failure(message: String) -> Self {
        FoodRecord::not_identified(message)
    }
}

impl FailureRecord for SymptomRecord {
    fn failure(message: String) -> Self {
        SymptomRecord::error(message)
    }
}

async fn run<R: FailureRecord>(model: &dyn ModelClient, request: ModelRequest, operation: &str) -> R {
    match model.generate(request).await {
        Ok(reply) => {
            log::debug!("💬 Model reply for {}: {}", operation, reply);
            normalize(&reply)
        }
        Err(e) => {
            log::error!("❌ Error calling Gemini API ({}): {}", operation, e);
            R::failure(failure_message(&e))
        }
    }
}

fn failure_message(error: &ModelError) -> String {
    if error.is_invalid_credential() {
        INVALID_API_KEY.to_string()
    } else {
        format!("Gemini API Error: {}", error)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::services::normalizer::{MALFORMED_REPLY, MISSING_SYMPTOM_FIELDS};
    use std::sync::Mutex;

    /// Replays canned replies and records every request it receives.
    pub struct MockModelClient {
        replies: Mutex<Vec<Result<String, ModelError>>>,
        pub requests: Mutex<Vec<ModelRequest>>,
    }

    impl MockModelClient {
        pub fn new(replies: Vec<Result<String, ModelError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub fn replying(reply: &str) -> Arc<Self> {
            Self::new(vec![Ok(reply.to_string())])
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl ModelClient for MockModelClient {
        async fn generate(&self, request: ModelRequest) -> Result<String, ModelError> {
            self.requests.lock().unwrap().push(request);
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                return Err(ModelError::EmptyResponse);
            }
            replies.remove(0)
        }
    }

    pub fn service_with(mock: &Arc<MockModelClient>) -> NutritionService {
        NutritionService::new(Some(mock.clone() as Arc<dyn ModelClient>))
    }

    const APPLE_REPLY: &str = r#"{
        "identified": true,
        "name": "Apple",
        "calories": "Approx. 52 kcal per 100g",
        "nutrients": [
            {"name": "Dietary Fiber", "value": "2.4g per 100g"},
            {"name": "Vitamin C", "value": "4.6mg per 100g"},
            {"name": "Potassium", "value": "107mg per 100g"}
        ],
        "benefits": [
            "Good source of fiber, aiding digestion.",
            "Contains antioxidants like Vitamin C."
        ],
        "hazards": [
            "Apple seeds contain amygdalin, which can release cyanide if chewed in large quantities."
        ]
    }"#;

    fn jpeg() -> ImagePayload {
        ImagePayload::from_bytes(b"jpegbytes", "image/jpeg").unwrap()
    }

    #[tokio::test]
    async fn test_identify_apple_image() {
        let mock = MockModelClient::replying(APPLE_REPLY);
        let service = service_with(&mock);

        let record = service.identify_food(jpeg()).await;
        let info = record.info().unwrap();

        assert_eq!(info.name, "Apple");
        assert_eq!(info.nutrients.len(), 3);
        assert_eq!(info.benefits.len(), 2);
        assert_eq!(info.hazards.len(), 1);

        let requests = mock.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].image, Some(jpeg()));
    }

    #[tokio::test]
    async fn test_unconfigured_service_short_circuits() {
        let service = NutritionService::new(None);

        assert!(!service.is_configured());
        assert_eq!(
            service.identify_food(jpeg()).await,
            FoodRecord::not_identified(NOT_CONFIGURED)
        );
        assert_eq!(
            service.lookup_food_by_name("Banana").await,
            FoodRecord::not_identified(NOT_CONFIGURED)
        );
        assert_eq!(
            service.analyze_symptoms("headache").await,
            SymptomRecord::error(NOT_CONFIGURED)
        );
    }

    #[tokio::test]
    async fn test_empty_inputs_skip_the_model() {
        let mock = MockModelClient::replying(APPLE_REPLY);
        let service = service_with(&mock);

        assert_eq!(
            service.lookup_food_by_name("").await,
            FoodRecord::not_identified(EMPTY_FOOD_NAME)
        );
        assert_eq!(
            service.analyze_symptoms("  \n").await,
            SymptomRecord::error(EMPTY_SYMPTOMS)
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_lookup_sends_name_in_prompt() {
        let mock = MockModelClient::replying(r#"{"identified": false, "reason": "Unknown food."}"#);
        let service = service_with(&mock);

        let record = service.lookup_food_by_name("Zorblax").await;

        assert_eq!(record, FoodRecord::not_identified("Unknown food."));
        let requests = mock.requests.lock().unwrap();
        assert!(requests[0].prompt.contains("\"Zorblax\""));
        assert!(requests[0].image.is_none());
    }

    #[tokio::test]
    async fn test_emergency_symptoms() {
        let mock = MockModelClient::replying(
            r#"```json
{
  "possibleConditions": ["Symptoms may indicate a serious condition"],
  "advice": "Please seek immediate medical attention by calling emergency services.",
  "disclaimer": "This symptom analysis is AI-generated and for informational purposes only."
}
```"#,
        );
        let service = service_with(&mock);

        let record = service
            .analyze_symptoms("severe chest pain and shortness of breath")
            .await;

        assert!(record.error_message().is_none());
        let analysis = record.analysis().unwrap();
        assert!(analysis.advice.contains("seek immediate medical attention"));
        assert!(!analysis.disclaimer.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_key_message() {
        let rejection = || ModelError::Rejected {
            status: 400,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        };
        let mock = MockModelClient::new(vec![Err(rejection()), Err(rejection())]);
        let service = service_with(&mock);

        assert_eq!(
            service.lookup_food_by_name("Banana").await,
            FoodRecord::not_identified(INVALID_API_KEY)
        );
        assert_eq!(
            service.analyze_symptoms("cough").await,
            SymptomRecord::error(INVALID_API_KEY)
        );
    }

    #[tokio::test]
    async fn test_other_endpoint_errors_are_described() {
        let mock = MockModelClient::new(vec![Err(ModelError::Rejected {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        })]);
        let service = service_with(&mock);

        let record = service.identify_food(jpeg()).await;

        assert_eq!(
            record.reason(),
            Some("Gemini API Error: Resource has been exhausted (HTTP 429)")
        );
    }

    #[tokio::test]
    async fn test_bad_replies_become_records() {
        let mock = MockModelClient::new(vec![
            Ok("I think this is a banana.".to_string()),
            Ok(r#"{"possibleConditions": ["Flu"]}"#.to_string()),
        ]);
        let service = service_with(&mock);

        assert_eq!(
            service.lookup_food_by_name("Banana").await,
            FoodRecord::not_identified(MALFORMED_REPLY)
        );
        assert_eq!(
            service.analyze_symptoms("fever").await,
            SymptomRecord::error(MISSING_SYMPTOM_FIELDS)
        );
        assert_eq!(mock.call_count(), 2);
    }
}
