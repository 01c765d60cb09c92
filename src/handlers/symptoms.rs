use serde::Deserialize;
use std::sync::Arc;

use crate::models::SymptomRecord;
use crate::services::NutritionService;

/// Body of `POST /api/symptoms`
#[derive(Debug, Deserialize)]
pub struct SymptomRequest {
    pub description: String,
}

pub struct SymptomHandler {
    service: Arc<NutritionService>,
}

impl SymptomHandler {
    pub fn new(service: Arc<NutritionService>) -> Self {
        Self { service }
    }

    pub async fn analyze(&self, request: SymptomRequest) -> SymptomRecord {
        let record = self.service.analyze_symptoms(&request.description).await;
        match record.error_message() {
            Some(error) => log::warn!("⚠️ Symptom analysis returned an error record: {}", error),
            None => log::info!("✅ Symptom analysis finished"),
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::nutrition::tests::{service_with, MockModelClient};

    #[tokio::test]
    async fn test_analyze_returns_analysis() {
        let mock = MockModelClient::replying(
            r#"{"possibleConditions": ["Common Cold"], "advice": "Rest and consult a doctor.", "disclaimer": "Not medical advice."}"#,
        );
        let handler = SymptomHandler::new(Arc::new(service_with(&mock)));

        let request: SymptomRequest =
            serde_json::from_str(r#"{"description": "sore throat and runny nose"}"#).unwrap();
        let record = handler.analyze(request).await;

        let analysis = record.analysis().unwrap();
        assert_eq!(analysis.possible_conditions, vec!["Common Cold".to_string()]);
        assert!(mock.requests.lock().unwrap()[0]
            .prompt
            .contains("\"sore throat and runny nose\""));
    }
}
