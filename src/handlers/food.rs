use serde::Deserialize;
use std::sync::Arc;

use crate::models::image::DEFAULT_IMAGE_MIME;
use crate::models::{FoodRecord, ImageError, ImagePayload};
use crate::services::NutritionService;

/// Body of `POST /api/food/identify`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyFoodRequest {
    /// Base64 image data or a full `data:` URL.
    pub image: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl IdentifyFoodRequest {
    fn into_payload(self) -> Result<ImagePayload, ImageError> {
        if self.image.trim_start().starts_with("data:") {
            return ImagePayload::from_data_url(&self.image);
        }
        let mime_type = self.mime_type.as_deref().unwrap_or(DEFAULT_IMAGE_MIME);
        ImagePayload::from_base64(&self.image, mime_type)
    }
}

/// Body of `POST /api/food/lookup`
#[derive(Debug, Deserialize)]
pub struct LookupFoodRequest {
    pub name: String,
}

pub struct FoodHandler {
    service: Arc<NutritionService>,
}

impl FoodHandler {
    pub fn new(service: Arc<NutritionService>) -> Self {
        Self { service }
    }

    pub async fn identify(&self, request: IdentifyFoodRequest) -> FoodRecord {
        let image = match request.into_payload() {
            Ok(image) => image,
            Err(e) => {
                log::warn!("⚠️ Rejected uploaded image: {:?}", e);
                return FoodRecord::not_identified(e.to_string());
            }
        };

        let record = self.service.identify_food(image).await;
        log::info!("✅ Food identification finished (identified: {})", record.is_identified());
        record
    }

    pub async fn lookup(&self, request: LookupFoodRequest) -> FoodRecord {
        let record = self.service.lookup_food_by_name(&request.name).await;
        log::info!("✅ Food lookup finished (identified: {})", record.is_identified());
        record
    }
}
