use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::handlers::food::{IdentifyFoodRequest, LookupFoodRequest};
use crate::handlers::symptoms::SymptomRequest;
use crate::handlers::{FoodHandler, SymptomHandler};
use crate::models::{FoodRecord, SymptomRecord};
use crate::services::NutritionService;

/// Phone photos arrive base64 encoded, well above axum's 2 MB default.
const MAX_BODY_BYTES: usize = 12 * 1024 * 1024;

pub struct AppState {
    pub food: FoodHandler,
    pub symptoms: SymptomHandler,
}

pub fn create_router(service: Arc<NutritionService>, static_dir: Option<&Path>) -> Router {
    let state = Arc::new(AppState {
        food: FoodHandler::new(service.clone()),
        symptoms: SymptomHandler::new(service),
    });

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/api/food/identify", post(identify_food))
        .route("/api/food/lookup", post(lookup_food))
        .route("/api/symptoms", post(analyze_symptoms))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => {
            log::info!("📁 Serving UI assets from {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        None => router.route("/", get(root_handler)),
    };

    router.layer(
        ServiceBuilder::new()
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(CorsLayer::permissive()),
    )
}

async fn identify_food(
    State(state): State<Arc<AppState>>,
    Json(request): Json<IdentifyFoodRequest>,
) -> Json<FoodRecord> {
    log::info!("🔔 Food identification request received");
    Json(state.food.identify(request).await)
}

async fn lookup_food(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LookupFoodRequest>,
) -> Json<FoodRecord> {
    log::info!("🔔 Food lookup request received");
    Json(state.food.lookup(request).await)
}

async fn analyze_symptoms(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SymptomRequest>,
) -> Json<SymptomRecord> {
    log::info!("🔔 Symptom analysis request received");
    Json(state.symptoms.analyze(request).await)
}

async fn root_handler() -> &'static str {
    "NutriScan AI API - POST /api/food/identify, /api/food/lookup or /api/symptoms"
}

async fn health_check() -> &'static str {
    "OK"
}
