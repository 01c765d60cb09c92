pub mod ai_service; // model client seam
pub mod gemini; // Google Gemini generateContent
pub mod normalizer;
pub mod nutrition; // the three UI-facing operations
pub mod prompts;

pub use ai_service::{ModelClient, ModelError, ModelRequest};
pub use gemini::GeminiClient;
pub use nutrition::NutritionService;
