use serde::Serialize;

pub mod image;

pub use image::{ImageError, ImagePayload};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nutrient {
    pub name: String,
    pub value: String, // "10mg/100g", "High", "Present"
}

/// Nutrition details for a recognised food or dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodInfo {
    pub name: String,
    pub calories: String, // free text, e.g. "Approx. 52 kcal per 100g"
    pub nutrients: Vec<Nutrient>,
    pub benefits: Vec<String>,
    pub hazards: Vec<String>,
}

/// Result of an image identification or a name lookup.
///
/// A not-identified record carries only its reason, so no nutrition data can
/// leak into a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "FoodRecordJson")]
pub enum FoodRecord {
    Identified(FoodInfo),
    NotIdentified { reason: String },
}

impl FoodRecord {
    pub fn not_identified(reason: impl Into<String>) -> Self {
        FoodRecord::NotIdentified {
            reason: reason.into(),
        }
    }

    pub fn is_identified(&self) -> bool {
        matches!(self, FoodRecord::Identified(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            FoodRecord::Identified(_) => None,
            FoodRecord::NotIdentified { reason } => Some(reason),
        }
    }

    pub fn info(&self) -> Option<&FoodInfo> {
        match self {
            FoodRecord::Identified(info) => Some(info),
            FoodRecord::NotIdentified { .. } => None,
        }
    }
}

/// Wire shape the browser UI reads: `identified` plus whichever side is set.
#[derive(Serialize)]
struct FoodRecordJson {
    identified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    calories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nutrients: Option<Vec<Nutrient>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    benefits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hazards: Option<Vec<String>>,
}

impl From<FoodRecord> for FoodRecordJson {
    fn from(record: FoodRecord) -> Self {
        match record {
            FoodRecord::Identified(info) => FoodRecordJson {
                identified: true,
                reason: None,
                name: Some(info.name),
                calories: Some(info.calories),
                nutrients: Some(info.nutrients),
                benefits: Some(info.benefits),
                hazards: Some(info.hazards),
            },
            FoodRecord::NotIdentified { reason } => FoodRecordJson {
                identified: false,
                reason: Some(reason),
                name: None,
                calories: None,
                nutrients: None,
                benefits: None,
                hazards: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub possible_conditions: Vec<String>,
    pub advice: String,
    pub disclaimer: String,
}

/// Result of a symptom description request. `Error` means nothing else is usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SymptomRecord {
    Analysis(SymptomAnalysis),
    Error { error: String },
}

impl SymptomRecord {
    pub fn error(message: impl Into<String>) -> Self {
        SymptomRecord::Error {
            error: message.into(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SymptomRecord::Analysis(_) => None,
            SymptomRecord::Error { error } => Some(error),
        }
    }

    pub fn analysis(&self) -> Option<&SymptomAnalysis> {
        match self {
            SymptomRecord::Analysis(analysis) => Some(analysis),
            SymptomRecord::Error { .. } => None,
        }
    }
}
