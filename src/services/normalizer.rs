//! Turns the model's free-text reply into a typed record.
//!
//! Nothing here returns an error: an unusable reply becomes a not-identified
//! food record or an error symptom record, so the UI always has a message.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use crate::models::{FoodInfo, FoodRecord, Nutrient, SymptomAnalysis, SymptomRecord};

pub const MALFORMED_REPLY: &str = "AI response was not valid JSON or was malformed.";
pub const MISSING_SYMPTOM_FIELDS: &str =
    "AI response for symptom analysis is missing crucial fields (advice/disclaimer).";

const NAME_PLACEHOLDER: &str = "Name not provided";
const CALORIES_PLACEHOLDER: &str = "Calories not provided";
const REASON_PLACEHOLDER: &str = "No specific reason provided by AI for not identifying.";

/// A record kind the normalizer can produce from a parsed reply.
pub trait ReplyRecord: Sized {
    /// Record for a reply that is not JSON at all.
    fn malformed() -> Self;

    /// Maps a parsed reply onto the record, filling defaults.
    fn from_reply(value: Value) -> Self;
}

/// Normalizes a raw reply into the record kind `R` the caller asked for.
pub fn normalize<R: ReplyRecord>(raw: &str) -> R {
    let payload = strip_code_fence(raw);

    match serde_json::from_str::<Value>(payload) {
        Ok(value) => R::from_reply(value),
        Err(e) => {
            log::error!("❌ Failed to parse model reply as JSON: {}", e);
            log::debug!("📄 Unparseable reply: {}", raw);
            R::malformed()
        }
    }
}

/// Removes a surrounding ```` ```lang ... ``` ```` fence; anything else is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    match fence_pattern().captures(trimmed).and_then(|c| c.get(1)) {
        Some(inner) if !inner.as_str().is_empty() => {
            log::warn!("⚠️ Model wrapped its JSON reply in a code fence");
            inner.as_str().trim()
        }
        _ => trimmed,
    }
}

fn fence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)^```[A-Za-z0-9_+-]*[ \t]*\r?\n?(.*?)\r?\n?\s*```$")
            .expect("fence pattern is valid")
    })
}

impl ReplyRecord for FoodRecord {
    fn malformed() -> Self {
        FoodRecord::not_identified(MALFORMED_REPLY)
    }

    fn from_reply(value: Value) -> Self {
        let Value::Object(fields) = value else {
            log::warn!("⚠️ Food reply is not a JSON object");
            return Self::malformed();
        };

        match fields.get("identified") {
            Some(Value::Bool(true)) => FoodRecord::Identified(FoodInfo {
                name: text_or(&fields, "name", NAME_PLACEHOLDER),
                calories: text_or(&fields, "calories", CALORIES_PLACEHOLDER),
                nutrients: nutrients(&fields),
                benefits: string_list(&fields, "benefits"),
                hazards: string_list(&fields, "hazards"),
            }),
            Some(Value::Bool(false)) => {
                FoodRecord::not_identified(text_or(&fields, "reason", REASON_PLACEHOLDER))
            }
            _ => {
                log::warn!("⚠️ Food reply has no boolean 'identified' field");
                Self::malformed()
            }
        }
    }
}

impl ReplyRecord for SymptomRecord {
    fn malformed() -> Self {
        SymptomRecord::error(MALFORMED_REPLY)
    }

    fn from_reply(value: Value) -> Self {
        let Value::Object(fields) = value else {
            log::warn!("⚠️ Symptom reply is not a JSON object");
            return SymptomRecord::error(MISSING_SYMPTOM_FIELDS);
        };

        if let Some(error) = present(&fields, "error") {
            return SymptomRecord::error(error);
        }

        match (text(&fields, "advice"), text(&fields, "disclaimer")) {
            (Some(advice), Some(disclaimer)) => SymptomRecord::Analysis(SymptomAnalysis {
                possible_conditions: string_list(&fields, "possibleConditions"),
                advice,
                disclaimer,
            }),
            _ => {
                log::warn!("⚠️ Symptom reply is missing advice or disclaimer");
                SymptomRecord::error(MISSING_SYMPTOM_FIELDS)
            }
        }
    }
}

/// Non-empty string field.
fn text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn text_or(fields: &Map<String, Value>, key: &str, placeholder: &str) -> String {
    text(fields, key).unwrap_or_else(|| placeholder.to_string())
}

/// Any truthy scalar, rendered as text.
fn present(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn string_list(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    match fields.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn nutrients(fields: &Map<String, Value>) -> Vec<Nutrient> {
    let Some(Value::Array(items)) = fields.get("nutrients") else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let name = item.get("name")?.as_str()?.to_string();
            let value = match item.get("value")? {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some(Nutrient { name, value })
        })
        .collect()
}
