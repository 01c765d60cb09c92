//! NutriScan AI core: prompt building, Gemini calls and reply normalization
//! for food identification, food lookup and symptom analysis.

pub mod config;
pub mod handlers;
pub mod models;
#[cfg(feature = "http-server")]
pub mod server; // JSON API for the browser UI
pub mod services;
