pub mod food;
pub mod symptoms;

pub use food::FoodHandler;
pub use symptoms::SymptomHandler;
