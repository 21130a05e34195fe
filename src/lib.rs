pub mod api; // HTTP surface: banner, health, validate, extract
pub mod config;
pub mod extraction; // Name-detection engine
pub mod models; // Upload document schema
