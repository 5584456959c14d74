//! Stylewise core: recommends modern CSS features for a described UI task.

pub mod analysis;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod docs;
pub mod engine;
pub mod error;
pub mod guidance;
pub mod logging;
pub mod models;
pub mod ranking;
pub mod support;

pub use config::EngineConfig;
pub use engine::RecommendationEngine;
pub use error::AppError;
pub use models::{Approach, PropertyDetails, SuggestResponse, Suggestion, SupportReport};

#[cfg(test)]
mod tests;
