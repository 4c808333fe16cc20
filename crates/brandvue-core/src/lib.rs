//! Core types shared across the BrandVue metadata crates

pub mod config;
pub mod error;
pub mod features;
pub mod types;
mod constants;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use features::{FeatureCode, SystemKey};
pub use types::*;

pub use chrono;
