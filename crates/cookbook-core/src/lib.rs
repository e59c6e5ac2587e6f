//! # cookbook-core
//!
//! Core logic for Cookbook - a recipe keeper with a local store and a
//! remote lookup against TheMealDB.
//!
//! This crate provides:
//! - Database handle and schema (`db` module)
//! - Data models (`models` module)
//! - Recipe store and remote lookup client (`services` module)
//! - Unified error handling (`error` module)

pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-exports for convenience
pub use db::Database;
pub use error::{Error, Result};

// Re-export commonly used types from models
pub use models::{Ingredient, IngredientInput, Meal, MealIngredient, Recipe, RecipeIngredient};

// Re-export commonly used types from services
pub use services::{MealDbClient, RecipeStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
