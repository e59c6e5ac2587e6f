//! Services module

pub mod mealdb;
pub mod recipes;

pub use mealdb::MealDbClient;
pub use recipes::RecipeStore;
