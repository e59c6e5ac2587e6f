//! Data models for the Cookbook application

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use std::collections::HashMap;

/// Raw recipe row as stored in the `recipes` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub name: String,
    pub instructions: Option<String>,
    pub image: Option<String>,
}

/// A recipe with its ingredient list attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub instructions: String,
    pub image: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Combine a recipe row with its joined ingredient rows
    pub fn from_row(row: RecipeRow, ingredients: Vec<RecipeIngredient>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            instructions: row.instructions.unwrap_or_default(),
            image: row.image,
            ingredients,
        }
    }
}

/// One ingredient attached to a recipe: the shared ingredient name plus the
/// recipe-specific quantity ("2 cups" means nothing outside its recipe, so
/// quantity lives on the association)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: Option<String>,
}

/// A row in the `ingredients` table. Names are stored trimmed and lowercased
/// and deduplicated across all recipes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
}

/// Caller-side ingredient entry for creating or updating a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientInput {
    pub name: String,
    pub quantity: Option<String>,
}

impl IngredientInput {
    pub fn new(name: impl Into<String>, quantity: Option<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A meal as returned by TheMealDB API.
///
/// The API spreads ingredients over twenty positional field pairs
/// (`strIngredient1`..`strIngredient20` / `strMeasure1`..`strMeasure20`);
/// those are captured in `extra` and extracted with [`Meal::ingredients`].
/// Category filter results only carry id/name/thumbnail, so everything else
/// is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A positional ingredient/measure pair extracted from a [`Meal`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealIngredient {
    pub name: String,
    pub measure: Option<String>,
}

impl Meal {
    /// Extract the non-blank positional ingredient pairs, in API order
    pub fn ingredients(&self) -> Vec<MealIngredient> {
        (1..=20)
            .filter_map(|i| {
                let name = self
                    .extra
                    .get(&format!("strIngredient{}", i))
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|n| !n.is_empty())?;

                let measure = self
                    .extra
                    .get(&format!("strMeasure{}", i))
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(String::from);

                Some(MealIngredient {
                    name: name.to_string(),
                    measure,
                })
            })
            .collect()
    }

    /// Bridge a fetched meal into the store's input shape, so a browsed meal
    /// can be saved as a local recipe
    pub fn to_ingredient_inputs(&self) -> Vec<IngredientInput> {
        self.ingredients()
            .into_iter()
            .map(|item| IngredientInput::new(item.name, item.measure))
            .collect()
    }
}
