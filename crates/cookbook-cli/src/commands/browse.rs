//! Remote catalog commands
//!
//! Browse TheMealDB: search by name, look up by id, filter by category,
//! and save a browsed meal into the local collection.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use cookbook_core::{Meal, MealDbClient, RecipeStore};

use crate::commands::Context;
use crate::output::{print_error, print_list, print_success};

#[derive(Subcommand)]
pub enum BrowseAction {
    /// Search meals by name
    Search {
        /// Search query
        query: String,
    },

    /// Show one meal with its ingredient list
    Show {
        /// Meal id (as assigned by TheMealDB)
        id: String,
    },

    /// List meals in a category (e.g. Seafood, Dessert)
    Category {
        /// Category name
        name: String,
    },

    /// Save a meal from the catalog into the local collection
    Save {
        /// Meal id (as assigned by TheMealDB)
        id: String,
    },
}

/// Table row for meal listings
#[derive(Serialize, Tabled)]
pub struct MealRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Area")]
    pub area: String,
}

impl From<&Meal> for MealRow {
    fn from(meal: &Meal) -> Self {
        Self {
            id: meal.id.clone(),
            name: meal.name.clone(),
            category: meal.category.clone().unwrap_or_default(),
            area: meal.area.clone().unwrap_or_default(),
        }
    }
}

pub async fn execute(ctx: &Context, action: BrowseAction) -> Result<()> {
    let client = MealDbClient::new();

    match action {
        BrowseAction::Search { query } => {
            let meals = client.search_meals(&query).await?;
            let rows: Vec<MealRow> = meals.iter().map(MealRow::from).collect();
            print_list(&rows, ctx.format, "No meals found.")
        }
        BrowseAction::Show { id } => show_meal(ctx, &client, &id).await,
        BrowseAction::Category { name } => {
            let meals = client.meals_by_category(&name).await?;
            let rows: Vec<MealRow> = meals.iter().map(MealRow::from).collect();
            print_list(&rows, ctx.format, "No meals found.")
        }
        BrowseAction::Save { id } => save_meal(ctx, &client, &id).await,
    }
}

async fn show_meal(ctx: &Context, client: &MealDbClient, id: &str) -> Result<()> {
    let Some(meal) = client.get_meal_by_id(id).await? else {
        print_error(&format!("Meal {} not found", id));
        return Ok(());
    };

    match ctx.format {
        crate::output::OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&meal)?);
        }
        crate::output::OutputFormat::Table => {
            println!("{} (#{})", meal.name, meal.id);
            if let Some(category) = &meal.category {
                println!("Category: {}", category);
            }
            if let Some(thumbnail) = &meal.thumbnail {
                println!("Image: {}", thumbnail);
            }
            println!("\nIngredients:");
            for item in meal.ingredients() {
                match &item.measure {
                    Some(measure) => println!("  - {} ({})", item.name, measure),
                    None => println!("  - {}", item.name),
                }
            }
            if let Some(instructions) = &meal.instructions {
                println!("\nInstructions:\n{}", instructions);
            }
        }
    }
    Ok(())
}

/// Fetch a meal and store it as a local recipe through the normal create
/// path, so validation and ingredient dedup apply
async fn save_meal(ctx: &Context, client: &MealDbClient, id: &str) -> Result<()> {
    let Some(meal) = client.get_meal_by_id(id).await? else {
        print_error(&format!("Meal {} not found", id));
        return Ok(());
    };

    let store = RecipeStore::new(ctx.db.pool.clone());
    let recipe_id = store
        .create_recipe(
            &meal.name,
            &meal.to_ingredient_inputs(),
            meal.instructions.as_deref().unwrap_or_default(),
            meal.thumbnail.as_deref(),
        )
        .await?;

    print_success(
        &format!("Saved \"{}\" as recipe {}", meal.name, recipe_id),
        ctx.quiet,
    );
    Ok(())
}
