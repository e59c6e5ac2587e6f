//! Local recipe commands
//!
//! Commands for the personal collection: list, show, add, update, delete,
//! plus the ingredient listing.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use cookbook_core::{IngredientInput, Recipe, RecipeStore};

use crate::commands::Context;
use crate::output::{print_error, print_list, print_single, print_success};

#[derive(Subcommand)]
pub enum RecipeAction {
    /// List recipes, optionally filtered by a keyword matching recipe or
    /// ingredient names (case- and accent-insensitive)
    List {
        /// Keyword to filter by
        keyword: Option<String>,
    },

    /// Show one recipe with its full ingredient list
    Show {
        /// Recipe id
        id: i64,
    },

    /// Add a recipe to the collection
    Add {
        /// Recipe name
        #[arg(long)]
        name: String,

        /// Preparation instructions
        #[arg(long)]
        instructions: String,

        /// Image reference (path or URL)
        #[arg(long)]
        image: Option<String>,

        /// Ingredient entry, repeatable (e.g. -i "flour:2 cups" -i salt)
        #[arg(short = 'i', long = "ingredient", value_name = "NAME[:QUANTITY]")]
        ingredients: Vec<String>,
    },

    /// Update a recipe, replacing its entire ingredient set
    Update {
        /// Recipe id
        id: i64,

        /// Recipe name
        #[arg(long)]
        name: String,

        /// Preparation instructions
        #[arg(long)]
        instructions: String,

        /// Image reference (path or URL)
        #[arg(long)]
        image: Option<String>,

        /// Ingredient entry, repeatable (e.g. -i "flour:2 cups" -i salt)
        #[arg(short = 'i', long = "ingredient", value_name = "NAME[:QUANTITY]")]
        ingredients: Vec<String>,
    },

    /// Delete a recipe and its ingredient associations
    Delete {
        /// Recipe id
        id: i64,

        /// Skip the confirmation preview
        #[arg(long)]
        force: bool,
    },

    /// List every ingredient ever recorded, including ones no recipe
    /// references anymore
    Ingredients,
}

/// Table row for recipe listings
#[derive(Serialize, Tabled)]
pub struct RecipeRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Ingredients")]
    pub ingredients: String,
    #[tabled(rename = "Image")]
    pub image: String,
}

impl From<&Recipe> for RecipeRow {
    fn from(recipe: &Recipe) -> Self {
        let ingredients = recipe
            .ingredients
            .iter()
            .map(|ing| match &ing.quantity {
                Some(qty) => format!("{} ({})", ing.name, qty),
                None => ing.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            ingredients,
            image: recipe.image.clone().unwrap_or_default(),
        }
    }
}

/// Table row for ingredient listings
#[derive(Serialize, Tabled)]
pub struct IngredientRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
}

pub async fn execute(ctx: &Context, action: RecipeAction) -> Result<()> {
    let store = RecipeStore::new(ctx.db.pool.clone());

    match action {
        RecipeAction::List { keyword } => list_recipes(ctx, &store, keyword).await,
        RecipeAction::Show { id } => show_recipe(ctx, &store, id).await,
        RecipeAction::Add {
            name,
            instructions,
            image,
            ingredients,
        } => {
            let inputs = parse_ingredient_args(&ingredients);
            let id = store
                .create_recipe(&name, &inputs, &instructions, image.as_deref())
                .await?;
            print_success(&format!("Created recipe {}", id), ctx.quiet);
            Ok(())
        }
        RecipeAction::Update {
            id,
            name,
            instructions,
            image,
            ingredients,
        } => {
            let inputs = parse_ingredient_args(&ingredients);
            store
                .update_recipe(id, &name, &inputs, &instructions, image.as_deref())
                .await?;
            print_success(&format!("Updated recipe {}", id), ctx.quiet);
            Ok(())
        }
        RecipeAction::Delete { id, force } => delete_recipe(ctx, &store, id, force).await,
        RecipeAction::Ingredients => list_ingredients(ctx, &store).await,
    }
}

async fn list_recipes(ctx: &Context, store: &RecipeStore, keyword: Option<String>) -> Result<()> {
    let recipes = store.list_recipes(keyword.as_deref()).await?;
    let rows: Vec<RecipeRow> = recipes.iter().map(RecipeRow::from).collect();
    print_list(&rows, ctx.format, "No recipes found.")
}

async fn show_recipe(ctx: &Context, store: &RecipeStore, id: i64) -> Result<()> {
    let Some(recipe) = store.get_recipe(id).await? else {
        print_error(&format!("Recipe {} not found", id));
        return Ok(());
    };

    match ctx.format {
        crate::output::OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        crate::output::OutputFormat::Table => {
            println!("{} (#{})", recipe.name, recipe.id);
            if let Some(image) = &recipe.image {
                println!("Image: {}", image);
            }
            println!("\nIngredients:");
            for ing in &recipe.ingredients {
                match &ing.quantity {
                    Some(qty) => println!("  - {} ({})", ing.name, qty),
                    None => println!("  - {}", ing.name),
                }
            }
            println!("\nInstructions:\n{}", recipe.instructions);
        }
    }
    Ok(())
}

async fn delete_recipe(ctx: &Context, store: &RecipeStore, id: i64, force: bool) -> Result<()> {
    if !force {
        // Show the recipe before deletion
        match store.get_recipe(id).await? {
            Some(recipe) => {
                print_single(&RecipeRow::from(&recipe), ctx.format)?;
                print_error("Use --force to confirm deletion");
            }
            None => print_error(&format!("Recipe {} not found", id)),
        }
        return Ok(());
    }

    store.delete_recipe(id).await?;
    print_success(&format!("Deleted recipe {}", id), ctx.quiet);
    Ok(())
}

async fn list_ingredients(ctx: &Context, store: &RecipeStore) -> Result<()> {
    let ingredients = store.list_ingredients().await?;
    let rows: Vec<IngredientRow> = ingredients
        .into_iter()
        .map(|ing| IngredientRow {
            id: ing.id,
            name: ing.name,
        })
        .collect();
    print_list(&rows, ctx.format, "No ingredients recorded.")
}

/// Parse repeated `NAME[:QUANTITY]` flags into store inputs
fn parse_ingredient_args(args: &[String]) -> Vec<IngredientInput> {
    args.iter()
        .map(|arg| match arg.split_once(':') {
            Some((name, quantity)) => {
                let quantity = quantity.trim();
                IngredientInput::new(
                    name,
                    (!quantity.is_empty()).then(|| quantity.to_string()),
                )
            }
            None => IngredientInput::new(arg.as_str(), None),
        })
        .collect()
}
