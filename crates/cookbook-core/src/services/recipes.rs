//! Local recipe store
//!
//! Durable CRUD for the user's personal recipes with ingredient
//! normalization and keyword search. Ingredient names are deduplicated
//! across recipes; the recipe-specific quantity lives on the association
//! row. Create and update each run as a single transaction so partial
//! writes are never visible.

use sqlx::{SqliteConnection, SqlitePool};

use crate::error::{Error, Result};
use crate::models::{Ingredient, IngredientInput, Recipe, RecipeIngredient, RecipeRow};
use crate::utils::{contains_fold, normalize_ingredient_name};

/// Storage layer for recipes and their ingredient associations
pub struct RecipeStore {
    pool: SqlitePool,
}

impl RecipeStore {
    /// Create a new RecipeStore with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a recipe together with its ingredient associations.
    ///
    /// Fails with `Error::Validation` if the name or instructions are blank,
    /// or if no ingredient remains after dropping blank-named entries.
    /// Returns the id of the new recipe row.
    pub async fn create_recipe(
        &self,
        name: &str,
        ingredients: &[IngredientInput],
        instructions: &str,
        image: Option<&str>,
    ) -> Result<i64> {
        let entries = validate_input(name, ingredients, instructions)?;

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO recipes (name, instructions, image) VALUES (?, ?, ?)")
            .bind(name.trim())
            .bind(instructions.trim())
            .bind(image)
            .execute(&mut *tx)
            .await?;
        let recipe_id = result.last_insert_rowid();

        link_ingredients(&mut tx, recipe_id, &entries).await?;

        tx.commit().await?;

        log::debug!(
            "[recipes] Created recipe {} with {} ingredients",
            recipe_id,
            entries.len()
        );
        Ok(recipe_id)
    }

    /// Update a recipe in place, replacing its entire ingredient set.
    ///
    /// Same validation as [`create_recipe`](Self::create_recipe). The
    /// existing associations are deleted and rebuilt rather than diffed.
    /// Fails with `Error::NotFound` if no recipe has the given id.
    pub async fn update_recipe(
        &self,
        id: i64,
        name: &str,
        ingredients: &[IngredientInput],
        instructions: &str,
        image: Option<&str>,
    ) -> Result<()> {
        let entries = validate_input(name, ingredients, instructions)?;

        let mut tx = self.pool.begin().await?;

        let result =
            sqlx::query("UPDATE recipes SET name = ?, instructions = ?, image = ? WHERE id = ?")
                .bind(name.trim())
                .bind(instructions.trim())
                .bind(image)
                .bind(id)
                .execute(&mut *tx)
                .await?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Err(Error::not_found(format!("recipe {}", id)));
        }

        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        link_ingredients(&mut tx, id, &entries).await?;

        tx.commit().await?;

        log::debug!("[recipes] Updated recipe {}", id);
        Ok(())
    }

    /// List all recipes with their ingredients attached.
    ///
    /// With a non-blank keyword, keeps only recipes whose name or at least
    /// one ingredient name contains the keyword, compared case- and
    /// diacritic-insensitively. Filtering happens after loading full rows,
    /// which is fine at personal-recipe-list scale.
    pub async fn list_recipes(&self, keyword: Option<&str>) -> Result<Vec<Recipe>> {
        let rows: Vec<RecipeRow> = sqlx::query_as("SELECT * FROM recipes")
            .fetch_all(&self.pool)
            .await?;

        let mut recipes = Vec::with_capacity(rows.len());
        for row in rows {
            let ingredients = self.fetch_ingredients(row.id).await?;
            recipes.push(Recipe::from_row(row, ingredients));
        }

        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
        if let Some(keyword) = keyword {
            recipes.retain(|recipe| {
                contains_fold(&recipe.name, keyword)
                    || recipe
                        .ingredients
                        .iter()
                        .any(|ing| contains_fold(&ing.name, keyword))
            });
        }

        Ok(recipes)
    }

    /// Get one recipe with its ingredients, or `None` if the id is absent
    pub async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>> {
        let row: Option<RecipeRow> = sqlx::query_as("SELECT * FROM recipes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let ingredients = self.fetch_ingredients(id).await?;
        Ok(Some(Recipe::from_row(row, ingredients)))
    }

    /// Delete a recipe; the cascade removes its associations. No-op when the
    /// id does not exist. Ingredient rows are never deleted here, so
    /// ingredients unreferenced by any recipe may remain.
    pub async fn delete_recipe(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        log::debug!(
            "[recipes] Deleted recipe {} ({} row affected)",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    /// List every distinct ingredient ever recorded, whether or not any
    /// recipe still references it
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        let rows: Vec<Ingredient> = sqlx::query_as("SELECT * FROM ingredients")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_ingredients(&self, recipe_id: i64) -> Result<Vec<RecipeIngredient>> {
        let rows: Vec<RecipeIngredient> = sqlx::query_as(
            r#"
            SELECT i.name, ri.quantity
            FROM recipe_ingredients ri
            JOIN ingredients i ON ri.ingredient_id = i.id
            WHERE ri.recipe_id = ?
            "#,
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// Validate create/update input and normalize the ingredient entries.
///
/// Returns the (normalized name, quantity) pairs that survive the blank-name
/// filter.
fn validate_input(
    name: &str,
    ingredients: &[IngredientInput],
    instructions: &str,
) -> Result<Vec<(String, Option<String>)>> {
    if name.trim().is_empty() {
        return Err(Error::validation("Recipe name is required"));
    }
    if instructions.trim().is_empty() {
        return Err(Error::validation("Recipe instructions are required"));
    }

    let entries: Vec<(String, Option<String>)> = ingredients
        .iter()
        .filter(|input| !input.name.trim().is_empty())
        .map(|input| (normalize_ingredient_name(&input.name), input.quantity.clone()))
        .collect();

    if entries.is_empty() {
        return Err(Error::validation("At least one ingredient is required"));
    }

    Ok(entries)
}

/// Insert the association rows for a recipe, reusing existing ingredient
/// rows by normalized name and creating the missing ones. Runs inside the
/// caller's transaction.
async fn link_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: i64,
    entries: &[(String, Option<String>)],
) -> Result<()> {
    for (ingredient_name, quantity) in entries {
        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM ingredients WHERE name = ?")
            .bind(ingredient_name)
            .fetch_optional(&mut *conn)
            .await?;

        let ingredient_id = match existing {
            Some((id,)) => id,
            None => sqlx::query("INSERT INTO ingredients (name) VALUES (?)")
                .bind(ingredient_name)
                .execute(&mut *conn)
                .await?
                .last_insert_rowid(),
        };

        sqlx::query(
            "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, quantity) VALUES (?, ?, ?)",
        )
        .bind(recipe_id)
        .bind(ingredient_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}
