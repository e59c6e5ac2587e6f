//! TheMealDB lookup client
//!
//! Three stateless, unauthenticated GET calls against the public TheMealDB
//! API: search by name, lookup by id, filter by category. The API wraps
//! every response in a `meals` field that is JSON `null` when nothing
//! matched.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::Result;
use crate::models::Meal;

/// Public TheMealDB API base (free-tier key "1" is part of the path)
const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Response envelope used by every TheMealDB endpoint
#[derive(Debug, Deserialize)]
struct MealsResponse {
    meals: Option<Vec<Meal>>,
}

/// Client for TheMealDB's read-only recipe API
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client against the public API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Search meals by name (`search.php?s=`)
    pub async fn search_meals(&self, query: &str) -> Result<Vec<Meal>> {
        let url = format!("{}/search.php", self.base_url);
        let response: MealsResponse = self
            .client
            .get(&url)
            .query(&[("s", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.meals.unwrap_or_default())
    }

    /// Look up a single meal by its id (`lookup.php?i=`)
    pub async fn get_meal_by_id(&self, id: &str) -> Result<Option<Meal>> {
        let url = format!("{}/lookup.php", self.base_url);
        let response: MealsResponse = self
            .client
            .get(&url)
            .query(&[("i", id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.meals.and_then(|meals| meals.into_iter().next()))
    }

    /// List meals in a category (`filter.php?c=`). Results carry only
    /// id/name/thumbnail; use [`get_meal_by_id`](Self::get_meal_by_id) for
    /// the full shape.
    pub async fn meals_by_category(&self, category: &str) -> Result<Vec<Meal>> {
        let url = format!("{}/filter.php", self.base_url);
        let response: MealsResponse = self
            .client
            .get(&url)
            .query(&[("c", category)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.meals.unwrap_or_default())
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}
