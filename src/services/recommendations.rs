use crate::{
    error::{AppError, AppResult},
    models::{Recipe, UserId},
    services::{
        catalog::{CatalogSnapshot, RecipeCatalog},
        recommender::Recommender,
    },
};

/// Generates recipe recommendations for a user
///
/// Loads the user's favourites and a snapshot of the catalog, finds
/// recipes similar to the favourites and returns them in catalog order.
/// A user without favourites gets an empty list without the catalog being
/// loaded.
pub async fn get_recommendations(
    catalog: &dyn RecipeCatalog,
    recommender: &Recommender,
    user_id: UserId,
) -> AppResult<Vec<Recipe>> {
    let user = catalog
        .user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    if user.favourite_recipes.is_empty() {
        tracing::debug!(user = %user_id, "User has no favourites");
        return Ok(vec![]);
    }

    let CatalogSnapshot {
        recipes,
        categories,
        ingredients,
    } = catalog.snapshot().await?;

    // Favourites whose recipe was deleted simply drop out here
    let favourites: Vec<Recipe> = recipes
        .iter()
        .filter(|r| user.is_favourite(r.id))
        .cloned()
        .collect();

    tracing::info!(
        user = %user_id,
        favourites = favourites.len(),
        catalog = recipes.len(),
        "Computing recommendations"
    );

    let ids = recommender.recommend(&favourites, &recipes, &categories, &ingredients)?;

    Ok(recipes.into_iter().filter(|r| ids.contains(&r.id)).collect())
}
