use crate::{
    error::AppResult,
    models::{Category, Ingredient, Recipe, User, UserId},
};

/// Recipes, categories and ingredients read at one point in time
///
/// Categories and ingredients are in column order, since their order fixes
/// the feature columns.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub recipes: Vec<Recipe>,
    pub categories: Vec<Category>,
    pub ingredients: Vec<Ingredient>,
}

/// Source of the recipe catalog the recommender works on
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Consistent copy of the whole catalog
    async fn snapshot(&self) -> AppResult<CatalogSnapshot>;

    /// Looks up a user and their favourites
    async fn user(&self, id: UserId) -> AppResult<Option<User>>;
}
