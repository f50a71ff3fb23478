use thiserror::Error;

use crate::models::{CategoryId, IngredientId, RecipeId};

/// Errors raised when the recommender receives inconsistent input
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecommenderError {
    #[error("Recipe {recipe} has difficulty {difficulty}, expected a value between 1 and 5")]
    DifficultyOutOfRange { recipe: RecipeId, difficulty: u8 },

    #[error("Recipe {0} has a preparation time of zero minutes")]
    InvalidTime(RecipeId),

    #[error("Recipe {recipe} is tagged with category {category}, which is not in the category list")]
    UnknownCategory {
        recipe: RecipeId,
        category: CategoryId,
    },

    #[error("Recipe {recipe} uses ingredient {ingredient}, which is not in the ingredient list")]
    UnknownIngredient {
        recipe: RecipeId,
        ingredient: IngredientId,
    },

    #[error("Recipe {0} appears more than once in the catalog")]
    DuplicateRecipe(RecipeId),

    #[error("Category {0} appears more than once in the category list")]
    DuplicateCategory(CategoryId),

    #[error("Ingredient {0} appears more than once in the ingredient list")]
    DuplicateIngredient(IngredientId),

    #[error("Neighbor count must be at least 2, got {0}")]
    InvalidNeighbors(usize),

    #[error("Feature dimension mismatch: expected {expected} columns, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
