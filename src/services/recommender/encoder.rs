use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{
    recipe::{MAX_DIFFICULTY, MIN_DIFFICULTY},
    Category, Ingredient, Recipe, RecipeId,
};

use super::{FeatureMatrix, RecommenderError};

pub const DIFFICULTY_COLUMN: usize = 0;
pub const TIME_COLUMN: usize = 1;
pub const USER_COLUMN: usize = 2;
/// Number of leading scalar columns before the one-hot blocks
pub const FIXED_COLUMNS: usize = 3;

/// Value used for a missing preparation time or author
pub const MISSING_VALUE: f64 = 0.0;

/// Feature matrix of a recipe collection plus the row -> recipe mapping
#[derive(Debug, Clone)]
pub struct EncodedCatalog {
    pub features: FeatureMatrix,
    row_ids: Vec<RecipeId>,
    rows_by_id: HashMap<RecipeId, usize>,
}

impl EncodedCatalog {
    /// Recipe stored at the given row
    pub fn recipe_at(&self, row: usize) -> RecipeId {
        self.row_ids[row]
    }

    /// Row holding the given recipe, if it is part of the catalog
    pub fn row_of(&self, id: RecipeId) -> Option<usize> {
        self.rows_by_id.get(&id).copied()
    }

    #[cfg(test)]
    fn row_ids(&self) -> &[RecipeId] {
        &self.row_ids
    }
}

/// Encodes recipes into one feature row each
///
/// Row layout is `[difficulty, time, user, categories.., ingredients..]`.
/// The author id is kept as a raw number, so recipes by the same author end
/// up close to each other. Ids are exact up to 2^53; larger ids round to the
/// nearest representable `f64`, which only blurs authors that far apart. Category and ingredient columns are one-hot and
/// follow the order of the `categories` and `ingredients` lists, never the
/// order of the recipe's own tags. A missing time or author encodes as
/// [`MISSING_VALUE`].
pub fn encode(
    recipes: &[Recipe],
    categories: &[Category],
    ingredients: &[Ingredient],
) -> Result<EncodedCatalog, RecommenderError> {
    let category_columns = column_positions(
        categories.iter().map(|c| c.id),
        FIXED_COLUMNS,
        RecommenderError::DuplicateCategory,
    )?;
    let ingredient_offset = FIXED_COLUMNS + categories.len();
    let ingredient_columns = column_positions(
        ingredients.iter().map(|i| i.id),
        ingredient_offset,
        RecommenderError::DuplicateIngredient,
    )?;

    let cols = ingredient_offset + ingredients.len();
    let mut features = FeatureMatrix::zeros(recipes.len(), cols);
    let mut row_ids = Vec::with_capacity(recipes.len());
    let mut rows_by_id = HashMap::with_capacity(recipes.len());

    for (row, recipe) in recipes.iter().enumerate() {
        validate(recipe)?;

        if rows_by_id.insert(recipe.id, row).is_some() {
            return Err(RecommenderError::DuplicateRecipe(recipe.id));
        }
        row_ids.push(recipe.id);

        features.set(row, DIFFICULTY_COLUMN, f64::from(recipe.difficulty));
        features.set(
            row,
            TIME_COLUMN,
            recipe.time.map_or(MISSING_VALUE, f64::from),
        );
        features.set(
            row,
            USER_COLUMN,
            recipe.user.map_or(MISSING_VALUE, |user| user.0 as f64),
        );

        for category in &recipe.categories {
            let col = category_columns.get(category).ok_or(
                RecommenderError::UnknownCategory {
                    recipe: recipe.id,
                    category: *category,
                },
            )?;
            features.set(row, *col, 1.0);
        }

        for ingredient in &recipe.ingredients {
            let col = ingredient_columns.get(ingredient).ok_or(
                RecommenderError::UnknownIngredient {
                    recipe: recipe.id,
                    ingredient: *ingredient,
                },
            )?;
            features.set(row, *col, 1.0);
        }
    }

    tracing::debug!(
        recipes = recipes.len(),
        categories = categories.len(),
        ingredients = ingredients.len(),
        columns = cols,
        "Encoded recipe features"
    );

    Ok(EncodedCatalog {
        features,
        row_ids,
        rows_by_id,
    })
}

fn validate(recipe: &Recipe) -> Result<(), RecommenderError> {
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&recipe.difficulty) {
        return Err(RecommenderError::DifficultyOutOfRange {
            recipe: recipe.id,
            difficulty: recipe.difficulty,
        });
    }
    if recipe.time == Some(0) {
        return Err(RecommenderError::InvalidTime(recipe.id));
    }
    Ok(())
}

/// Maps each universe member to its column, starting at `offset`
fn column_positions<K, F>(
    ids: impl Iterator<Item = K>,
    offset: usize,
    duplicate: F,
) -> Result<HashMap<K, usize>, RecommenderError>
where
    K: Eq + Hash + Copy,
    F: Fn(K) -> RecommenderError,
{
    let mut positions = HashMap::new();
    for (i, id) in ids.enumerate() {
        if positions.insert(id, offset + i).is_some() {
            return Err(duplicate(id));
        }
    }
    Ok(positions)
}
