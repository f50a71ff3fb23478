use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{CategoryId, IngredientId, RecipeId, UserId};

/// Lowest allowed recipe difficulty
pub const MIN_DIFFICULTY: u8 = 1;
/// Highest allowed recipe difficulty
pub const MAX_DIFFICULTY: u8 = 5;
/// Difficulty assigned when a new recipe does not specify one
pub const DEFAULT_DIFFICULTY: u8 = 3;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// A recipe shared by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Difficulty on a 1-5 scale
    pub difficulty: u8,
    /// Preparation time in minutes
    pub time: Option<u32>,
    /// Author of the recipe, if the account still exists
    pub user: Option<UserId>,
    pub categories: Vec<CategoryId>,
    pub ingredients: Vec<IngredientId>,
    pub creation_date: NaiveDate,
}

impl Recipe {
    /// Creates a recipe with default difficulty and no tags
    pub fn new(id: RecipeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            difficulty: DEFAULT_DIFFICULTY,
            time: None,
            user: None,
            categories: Vec::new(),
            ingredients: Vec::new(),
            creation_date: Utc::now().date_naive(),
        }
    }

    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time = Some(minutes);
        self
    }

    pub fn with_user(mut self, user: UserId) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_ingredients(mut self, ingredients: impl IntoIterator<Item = IngredientId>) -> Self {
        self.ingredients = ingredients.into_iter().collect();
        self
    }
}

/// Payload for creating a recipe; the store assigns id and creation date
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Option<u8>,
    #[serde(default)]
    pub time: Option<u32>,
    #[serde(default)]
    pub user: Option<UserId>,
    #[serde(default)]
    pub categories: Vec<CategoryId>,
    pub ingredients: Vec<IngredientId>,
}

/// A recipe category such as "dessert" or "soup"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An ingredient, optionally with ingredients that can replace it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    #[serde(default)]
    pub replacements: Vec<IngredientId>,
}

impl Ingredient {
    pub fn new(id: IngredientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            replacements: Vec::new(),
        }
    }
}
