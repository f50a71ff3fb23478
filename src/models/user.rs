use serde::{Deserialize, Serialize};

use super::{RecipeId, UserId};

pub const MAX_NICKNAME_LEN: usize = 100;
pub const MAX_BIO_LEN: usize = 1000;

/// A user account with its favourite recipes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub nickname: String,
    #[serde(default)]
    pub bio: String,
    /// Recipes the user marked as favourite, in the order they were added
    pub favourite_recipes: Vec<RecipeId>,
}

impl User {
    /// Creates a user without favourites
    pub fn new(id: UserId, nickname: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            bio: String::new(),
            favourite_recipes: Vec::new(),
        }
    }

    /// Marks a recipe as favourite, ignoring repeats
    pub fn add_favourite(&mut self, recipe_id: RecipeId) {
        if !self.favourite_recipes.contains(&recipe_id) {
            self.favourite_recipes.push(recipe_id);
        }
    }

    pub fn is_favourite(&self, recipe_id: RecipeId) -> bool {
        self.favourite_recipes.contains(&recipe_id)
    }
}
