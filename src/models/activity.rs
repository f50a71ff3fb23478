use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CommentId, RatingId, RecipeId, UserId};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;
pub const MAX_COMMENT_LEN: usize = 300;

/// A user's 1-5 score for a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub id: RatingId,
    pub score: u8,
    pub user: UserId,
    pub recipe: RecipeId,
}

/// A user's comment on a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub creation_date: NaiveDate,
    pub user: UserId,
    pub recipe: RecipeId,
}

/// Aggregated rating and comment figures for a single recipe
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipeStats {
    /// Mean score, `None` until the recipe has been rated
    pub rating: Option<f64>,
    pub number_of_ratings: usize,
    pub number_of_comments: usize,
}

impl RecipeStats {
    /// Computes the figures for `recipe` from all known ratings and comments
    pub fn for_recipe(recipe: RecipeId, ratings: &[Rating], comments: &[Comment]) -> Self {
        let scores: Vec<f64> = ratings
            .iter()
            .filter(|r| r.recipe == recipe)
            .map(|r| f64::from(r.score))
            .collect();

        let rating = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        };

        Self {
            rating,
            number_of_ratings: scores.len(),
            number_of_comments: comments.iter().filter(|c| c.recipe == recipe).count(),
        }
    }
}
