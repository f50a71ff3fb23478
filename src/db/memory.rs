use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{
        activity::{MAX_COMMENT_LEN, MAX_SCORE, MIN_SCORE},
        recipe::{DEFAULT_DIFFICULTY, MAX_DESCRIPTION_LEN, MAX_DIFFICULTY, MAX_TITLE_LEN, MIN_DIFFICULTY},
        user::{MAX_BIO_LEN, MAX_NICKNAME_LEN},
        Category, CategoryId, Comment, CommentId, Ingredient, IngredientId, NewRecipe, Rating,
        RatingId, Recipe, RecipeId, RecipeStats, User, UserId,
    },
    services::catalog::{CatalogSnapshot, RecipeCatalog},
};

pub const MAX_CATEGORY_NAME_LEN: usize = 50;
pub const MAX_INGREDIENT_NAME_LEN: usize = 100;

/// In-memory store for the recipe catalog, users and their activity
///
/// Maps are keyed by id, so every listing comes out in id order. Ids are
/// handed out sequentially starting at 1.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    recipes: BTreeMap<RecipeId, Recipe>,
    categories: BTreeMap<CategoryId, Category>,
    ingredients: BTreeMap<IngredientId, Ingredient>,
    users: BTreeMap<UserId, User>,
    ratings: Vec<Rating>,
    comments: Vec<Comment>,
    last_id: u64,
}

impl StoreInner {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    fn require_user(&self, id: UserId) -> AppResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("User {} not found", id)))
        }
    }

    fn require_recipe(&self, id: RecipeId) -> AppResult<()> {
        if self.recipes.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Recipe {} not found", id)))
        }
    }
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // Categories

    pub async fn create_category(&self, name: String) -> AppResult<Category> {
        check_name("Category name", &name, MAX_CATEGORY_NAME_LEN)?;

        let mut inner = self.inner.write().await;
        let category = Category::new(CategoryId(inner.next_id()), name);
        inner.categories.insert(category.id, category.clone());
        Ok(category)
    }

    pub async fn list_categories(&self) -> Vec<Category> {
        self.inner.read().await.categories.values().cloned().collect()
    }

    // Ingredients

    /// Adds an ingredient; every replacement must already exist
    pub async fn create_ingredient(
        &self,
        name: String,
        replacements: Vec<IngredientId>,
    ) -> AppResult<Ingredient> {
        check_name("Ingredient name", &name, MAX_INGREDIENT_NAME_LEN)?;

        let mut inner = self.inner.write().await;
        if let Some(unknown) = replacements
            .iter()
            .find(|id| !inner.ingredients.contains_key(*id))
        {
            return Err(AppError::InvalidInput(format!(
                "Unknown replacement ingredient {}",
                unknown
            )));
        }

        let mut ingredient = Ingredient::new(IngredientId(inner.next_id()), name);
        for replacement in replacements {
            if !ingredient.replacements.contains(&replacement) {
                ingredient.replacements.push(replacement);
            }
        }
        inner.ingredients.insert(ingredient.id, ingredient.clone());
        Ok(ingredient)
    }

    pub async fn list_ingredients(&self) -> Vec<Ingredient> {
        self.inner.read().await.ingredients.values().cloned().collect()
    }

    // Users

    /// Registers a user; nicknames are unique
    pub async fn create_user(&self, nickname: String, bio: String) -> AppResult<User> {
        check_name("Nickname", &nickname, MAX_NICKNAME_LEN)?;
        if bio.chars().count() > MAX_BIO_LEN {
            return Err(AppError::InvalidInput(format!(
                "Bio must be at most {} characters",
                MAX_BIO_LEN
            )));
        }

        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.nickname == nickname) {
            return Err(AppError::InvalidInput(format!(
                "Nickname '{}' is already taken",
                nickname
            )));
        }

        let mut user = User::new(UserId(inner.next_id()), nickname);
        user.bio = bio;
        inner.users.insert(user.id, user.clone());

        tracing::debug!(user = %user.id, "User created");
        Ok(user)
    }

    pub async fn get_user(&self, id: UserId) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    pub async fn list_users(&self) -> Vec<User> {
        self.inner.read().await.users.values().cloned().collect()
    }

    /// Marks a recipe as one of the user's favourites
    pub async fn add_favourite(&self, user_id: UserId, recipe_id: RecipeId) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        inner.require_recipe(recipe_id)?;

        let user = inner
            .users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
        user.add_favourite(recipe_id);
        Ok(user.clone())
    }

    /// The user's favourite recipes that still exist
    pub async fn favourites(&self, user_id: UserId) -> AppResult<Vec<Recipe>> {
        let inner = self.inner.read().await;
        let user = inner
            .users
            .get(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        Ok(user
            .favourite_recipes
            .iter()
            .filter_map(|id| inner.recipes.get(id))
            .cloned()
            .collect())
    }

    // Recipes

    /// Validates and stores a new recipe
    pub async fn create_recipe(&self, new: NewRecipe) -> AppResult<Recipe> {
        check_name("Title", &new.title, MAX_TITLE_LEN)?;
        if new.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::InvalidInput(format!(
                "Description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }

        let difficulty = new.difficulty.unwrap_or(DEFAULT_DIFFICULTY);
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(AppError::InvalidInput(format!(
                "Difficulty must be between {} and {}",
                MIN_DIFFICULTY, MAX_DIFFICULTY
            )));
        }
        if new.time == Some(0) {
            return Err(AppError::InvalidInput(
                "Time must be at least 1 minute".to_string(),
            ));
        }

        let mut inner = self.inner.write().await;
        if let Some(user) = new.user {
            inner.require_user(user)?;
        }
        if let Some(unknown) = new
            .categories
            .iter()
            .find(|id| !inner.categories.contains_key(*id))
        {
            return Err(AppError::InvalidInput(format!("Unknown category {}", unknown)));
        }
        if let Some(unknown) = new
            .ingredients
            .iter()
            .find(|id| !inner.ingredients.contains_key(*id))
        {
            return Err(AppError::InvalidInput(format!(
                "Unknown ingredient {}",
                unknown
            )));
        }

        let mut recipe = Recipe::new(RecipeId(inner.next_id()), new.title)
            .with_difficulty(difficulty)
            .with_categories(dedup(new.categories))
            .with_ingredients(dedup(new.ingredients));
        recipe.description = new.description;
        recipe.time = new.time;
        recipe.user = new.user;

        inner.recipes.insert(recipe.id, recipe.clone());

        tracing::debug!(recipe = %recipe.id, title = %recipe.title, "Recipe created");
        Ok(recipe)
    }

    pub async fn get_recipe(&self, id: RecipeId) -> Option<Recipe> {
        self.inner.read().await.recipes.get(&id).cloned()
    }

    pub async fn list_recipes(&self) -> Vec<Recipe> {
        self.inner.read().await.recipes.values().cloned().collect()
    }

    /// Rating and comment figures for a recipe
    pub async fn recipe_stats(&self, id: RecipeId) -> AppResult<RecipeStats> {
        let inner = self.inner.read().await;
        inner.require_recipe(id)?;
        Ok(RecipeStats::for_recipe(id, &inner.ratings, &inner.comments))
    }

    // Ratings and comments

    pub async fn add_rating(&self, user: UserId, recipe: RecipeId, score: u8) -> AppResult<Rating> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(AppError::InvalidInput(format!(
                "Score must be between {} and {}",
                MIN_SCORE, MAX_SCORE
            )));
        }

        let mut inner = self.inner.write().await;
        inner.require_user(user)?;
        inner.require_recipe(recipe)?;

        let rating = Rating {
            id: RatingId(inner.next_id()),
            score,
            user,
            recipe,
        };
        inner.ratings.push(rating.clone());
        Ok(rating)
    }

    pub async fn list_ratings(&self) -> Vec<Rating> {
        self.inner.read().await.ratings.clone()
    }

    pub async fn add_comment(&self, user: UserId, recipe: RecipeId, text: String) -> AppResult<Comment> {
        if text.trim().is_empty() {
            return Err(AppError::InvalidInput("Comment must not be empty".to_string()));
        }
        if text.chars().count() > MAX_COMMENT_LEN {
            return Err(AppError::InvalidInput(format!(
                "Comment must be at most {} characters",
                MAX_COMMENT_LEN
            )));
        }

        let mut inner = self.inner.write().await;
        inner.require_user(user)?;
        inner.require_recipe(recipe)?;

        let comment = Comment {
            id: CommentId(inner.next_id()),
            text,
            creation_date: Utc::now().date_naive(),
            user,
            recipe,
        };
        inner.comments.push(comment.clone());
        Ok(comment)
    }

    pub async fn list_comments(&self) -> Vec<Comment> {
        self.inner.read().await.comments.clone()
    }

    pub async fn comments_for(&self, recipe: RecipeId) -> AppResult<Vec<Comment>> {
        let inner = self.inner.read().await;
        inner.require_recipe(recipe)?;
        Ok(inner
            .comments
            .iter()
            .filter(|c| c.recipe == recipe)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl RecipeCatalog for MemoryStore {
    async fn snapshot(&self) -> AppResult<CatalogSnapshot> {
        let inner = self.inner.read().await;
        Ok(CatalogSnapshot {
            recipes: inner.recipes.values().cloned().collect(),
            categories: inner.categories.values().cloned().collect(),
            ingredients: inner.ingredients.values().cloned().collect(),
        })
    }

    async fn user(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.get_user(id).await)
    }
}

fn check_name(field: &str, value: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
    }
    if value.chars().count() > max_len {
        return Err(AppError::InvalidInput(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(())
}

fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}
