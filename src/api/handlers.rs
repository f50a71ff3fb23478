use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{
        Category, Comment, Ingredient, IngredientId, NewRecipe, Rating, Recipe, RecipeId,
        RecipeStats, User, UserId,
    },
    services::recommendations,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
    #[serde(default)]
    pub replacements: Vec<IngredientId>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub nickname: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Deserialize)]
pub struct AddFavouriteRequest {
    pub recipe_id: RecipeId,
}

#[derive(Debug, Deserialize)]
pub struct CreateRatingRequest {
    pub user: UserId,
    pub recipe: RecipeId,
    pub score: u8,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub user: UserId,
    pub recipe: RecipeId,
    pub text: String,
}

/// A recipe together with its rating and comment figures
#[derive(Debug, Serialize)]
pub struct RecipeDetailResponse {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(flatten)]
    pub stats: RecipeStats,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json(state.store.list_recipes().await)
}

pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<NewRecipe>,
) -> AppResult<(StatusCode, Json<Recipe>)> {
    let recipe = state.store.create_recipe(request).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<RecipeDetailResponse>> {
    let id = RecipeId(id);
    let recipe = state
        .store
        .get_recipe(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Recipe {} not found", id)))?;
    let stats = state.store.recipe_stats(id).await?;

    Ok(Json(RecipeDetailResponse { recipe, stats }))
}

pub async fn get_recipe_comments(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Vec<Comment>>> {
    Ok(Json(state.store.comments_for(RecipeId(id)).await?))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.store.list_categories().await)
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = state.store.create_category(request.name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn list_ingredients(State(state): State<AppState>) -> Json<Vec<Ingredient>> {
    Json(state.store.list_ingredients().await)
}

pub async fn create_ingredient(
    State(state): State<AppState>,
    Json(request): Json<CreateIngredientRequest>,
) -> AppResult<(StatusCode, Json<Ingredient>)> {
    let ingredient = state
        .store
        .create_ingredient(request.name, request.replacements)
        .await?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.list_users().await)
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.store.create_user(request.nickname, request.bio).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list_favourites(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Vec<Recipe>>> {
    Ok(Json(state.store.favourites(UserId(id)).await?))
}

pub async fn add_favourite(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<AddFavouriteRequest>,
) -> AppResult<Json<User>> {
    let user = state.store.add_favourite(UserId(id), request.recipe_id).await?;
    Ok(Json(user))
}

/// Recipes similar to the user's favourites
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> AppResult<Json<Vec<Recipe>>> {
    let user_id = UserId(id);
    tracing::info!(
        request_id = %request_id,
        user = %user_id,
        "Processing recommendation request"
    );

    let recipes =
        recommendations::get_recommendations(&*state.store, &state.recommender, user_id)
            .await?;

    tracing::info!(
        request_id = %request_id,
        recommended = recipes.len(),
        "Recommendation completed"
    );

    Ok(Json(recipes))
}

pub async fn create_rating(
    State(state): State<AppState>,
    Json(request): Json<CreateRatingRequest>,
) -> AppResult<(StatusCode, Json<Rating>)> {
    let rating = state
        .store
        .add_rating(request.user, request.recipe, request.score)
        .await?;
    Ok((StatusCode::CREATED, Json(rating)))
}

pub async fn list_ratings(State(state): State<AppState>) -> Json<Vec<Rating>> {
    Json(state.store.list_ratings().await)
}

pub async fn create_comment(
    State(state): State<AppState>,
    Json(request): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let comment = state
        .store
        .add_comment(request.user, request.recipe, request.text)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn list_comments(State(state): State<AppState>) -> Json<Vec<Comment>> {
    Json(state.store.list_comments().await)
}
