use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Recipes
        .route(
            "/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route("/recipes/:id", get(handlers::get_recipe))
        .route("/recipes/:id/comments", get(handlers::get_recipe_comments))
        // Categories and ingredients
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/ingredients",
            get(handlers::list_ingredients).post(handlers::create_ingredient),
        )
        // Users
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/users/:id/favourites",
            get(handlers::list_favourites).post(handlers::add_favourite),
        )
        .route(
            "/users/:id/recommendations",
            get(handlers::get_recommendations),
        )
        // Activity
        .route(
            "/ratings",
            get(handlers::list_ratings).post(handlers::create_rating),
        )
        .route(
            "/comments",
            get(handlers::list_comments).post(handlers::create_comment),
        )
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
