use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use recipes_api::api::{create_router, AppState};

fn create_test_server() -> TestServer {
    let state = AppState::default();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

async fn create(server: &TestServer, path: &str, body: Value) -> Value {
    let response = server.post(path).json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

fn id(value: &Value) -> u64 {
    value["id"].as_u64().unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let request_id = "0b9c7b1e-6a43-4b8e-9a6f-3f2d1c0e5a77";

    let response = server
        .get("/health")
        .add_header("x-request-id", request_id)
        .await;

    assert_eq!(response.header("x-request-id"), request_id);
}

#[tokio::test]
async fn test_create_and_get_recipe() {
    let server = create_test_server();

    let dessert = create(&server, "/categories", json!({ "name": "dessert" })).await;
    let flour = create(&server, "/ingredients", json!({ "name": "flour" })).await;

    let recipe = create(
        &server,
        "/recipes",
        json!({
            "title": "Shortbread",
            "time": 40,
            "categories": [id(&dessert)],
            "ingredients": [id(&flour)]
        }),
    )
    .await;
    assert_eq!(recipe["title"], "Shortbread");
    assert_eq!(recipe["difficulty"], 3);

    let response = server.get("/recipes").await;
    response.assert_status_ok();
    let recipes: Vec<Value> = response.json();
    assert_eq!(recipes.len(), 1);

    let response = server.get(&format!("/recipes/{}", id(&recipe))).await;
    response.assert_status_ok();
    let detail: Value = response.json();
    assert_eq!(detail["title"], "Shortbread");
    assert_eq!(detail["rating"], Value::Null);
    assert_eq!(detail["number_of_ratings"], 0);
}

#[tokio::test]
async fn test_get_missing_recipe() {
    let server = create_test_server();
    let response = server.get("/recipes/999").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_create_recipe_rejects_bad_difficulty() {
    let server = create_test_server();
    let flour = create(&server, "/ingredients", json!({ "name": "flour" })).await;

    let response = server
        .post("/recipes")
        .json(&json!({
            "title": "Impossible bread",
            "difficulty": 9,
            "ingredients": [id(&flour)]
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ratings_and_comments() {
    let server = create_test_server();
    let flour = create(&server, "/ingredients", json!({ "name": "flour" })).await;
    let user = create(&server, "/users", json!({ "nickname": "baker" })).await;
    let recipe = create(
        &server,
        "/recipes",
        json!({ "title": "Bread", "ingredients": [id(&flour)] }),
    )
    .await;

    for score in [5, 4] {
        create(
            &server,
            "/ratings",
            json!({ "user": id(&user), "recipe": id(&recipe), "score": score }),
        )
        .await;
    }
    create(
        &server,
        "/comments",
        json!({ "user": id(&user), "recipe": id(&recipe), "text": "Crusty!" }),
    )
    .await;

    let detail: Value = server.get(&format!("/recipes/{}", id(&recipe))).await.json();
    assert_eq!(detail["rating"], 4.5);
    assert_eq!(detail["number_of_ratings"], 2);
    assert_eq!(detail["number_of_comments"], 1);

    let comments: Vec<Value> = server
        .get(&format!("/recipes/{}/comments", id(&recipe)))
        .await
        .json();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "Crusty!");

    let response = server
        .post("/ratings")
        .json(&json!({ "user": id(&user), "recipe": id(&recipe), "score": 6 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_nickname() {
    let server = create_test_server();
    create(&server, "/users", json!({ "nickname": "baker" })).await;

    let response = server
        .post("/users")
        .json(&json!({ "nickname": "baker" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommendation_flow() {
    let server = create_test_server();

    let dessert = create(&server, "/categories", json!({ "name": "dessert" })).await;
    let soup = create(&server, "/categories", json!({ "name": "soup" })).await;
    let main = create(&server, "/categories", json!({ "name": "main" })).await;

    let mut ingredient = std::collections::HashMap::new();
    for name in ["flour", "sugar", "egg", "beef", "onion", "rice", "fish"] {
        let created = create(&server, "/ingredients", json!({ "name": name })).await;
        ingredient.insert(name, id(&created));
    }

    let a = create(
        &server,
        "/recipes",
        json!({
            "title": "A", "difficulty": 2, "time": 30,
            "categories": [id(&dessert)],
            "ingredients": [ingredient["flour"], ingredient["sugar"]]
        }),
    )
    .await;
    let b = create(
        &server,
        "/recipes",
        json!({
            "title": "B", "difficulty": 2, "time": 30,
            "categories": [id(&dessert)],
            "ingredients": [ingredient["flour"], ingredient["sugar"], ingredient["egg"]]
        }),
    )
    .await;
    for (title, time, category, ingredients) in [
        ("C", 90, id(&soup), [ingredient["beef"], ingredient["onion"]]),
        ("D", 60, id(&main), [ingredient["rice"], ingredient["fish"]]),
        ("E", 120, id(&main), [ingredient["beef"], ingredient["rice"]]),
    ] {
        create(
            &server,
            "/recipes",
            json!({
                "title": title, "difficulty": 5, "time": time,
                "categories": [category],
                "ingredients": ingredients
            }),
        )
        .await;
    }

    let user = create(&server, "/users", json!({ "nickname": "sweet-tooth" })).await;

    // No favourites yet
    let response = server
        .get(&format!("/users/{}/recommendations", id(&user)))
        .await;
    response.assert_status_ok();
    let recommended: Vec<Value> = response.json();
    assert!(recommended.is_empty());

    let response = server
        .post(&format!("/users/{}/favourites", id(&user)))
        .json(&json!({ "recipe_id": id(&a) }))
        .await;
    response.assert_status_ok();

    let favourites: Vec<Value> = server
        .get(&format!("/users/{}/favourites", id(&user)))
        .await
        .json();
    assert_eq!(favourites.len(), 1);

    let response = server
        .get(&format!("/users/{}/recommendations", id(&user)))
        .await;
    response.assert_status_ok();
    let recommended: Vec<Value> = response.json();
    let ids: Vec<u64> = recommended.iter().map(id).collect();

    assert!(ids.contains(&id(&b)));
    assert!(!ids.contains(&id(&a)));
    assert!(ids.len() <= 2);
}

#[tokio::test]
async fn test_recommendations_for_unknown_user() {
    let server = create_test_server();
    let response = server.get("/users/42/recommendations").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
