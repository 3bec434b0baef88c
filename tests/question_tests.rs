// tests/question_tests.rs

use cadastro_backend::{routes, state::AppState};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn spawn_app() -> (String, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    let state = AppState { pool: pool.clone() };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, pool)
}

#[tokio::test]
async fn create_and_fetch_question_roundtrip() {
    // Arrange
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();

    // Act: create with a caller-assigned id
    let create_resp = client
        .post(&format!("{}/api/questions", address))
        .json(&serde_json::json!({
            "id": 42,
            "name": "Fibonacci",
            "statement": "Write a program that prints the first N Fibonacci numbers.",
            "source_code": "fn main() {}"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(create_resp.status().as_u16(), 201);

    // Assert: every field reads back exactly as written
    let fetched: serde_json::Value = client
        .get(&format!("{}/api/questions/42", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse question json");

    assert_eq!(fetched["id"], 42);
    assert_eq!(fetched["name"], "Fibonacci");
    assert_eq!(
        fetched["statement"],
        "Write a program that prints the first N Fibonacci numbers."
    );
    assert_eq!(fetched["source_code"], "fn main() {}");
}

#[tokio::test]
async fn get_unknown_question_is_404() {
    // Arrange
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/api/questions/9999", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn duplicate_question_id_is_conflict() {
    // Arrange
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let payload = serde_json::json!({
        "id": 7,
        "name": "Sorting",
        "statement": "Sort the input.",
        "source_code": ""
    });

    // Act
    let first = client
        .post(&format!("{}/api/questions", address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(first.status().as_u16(), 201);

    let second = client
        .post(&format!("{}/api/questions", address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    // Assert: the id is the identity of a question
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
async fn list_questions_ordered_by_id() {
    // Arrange
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();

    // Act: insert out of order
    for (id, name) in [(2, "Second"), (1, "First")] {
        let response = client
            .post(&format!("{}/api/questions", address))
            .json(&serde_json::json!({
                "id": id,
                "name": name,
                "statement": "s",
                "source_code": "c"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status().as_u16(), 201);
    }

    let listed: Vec<serde_json::Value> = client
        .get(&format!("{}/api/questions", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse list json");

    // Assert
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], 1);
    assert_eq!(listed[1]["id"], 2);
}
