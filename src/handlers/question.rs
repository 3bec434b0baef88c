// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{dao, error::AppError, models::question::CreateQuestionRequest};

/// Creates a new question with a caller-assigned identifier.
/// Returns 201 Created and the stored row; 409 if the id is taken.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let question = dao::question::insert(&pool, payload).await?;

    Ok((StatusCode::CREATED, Json(question)))
}

/// Fetches a single question by id. 404 when absent.
pub async fn get_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let question = dao::question::find(&pool, id).await?;

    Ok(Json(question))
}

/// Lists all questions, ordered by id.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let questions = dao::question::list(&pool).await?;

    Ok(Json(questions))
}
