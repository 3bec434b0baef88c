// src/dao/question.rs

use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, Question},
};

/// Inserts one question row inside its own transaction.
/// The identifier comes from the caller; a duplicate maps to 409.
pub async fn insert(
    pool: &SqlitePool,
    payload: CreateQuestionRequest,
) -> Result<Question, AppError> {
    let mut tx = pool.begin().await?;

    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (id, name, statement, source_code)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, statement, source_code
        "#,
    )
    .bind(payload.id)
    .bind(payload.name)
    .bind(payload.statement)
    .bind(payload.source_code)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        if e.to_string().contains("UNIQUE constraint") {
            AppError::Conflict(format!("Question '{}' already exists", payload.id))
        } else {
            tracing::error!("Failed to insert question: {:?}", e);
            AppError::from(e)
        }
    })?;

    tx.commit().await?;

    Ok(question)
}

/// Fetches a single question by its identifier.
pub async fn find(pool: &SqlitePool, id: i64) -> Result<Question, AppError> {
    let question = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, name, statement, source_code
        FROM questions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    question.ok_or(AppError::NotFound("Question not found".to_string()))
}

/// Lists all questions, ordered by identifier.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, name, statement, source_code
        FROM questions
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list questions: {:?}", e);
        AppError::from(e)
    })?;

    Ok(questions)
}
