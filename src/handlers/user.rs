// src/handlers/user.rs

use axum::{Form, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{dao, error::AppError, models::user::InsertUserForm};

/// Registers a user from the legacy form.
///
/// Accepts any HTTP verb; parameters come from the query string on GET/HEAD
/// and from a urlencoded body otherwise, matching the original generic
/// `service` dispatch. Missing parameters are not an error and are stored
/// as NULL.
///
/// On success the body is the fixed message the original emitted. A failed
/// insert no longer falls through to a generic container page: the error
/// maps to a distinct status code.
pub async fn insert_user(
    State(pool): State<SqlitePool>,
    Form(form): Form<InsertUserForm>,
) -> Result<impl IntoResponse, AppError> {
    let user = dao::user::insert(&pool, form).await?;

    tracing::info!("Registered user {}", user.id);

    Ok("Cadastro realizado com sucesso!")
}
