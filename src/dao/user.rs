// src/dao/user.rs

use sqlx::SqlitePool;

use crate::{error::AppError, models::user::{InsertUserForm, User}};

/// Inserts one user row inside its own transaction.
///
/// The commit happens before this function returns, so callers observe an
/// all-or-nothing write. On any failure the transaction handle is dropped
/// and the write rolls back; no session is left open.
pub async fn insert(pool: &SqlitePool, form: InsertUserForm) -> Result<User, AppError> {
    let mut tx = pool.begin().await?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, password, email)
        VALUES ($1, $2, $3)
        RETURNING id, name, password, email
        "#,
    )
    .bind(form.name)
    .bind(form.password)
    .bind(form.email)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert user: {:?}", e);
        AppError::from(e)
    })?;

    tx.commit().await?;

    Ok(user)
}
