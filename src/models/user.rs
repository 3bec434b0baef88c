// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'users' table in the database.
///
/// The legacy registration form submits unconstrained strings, so every
/// text column is nullable: an absent parameter is stored as NULL.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    #[serde(rename = "nome")]
    pub name: Option<String>,

    /// Stored exactly as submitted. The legacy flow has no hashing.
    #[serde(rename = "senha")]
    pub password: Option<String>,

    #[serde(rename = "email")]
    pub email: Option<String>,
}

/// Form parameters accepted by the legacy registration endpoint.
///
/// Field names on the wire are the original Portuguese parameter names.
/// None of them is required; no format is enforced.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertUserForm {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
    #[serde(rename = "email")]
    pub email: Option<String>,
}
