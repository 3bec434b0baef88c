// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    /// Identifier assigned by the caller, never generated by the database.
    pub id: i64,

    /// Short display name of the exercise.
    pub name: String,

    /// The prompt text shown to the student.
    pub statement: String,

    /// Reference source code attached to the exercise.
    pub source_code: String,
}

/// DTO for creating a new question. The caller supplies the identifier.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub id: i64,
    pub name: String,
    pub statement: String,
    pub source_code: String,
}
