//! Movie entity model and DTOs.

use movieshelf_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movie` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub rating: f64,
    pub year: i32,
    /// URL or path of the poster image.
    pub image: String,
    pub genre: String,
    pub description: String,
}

/// DTO for creating a new movie.
///
/// Every field is required. An `id` key in the request body is not part of
/// this struct and is dropped during deserialization, so storage always
/// assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub rating: f64,
    pub year: i32,
    pub image: String,
    pub genre: String,
    pub description: String,
}

/// DTO for updating an existing movie. All fields are optional.
///
/// Absent and `null` fields both deserialize to `None`; the repository keeps
/// the stored value for those columns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub rating: Option<f64>,
    pub year: Option<i32>,
    pub image: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
}
