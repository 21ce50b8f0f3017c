//! Repository for the `movie` table.

use movieshelf_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, rating, year, image, genre, description";

/// Provides CRUD operations for movies.
///
/// Every method is one statement on a connection borrowed from the pool for
/// the duration of the call; it is returned to the pool when the call
/// finishes, on error paths included.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its assigned id.
    pub async fn create(pool: &DbPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (title, rating, year, image, genre, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.rating)
            .bind(input.year)
            .bind(&input.image)
            .bind(&input.genre)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies in rowid order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Runs as a single statement so concurrent writers to the same row are
    /// serialized by SQLite and the last commit wins. Returns `None` if no row
    /// with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET
                title = COALESCE(?2, title),
                rating = COALESCE(?3, rating),
                year = COALESCE(?4, year),
                image = COALESCE(?5, image),
                genre = COALESCE(?6, genre),
                description = COALESCE(?7, description)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.rating)
            .bind(input.year)
            .bind(&input.image)
            .bind(&input.genre)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Count the rows in the `movie` table.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movie")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Permanently delete a movie by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
