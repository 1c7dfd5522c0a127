//! Persisted watchlist.
//!
//! The whole list is serialized as one JSON array under a single key, and
//! every mutation rewrites the full value. Entries are deduplicated by
//! movie id.

use sqlx::SqlitePool;
use tracing::warn;

use spree_core::movie::Movie;

const WATCHLIST_KEY: &str = "watchlist_movies";

#[derive(Clone)]
pub struct WatchlistStore {
    pool: SqlitePool,
}

impl WatchlistStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The saved movies, in insertion order. A missing key or an
    /// undecodable stored value reads as an empty list.
    pub async fn list(&self) -> Result<Vec<Movie>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_store WHERE key = ?")
            .bind(WATCHLIST_KEY)
            .fetch_optional(&self.pool)
            .await?;

        let Some((raw,)) = row else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(movies) => Ok(movies),
            Err(e) => {
                warn!(error = %e, "stored watchlist did not decode, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Append a movie unless one with the same id is already saved.
    pub async fn add(&self, movie: &Movie) -> Result<(), sqlx::Error> {
        let mut current = self.list().await?;
        if current.iter().any(|m| m.id == movie.id) {
            return Ok(());
        }
        current.push(movie.clone());
        self.save(&current).await
    }

    /// Remove every entry with the movie's id. Absent ids are a no-op.
    pub async fn remove(&self, movie: &Movie) -> Result<(), sqlx::Error> {
        let mut current = self.list().await?;
        current.retain(|m| m.id != movie.id);
        self.save(&current).await
    }

    async fn save(&self, movies: &[Movie]) -> Result<(), sqlx::Error> {
        let encoded =
            serde_json::to_string(movies).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(WATCHLIST_KEY)
        .bind(encoded)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
