use spree_core::movie::Movie;

use crate::CatalogError;

/// A remote movie catalog that can list trending and genre-filtered movies.
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch this week's trending movies.
    async fn fetch_trending(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Fetch movies carrying the named genre. Fails with `InvalidGenre`
    /// before any network call when the name is not in the genre table.
    async fn fetch_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>, CatalogError>;
}
