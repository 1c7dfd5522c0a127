//! TMDB (The Movie Database) catalog client.
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs

use serde::Deserialize;
use tracing::debug;

use spree_core::genres;
use spree_core::movie::Movie;

use crate::provider::CatalogProvider;
use crate::CatalogError;

const BASE_URL: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Envelope shape shared by the trending and discover endpoints.
#[derive(Debug, Deserialize)]
struct MovieListResponse {
    results: Vec<Movie>,
}

pub struct TmdbClient {
    api_key: String,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    async fn get_movie_list(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Movie>, CatalogError> {
        let mut all_params = vec![("api_key", self.api_key.as_str())];
        all_params.extend_from_slice(params);

        let raw = format!("{BASE_URL}{path}");
        let url = reqwest::Url::parse(&raw)
            .map_err(|e| CatalogError::InvalidUrl(format!("{raw}: {e}")))?;
        debug!(url = %url, "TMDB request");

        let resp = self
            .client
            .get(url)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CatalogError::Network(format!(
                "TMDB returned {}",
                resp.status()
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        if body.is_empty() {
            return Err(CatalogError::NoData);
        }

        decode_movie_list(&body)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn fetch_trending(&self) -> Result<Vec<Movie>, CatalogError> {
        self.get_movie_list("/trending/movie/week", &[]).await
    }

    async fn fetch_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>, CatalogError> {
        let code = genres::code_for_name(genre_name)
            .ok_or_else(|| CatalogError::InvalidGenre(genre_name.to_string()))?;
        let code = code.to_string();
        self.get_movie_list("/discover/movie", &[("with_genres", code.as_str())])
            .await
    }
}

fn decode_movie_list(body: &[u8]) -> Result<Vec<Movie>, CatalogError> {
    let decoded: MovieListResponse =
        serde_json::from_slice(body).map_err(|e| CatalogError::Decode(e.to_string()))?;
    Ok(decoded.results)
}

/// Full poster asset URL for a movie's `poster_path` (which starts with `/`).
pub fn poster_url(poster_path: &str) -> String {
    format!("{IMAGE_BASE}/w500{poster_path}")
}
