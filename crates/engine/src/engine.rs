//! Fetch -> filter -> random-pick orchestration.

use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use tokio::sync::broadcast;
use tracing::{info, warn};

use spree_catalog::provider::CatalogProvider;
use spree_catalog::{tmdb, CatalogError};
use spree_core::genres;
use spree_core::movie::Movie;

use crate::filter::{apply_filters, FilterCriteria};
use crate::state::{EngineEvent, EngineState};

/// Follow-up fetch attempts after the first network failure.
const MAX_RETRIES: u32 = 1;
/// Pause between fetch attempts.
const RETRY_DELAY: Duration = Duration::from_millis(250);
/// Bound on redraws when shuffling away from the current selection.
const MAX_SHUFFLE_DRAWS: u32 = 16;
/// Event channel capacity; slow observers drop events rather than block.
const EVENT_CAPACITY: usize = 64;

/// Owns the candidate set, the current selection, and the active filter
/// criteria. All mutation goes through `&mut self`, so a single owner task
/// drives the whole fetch/select cycle and overlapping fetches cannot race.
pub struct SelectionEngine {
    provider: Arc<dyn CatalogProvider>,
    movies: Vec<Movie>,
    current: Option<Movie>,
    filters: FilterCriteria,
    state: EngineState,
    events: broadcast::Sender<EngineEvent>,
}

impl SelectionEngine {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            provider,
            movies: Vec::new(),
            current: None,
            filters: FilterCriteria::default(),
            state: EngineState::Idle,
            events,
        }
    }

    /// Subscribe to selection events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn current_movie(&self) -> Option<&Movie> {
        self.current.as_ref()
    }

    /// Fetch with the active criteria (none by default) and pick a movie.
    pub async fn load_initial(&mut self) -> Result<(), CatalogError> {
        self.refresh().await
    }

    /// Replace the active criteria and re-fetch. The previous candidate set
    /// is always discarded, even when the criteria are unchanged.
    pub async fn set_filters(
        &mut self,
        genre: Option<String>,
        min_rating: Option<f64>,
    ) -> Result<(), CatalogError> {
        self.filters = FilterCriteria::new(genre, min_rating);
        info!(
            genre = ?self.filters.genre,
            min_rating = ?self.filters.min_rating,
            "filters updated"
        );
        self.refresh().await
    }

    /// Pick a different movie from the already-fetched candidates. No
    /// network. With two or more candidates the draw is repeated (bounded)
    /// until the pick differs from the current selection; with one the
    /// selection settles on it; with none the selection is left alone.
    pub fn shuffle(&mut self) {
        let mut filtered = apply_filters(&self.movies, &self.filters);
        match filtered.len() {
            0 => {}
            1 => {
                let sole = filtered.remove(0);
                if self.current.as_ref().map(|m| m.id) != Some(sole.id) {
                    self.select(sole);
                }
            }
            _ => {
                let current_id = self.current.as_ref().map(|m| m.id);
                let mut rng = rand::thread_rng();
                let mut pick = None;
                for _ in 0..MAX_SHUFFLE_DRAWS {
                    pick = filtered.choose(&mut rng).cloned();
                    if pick.as_ref().map(|m| m.id) != current_id {
                        break;
                    }
                }
                if let Some(movie) = pick {
                    self.select(movie);
                }
            }
        }
    }

    async fn refresh(&mut self) -> Result<(), CatalogError> {
        self.state = EngineState::Fetching;
        match self.fetch_with_retry().await {
            Ok(movies) => {
                info!(provider = self.provider.name(), count = movies.len(), "candidates fetched");
                self.movies = movies;
                self.reselect();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "fetch failed, keeping previous selection");
                self.state = EngineState::Failed;
                let _ = self.events.send(EngineEvent::FetchFailed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// One fetch: the discover endpoint when a known genre is active, the
    /// trending endpoint otherwise. Unknown genre names fall open to
    /// trending instead of failing the fetch.
    async fn fetch_once(&self) -> Result<Vec<Movie>, CatalogError> {
        match self.filters.genre.as_deref() {
            Some(name) if genres::code_for_name(name).is_some() => {
                self.provider.fetch_by_genre(name).await
            }
            _ => self.provider.fetch_trending().await,
        }
    }

    /// Network failures get `MAX_RETRIES` follow-up attempts; decode and
    /// genre errors will not succeed on retry and surface immediately.
    async fn fetch_with_retry(&self) -> Result<Vec<Movie>, CatalogError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once().await {
                Ok(movies) => return Ok(movies),
                Err(CatalogError::Network(reason)) if attempt < MAX_RETRIES => {
                    attempt += 1;
                    warn!(attempt, reason = %reason, "transient fetch failure, retrying");
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// After a successful fetch: filter, then draw uniformly. An empty
    /// filtered set keeps the previous selection and reports no-results.
    fn reselect(&mut self) {
        let filtered = apply_filters(&self.movies, &self.filters);
        if filtered.is_empty() {
            self.state = EngineState::NoMatch;
            let _ = self.events.send(EngineEvent::NoResults);
            return;
        }
        if let Some(movie) = filtered.choose(&mut rand::thread_rng()).cloned() {
            self.select(movie);
        }
    }

    fn select(&mut self, movie: Movie) {
        let movie_id = movie.id;
        self.current = Some(movie);
        self.state = EngineState::Ready;
        let _ = self.events.send(EngineEvent::SelectionChanged { movie_id });
    }

    /// Display title for the current selection.
    pub fn title(&self) -> String {
        self.current
            .as_ref()
            .map(|m| m.title.clone())
            .unwrap_or_else(|| "No title".to_string())
    }

    /// Synopsis text for the current selection.
    pub fn overview(&self) -> String {
        self.current
            .as_ref()
            .map(|m| m.overview.clone())
            .unwrap_or_else(|| "No description available".to_string())
    }

    /// Star rating like `★ 7.5`, or `N/A` with no selection.
    pub fn rating(&self) -> String {
        match &self.current {
            Some(m) => format!("★ {:.1}", m.vote_average),
            None => "N/A".to_string(),
        }
    }

    /// Display name of the selection's first genre.
    pub fn genre(&self) -> String {
        self.current
            .as_ref()
            .and_then(|m| m.genre_ids.first())
            .map(|&code| genres::name_for_code(code).to_string())
            .unwrap_or_else(|| genres::UNKNOWN_GENRE.to_string())
    }

    /// Full poster URL, absent when the movie carries no artwork.
    pub fn poster_url(&self) -> Option<String> {
        self.current
            .as_ref()
            .and_then(|m| m.poster_path.as_deref())
            .map(tmdb::poster_url)
    }
}
