use serde::Serialize;

/// Selection engine lifecycle.
///
/// `Idle -> Fetching -> { Ready | NoMatch | Failed }`; every terminal state
/// returns to `Fetching` on the next fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// No fetch has completed yet.
    Idle,
    /// A fetch is in flight.
    Fetching,
    /// A selection is present.
    Ready,
    /// The last fetch succeeded but the active filters matched nothing.
    NoMatch,
    /// The last fetch failed even after retrying.
    Failed,
}

impl EngineState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Ready => "ready",
            Self::NoMatch => "no_match",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events broadcast to UI observers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum EngineEvent {
    /// A new movie was selected after a fetch or shuffle.
    #[serde(rename = "selection_changed")]
    SelectionChanged { movie_id: i64 },
    /// The active filters matched no movies; the prior selection is kept.
    #[serde(rename = "no_results")]
    NoResults,
    /// A fetch gave up after its retries failed.
    #[serde(rename = "fetch_failed")]
    FetchFailed { message: String },
}
