use serde::{Deserialize, Serialize};

use crate::genres;

/// A movie record from the remote catalog.
///
/// Identity is the catalog `id`: the catalog does not promise byte-identical
/// records across fetches, so two records with the same id are the same
/// movie regardless of the other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub genre_ids: Vec<i32>,
}

impl Movie {
    /// Display names for every genre id, dropping codes outside the table.
    pub fn genre_names(&self) -> Vec<&'static str> {
        self.genre_ids
            .iter()
            .map(|&code| genres::name_for_code(code))
            .filter(|&name| name != genres::UNKNOWN_GENRE)
            .collect()
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

impl std::hash::Hash for Movie {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
