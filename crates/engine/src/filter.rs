use spree_core::genres;
use spree_core::movie::Movie;

/// Sentinel the filter UI sends for "no genre constraint".
const ANY_GENRE: &str = "any";

/// Active filter criteria. `None` on either axis means no constraint there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
}

impl FilterCriteria {
    /// Build criteria, normalizing the "Any" sentinel and blank genre
    /// strings to no-constraint.
    pub fn new(genre: Option<String>, min_rating: Option<f64>) -> Self {
        let genre =
            genre.filter(|g| !g.trim().is_empty() && !g.trim().eq_ignore_ascii_case(ANY_GENRE));
        Self { genre, min_rating }
    }

    /// The genre code for the active genre name. Unknown names resolve to
    /// `None`, which leaves the genre axis unconstrained.
    pub fn genre_code(&self) -> Option<i32> {
        self.genre.as_deref().and_then(genres::code_for_name)
    }
}

/// Keep the movies passing the active criteria, preserving input order.
pub fn apply_filters(movies: &[Movie], criteria: &FilterCriteria) -> Vec<Movie> {
    let genre_code = criteria.genre_code();
    movies
        .iter()
        .filter(|movie| {
            let genre_ok = genre_code.is_none_or(|code| movie.genre_ids.contains(&code));
            let rating_ok = criteria
                .min_rating
                .is_none_or(|min| movie.vote_average >= min);
            genre_ok && rating_ok
        })
        .cloned()
        .collect()
}
