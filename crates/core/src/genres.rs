//! TMDB genre code table.
//!
//! The name -> code table is authoritative; display names are derived from
//! it. Codes outside the table have no display name beyond the fallback.

/// Fallback display name for codes outside the table.
pub const UNKNOWN_GENRE: &str = "Unknown Genre";

/// Resolve a genre name to its TMDB genre code. Matching is exact after
/// lower-casing the input; unknown names resolve to `None`.
pub fn code_for_name(name: &str) -> Option<i32> {
    let code = match name.to_lowercase().as_str() {
        "action" => 28,
        "adventure" => 12,
        "animation" => 16,
        "comedy" => 35,
        "crime" => 80,
        "documentary" => 99,
        "drama" => 18,
        "family" => 10751,
        "fantasy" => 14,
        "history" => 36,
        "horror" => 27,
        "music" => 10402,
        "mystery" => 9648,
        "romance" => 10749,
        "science fiction" => 878,
        "tv movie" => 10770,
        "thriller" => 53,
        "war" => 10752,
        "western" => 37,
        _ => return None,
    };
    Some(code)
}

/// Display name for a TMDB genre code.
pub fn name_for_code(code: i32) -> &'static str {
    match code {
        28 => "Action",
        12 => "Adventure",
        16 => "Animation",
        35 => "Comedy",
        80 => "Crime",
        99 => "Documentary",
        18 => "Drama",
        10751 => "Family",
        14 => "Fantasy",
        36 => "History",
        27 => "Horror",
        10402 => "Music",
        9648 => "Mystery",
        10749 => "Romance",
        878 => "Science Fiction",
        10770 => "TV Movie",
        53 => "Thriller",
        10752 => "War",
        37 => "Western",
        _ => UNKNOWN_GENRE,
    }
}

/// Every genre display name, in table order. Filter UIs offer these as the
/// selectable choices.
pub fn all_names() -> &'static [&'static str] {
    &[
        "Action",
        "Adventure",
        "Animation",
        "Comedy",
        "Crime",
        "Documentary",
        "Drama",
        "Family",
        "Fantasy",
        "History",
        "Horror",
        "Music",
        "Mystery",
        "Romance",
        "Science Fiction",
        "TV Movie",
        "Thriller",
        "War",
        "Western",
    ]
}
