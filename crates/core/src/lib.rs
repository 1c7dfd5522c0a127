pub mod genres;
pub mod movie;
