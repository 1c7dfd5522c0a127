use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spree_core::genres;
use spree_engine::{EngineEvent, SelectionEngine};
use spree_watchlist::store::WatchlistStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let api_key =
        std::env::var("SPREE_TMDB_API_KEY").context("SPREE_TMDB_API_KEY must be set")?;

    // Watchlist DB path: use SPREE_DB env or default
    let db_path = std::env::var("SPREE_DB").unwrap_or_else(|_| "spree.db".to_string());
    info!(db_path = %db_path, "opening watchlist database");

    let pool = spree_watchlist::connect(&db_path)
        .await
        .context("failed to open watchlist database")?;
    spree_watchlist::migrate::run(&pool)
        .await
        .context("failed to run migrations")?;
    let watchlist = WatchlistStore::new(pool);

    let provider = Arc::new(spree_catalog::tmdb::TmdbClient::new(api_key));
    let mut engine = SelectionEngine::new(provider);

    // Print the unobtrusive notifications as they arrive; the command loop
    // renders the movie card itself after each successful operation.
    let mut events = engine.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                EngineEvent::SelectionChanged { .. } => {}
                EngineEvent::NoResults => println!("No movies matched your filters."),
                EngineEvent::FetchFailed { message } => println!("Fetch failed: {message}"),
            }
        }
    });

    println!("StreamSpree movie roulette");
    if engine.load_initial().await.is_ok() {
        print_card(&engine);
    }
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            "" => {}
            "shuffle" | "s" => {
                engine.shuffle();
                print_card(&engine);
            }
            "reload" | "r" => {
                if engine.load_initial().await.is_ok() {
                    print_card(&engine);
                }
            }
            "filter" | "f" => {
                let (genre, min_rating) = parse_filter_args(rest);
                if engine.set_filters(genre, min_rating).await.is_ok() {
                    print_card(&engine);
                }
            }
            "genres" | "g" => {
                println!("Any, {}", genres::all_names().join(", "));
            }
            "show" => match engine.current_movie() {
                Some(movie) => {
                    print_card(&engine);
                    let names = movie.genre_names();
                    if !names.is_empty() {
                        println!("  Genres: {}", names.join(", "));
                    }
                }
                None => println!("Nothing selected yet."),
            },
            "save" => match engine.current_movie() {
                Some(movie) => {
                    watchlist.add(movie).await.context("failed to save movie")?;
                    println!("Saved '{}' to your watchlist.", movie.title);
                }
                None => println!("Nothing selected yet."),
            },
            "unsave" => match engine.current_movie() {
                Some(movie) => {
                    watchlist
                        .remove(movie)
                        .await
                        .context("failed to remove movie")?;
                    println!("Removed '{}' from your watchlist.", movie.title);
                }
                None => println!("Nothing selected yet."),
            },
            "watchlist" | "w" => {
                let saved = watchlist.list().await.context("failed to read watchlist")?;
                if saved.is_empty() {
                    println!("Your watchlist is empty.");
                } else {
                    for movie in &saved {
                        println!("  ★ {:.1}  {}", movie.vote_average, movie.title);
                    }
                }
            }
            "help" | "h" => print_help(),
            "quit" | "q" => break,
            other => println!("Unknown command: {other} (try 'help')"),
        }
        prompt();
    }

    Ok(())
}

/// `filter [genre] [min_rating]`: a trailing number is the rating, the rest
/// is the genre name (which may contain spaces). Bare `filter` clears both.
fn parse_filter_args(rest: &str) -> (Option<String>, Option<f64>) {
    let mut tokens: Vec<&str> = rest.split_whitespace().collect();
    let mut min_rating = None;
    if let Some(last) = tokens.last() {
        if let Ok(rating) = last.parse::<f64>() {
            min_rating = Some(rating);
            tokens.pop();
        }
    }
    let genre = (!tokens.is_empty()).then(|| tokens.join(" "));
    (genre, min_rating)
}

fn print_card(engine: &SelectionEngine) {
    println!();
    println!("  {}", engine.title());
    println!("  {}  ·  {}", engine.rating(), engine.genre());
    if let Some(url) = engine.poster_url() {
        println!("  {url}");
    }
    println!("  {}", engine.overview());
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  shuffle            pick another movie from the current results");
    println!("  reload             fetch fresh results");
    println!("  filter [g] [min]   e.g. 'filter horror 7.0'; bare 'filter' clears");
    println!("  genres             list the filterable genres");
    println!("  show               current movie with its full genre list");
    println!("  save / unsave      add or remove the current movie on the watchlist");
    println!("  watchlist          list saved movies");
    println!("  quit");
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
