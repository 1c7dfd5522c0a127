use spree_core::movie::Movie;
use spree_watchlist::store::WatchlistStore;

/// Fresh store over a temp-file database, migrated.
async fn test_store(name: &str) -> WatchlistStore {
    let db_path = std::env::temp_dir().join(format!(
        "spree_watchlist_{}_{}.db",
        std::process::id(),
        name
    ));
    // Stale file from an earlier run would leak state into the test.
    let _ = std::fs::remove_file(&db_path);

    let pool = spree_watchlist::connect(db_path.to_str().unwrap())
        .await
        .unwrap();
    spree_watchlist::migrate::run(&pool).await.unwrap();
    WatchlistStore::new(pool)
}

fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: "An overview.".to_string(),
        poster_path: Some(format!("/poster_{id}.jpg")),
        vote_average: 7.5,
        genre_ids: vec![28, 12],
    }
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let store = test_store("empty").await;
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_persists_the_full_record() {
    let store = test_store("add").await;
    store.add(&movie(1, "Inception")).await.unwrap();

    let saved = store.list().await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, 1);
    assert_eq!(saved[0].title, "Inception");
    assert_eq!(saved[0].poster_path.as_deref(), Some("/poster_1.jpg"));
    assert_eq!(saved[0].genre_ids, vec![28, 12]);
}

#[tokio::test]
async fn add_is_idempotent_by_id() {
    let store = test_store("dedup").await;
    store.add(&movie(1, "Inception")).await.unwrap();
    // Same id with different fields is the same movie.
    store.add(&movie(1, "Inception (4K remaster)")).await.unwrap();

    let saved = store.list().await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Inception");
}

#[tokio::test]
async fn insertion_order_is_preserved() {
    let store = test_store("order").await;
    for (id, title) in [(3, "C"), (1, "A"), (2, "B")] {
        store.add(&movie(id, title)).await.unwrap();
    }

    let ids: Vec<i64> = store.list().await.unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[tokio::test]
async fn remove_drops_only_the_matching_id() {
    let store = test_store("remove").await;
    store.add(&movie(1, "A")).await.unwrap();
    store.add(&movie(2, "B")).await.unwrap();

    store.remove(&movie(1, "A")).await.unwrap();

    let saved = store.list().await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, 2);
}

#[tokio::test]
async fn remove_of_absent_id_is_a_no_op() {
    let store = test_store("remove_absent").await;
    store.add(&movie(1, "A")).await.unwrap();

    store.remove(&movie(99, "Nope")).await.unwrap();

    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn corrupt_stored_value_reads_as_empty() {
    let db_path = std::env::temp_dir().join(format!(
        "spree_watchlist_{}_corrupt.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&db_path);

    let pool = spree_watchlist::connect(db_path.to_str().unwrap())
        .await
        .unwrap();
    spree_watchlist::migrate::run(&pool).await.unwrap();

    sqlx::query("INSERT INTO kv_store (key, value) VALUES ('watchlist_movies', 'not json')")
        .execute(&pool)
        .await
        .unwrap();

    let store = WatchlistStore::new(pool);
    assert!(store.list().await.unwrap().is_empty());

    // The store stays usable: the next add overwrites the corrupt value.
    store.add(&movie(1, "A")).await.unwrap();
    assert_eq!(store.list().await.unwrap().len(), 1);
}
