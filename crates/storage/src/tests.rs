#[cfg(test)]
mod store_tests {
    use crate::{CatalogStore, StoreError};
    use movielog_core::Movie;
    use rusqlite::Connection;
    use tempfile::TempDir;

    fn create_test_store() -> (CatalogStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let store = CatalogStore::new(&db_path).unwrap();
        (store, temp_dir)
    }

    fn movie(title: &str, year: i64, rating: f64) -> Movie {
        Movie {
            title: title.to_string(),
            year,
            rating,
            poster_url: Some(format!("http://posters.example/{}.jpg", title)),
        }
    }

    #[test]
    fn test_empty_catalog_lists_empty() {
        let (store, _temp_dir) = create_test_store();
        let catalog = store.list().unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_then_list() {
        let (store, _temp_dir) = create_test_store();
        store.add(&movie("Alien", 1979, 8.5)).unwrap();

        let catalog = store.list().unwrap();
        assert_eq!(catalog.len(), 1);
        let entry = &catalog["Alien"];
        assert_eq!(entry.year, 1979);
        assert_eq!(entry.rating, 8.5);
        assert_eq!(entry.poster_url.as_deref(), Some("http://posters.example/Alien.jpg"));
    }

    #[test]
    fn test_add_without_poster() {
        let (store, _temp_dir) = create_test_store();
        store
            .add(&Movie { title: "Pi".to_string(), year: 1998, rating: 7.4, poster_url: None })
            .unwrap();

        let catalog = store.list().unwrap();
        assert_eq!(catalog["Pi"].poster_url, None);
    }

    #[test]
    fn test_duplicate_add_rejected_and_original_unchanged() {
        let (store, _temp_dir) = create_test_store();
        store.add(&movie("Alien", 1979, 8.5)).unwrap();

        let err = store.add(&movie("Alien", 2000, 1.0)).unwrap_err();
        assert!(err.is_duplicate(), "expected duplicate, got: {err}");

        let catalog = store.list().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog["Alien"].year, 1979);
        assert_eq!(catalog["Alien"].rating, 8.5);
    }

    #[test]
    fn test_title_match_is_case_sensitive() {
        let (store, _temp_dir) = create_test_store();
        store.add(&movie("Alien", 1979, 8.5)).unwrap();

        // "alien" is a different key; both insert and delete treat it so.
        store.add(&movie("alien", 1979, 8.5)).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);

        store.delete("alien").unwrap();
        let catalog = store.list().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains_key("Alien"));
    }

    #[test]
    fn test_delete_missing_reports_not_found_and_catalog_unchanged() {
        let (store, _temp_dir) = create_test_store();
        store.add(&movie("Alien", 1979, 8.5)).unwrap();

        let err = store.delete("Blade Runner").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref t) if t == "Blade Runner"));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_existing() {
        let (store, _temp_dir) = create_test_store();
        store.add(&movie("Alien", 1979, 8.5)).unwrap();
        store.delete("Alien").unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_missing_reports_not_found() {
        let (store, _temp_dir) = create_test_store();
        let err = store.update_rating("Alien", 9.0).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_changes_only_rating() {
        let (store, _temp_dir) = create_test_store();
        store.add(&movie("Alien", 1979, 8.5)).unwrap();

        store.update_rating("Alien", 9.1).unwrap();

        let catalog = store.list().unwrap();
        let entry = &catalog["Alien"];
        assert_eq!(entry.rating, 9.1);
        assert_eq!(entry.year, 1979);
        assert_eq!(entry.poster_url.as_deref(), Some("http://posters.example/Alien.jpg"));
    }

    #[test]
    fn test_reopening_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let store = CatalogStore::new(&db_path).unwrap();
        store.add(&movie("Alien", 1979, 8.5)).unwrap();
        drop(store);

        // Second open re-runs migrations; must not error or duplicate anything.
        let store = CatalogStore::new(&db_path).unwrap();
        let catalog = store.list().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog["Alien"].year, 1979);
    }

    #[test]
    fn test_legacy_schema_gains_poster_column() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("legacy.db");

        // A v1-era database: movies table without poster_url.
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE movies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT UNIQUE NOT NULL,
                year INTEGER NOT NULL,
                rating REAL NOT NULL
            );
            INSERT INTO movies (title, year, rating) VALUES ('Alien', 1979, 8.5);",
        )
        .unwrap();
        conn.pragma_update(None, "user_version", 1i32).unwrap();
        drop(conn);

        let store = CatalogStore::new(&db_path).unwrap();
        let catalog = store.list().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog["Alien"].year, 1979);
        assert_eq!(catalog["Alien"].poster_url, None);

        store
            .add(&Movie {
                title: "Arrival".to_string(),
                year: 2016,
                rating: 7.9,
                poster_url: Some("http://posters.example/arrival.jpg".to_string()),
            })
            .unwrap();
        assert!(store.list().unwrap()["Arrival"].poster_url.is_some());
    }

    #[test]
    fn test_random_on_empty_catalog() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.random().unwrap().is_none());
    }

    #[test]
    fn test_random_returns_stored_record() {
        let (store, _temp_dir) = create_test_store();
        store.add(&movie("Alien", 1979, 8.5)).unwrap();
        store.add(&movie("Brazil", 1985, 7.8)).unwrap();

        let pick = store.random().unwrap().unwrap();
        assert!(pick.title == "Alien" || pick.title == "Brazil");
    }

    #[test]
    fn test_list_iterates_in_title_order() {
        let (store, _temp_dir) = create_test_store();
        store.add(&movie("Zodiac", 2007, 7.7)).unwrap();
        store.add(&movie("Alien", 1979, 8.5)).unwrap();
        store.add(&movie("Brazil", 1985, 7.8)).unwrap();

        let titles: Vec<_> = store.list().unwrap().into_keys().collect();
        assert_eq!(titles, vec!["Alien", "Brazil", "Zodiac"]);
    }
}
