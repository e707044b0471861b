//! Tests for puzzle store operations.

use tempfile::NamedTempFile;

use nonogram_studio::{Puzzle, PuzzleRepository, SolutionGrid, import_library};

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
fn setup_test_db() -> (NamedTempFile, PuzzleRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let repo = PuzzleRepository::new(db_path);
    repo.run_migrations().expect("Migrations failed");
    (db_file, repo)
}

fn plus_sign() -> Puzzle {
    let grid = SolutionGrid::new(vec![
        vec![false, true, false],
        vec![true, true, true],
        vec![false, true, false],
    ])
    .unwrap();
    Puzzle::new("plus", grid).unwrap()
}

fn square() -> Puzzle {
    let grid = SolutionGrid::new(vec![vec![true, true], vec![true, true]]).unwrap();
    Puzzle::new("square", grid).unwrap()
}

#[test]
fn test_create_and_get_round_trip() {
    let (_db, repo) = setup_test_db();
    let created = repo.create(&plus_sign()).expect("Create failed");
    assert_eq!(created, plus_sign());

    let fetched = repo
        .get_by_name("plus")
        .expect("Query failed")
        .expect("Puzzle missing");
    assert_eq!(fetched, plus_sign());
}

#[test]
fn test_get_missing_returns_none() {
    let (_db, repo) = setup_test_db();
    let found = repo.get_by_name("nonexistent").expect("Query failed");
    assert!(found.is_none());
}

#[test]
fn test_create_duplicate_name_fails() {
    let (_db, repo) = setup_test_db();
    repo.create(&plus_sign()).expect("First create failed");
    let result = repo.create(&plus_sign());
    assert!(result.is_err(), "Duplicate name should fail");
}

#[test]
fn test_list_names_sorted() {
    let (_db, repo) = setup_test_db();
    repo.create(&square()).expect("Create failed");
    repo.create(&plus_sign()).expect("Create failed");

    let names = repo.list_names().expect("List failed");
    assert_eq!(names, vec!["plus".to_string(), "square".to_string()]);
}

#[test]
fn test_update_replaces_board() {
    let (_db, repo) = setup_test_db();
    repo.create(&square()).expect("Create failed");

    let new_grid = SolutionGrid::new(vec![vec![true, false], vec![false, true]]).unwrap();
    let updated = Puzzle::new("square", new_grid).unwrap();
    assert!(repo.update(&updated).expect("Update failed"));

    let fetched = repo
        .get_by_name("square")
        .expect("Query failed")
        .expect("Puzzle missing");
    assert_eq!(fetched, updated);
    assert_eq!(fetched.descriptors().rows(), &vec![vec![1], vec![1]]);
}

#[test]
fn test_update_missing_name_is_reported() {
    let (_db, repo) = setup_test_db();
    let found = repo.update(&square()).expect("Update failed");
    assert!(!found);
    assert!(repo.get_by_name("square").expect("Query failed").is_none());
}

#[test]
fn test_search_by_clue_matches_rows_and_columns() {
    let (_db, repo) = setup_test_db();
    repo.create(&plus_sign()).expect("Create failed");
    repo.create(&square()).expect("Create failed");

    // Middle row of the plus is [3].
    assert_eq!(
        repo.search_by_clue(&[3]).expect("Search failed"),
        vec!["plus".to_string()]
    );
    // Every line of the square is [2].
    assert_eq!(
        repo.search_by_clue(&[2]).expect("Search failed"),
        vec!["square".to_string()]
    );
    // No line anywhere is [5].
    assert!(repo.search_by_clue(&[5]).expect("Search failed").is_empty());
}

#[test]
fn test_search_matches_full_lines_only() {
    let (_db, repo) = setup_test_db();
    // Rows are [1, 1]; columns are [2], [0], [2].
    let grid = SolutionGrid::new(vec![
        vec![true, false, true],
        vec![true, false, true],
    ])
    .unwrap();
    repo.create(&Puzzle::new("stripes", grid).unwrap())
        .expect("Create failed");

    assert_eq!(
        repo.search_by_clue(&[1, 1]).expect("Search failed"),
        vec!["stripes".to_string()]
    );
    // The prefix [1] of a [1, 1] line is not a match on its own.
    assert!(repo.search_by_clue(&[1]).expect("Search failed").is_empty());
    // The blank middle column matches the zero sentinel.
    assert_eq!(
        repo.search_by_clue(&[0]).expect("Search failed"),
        vec!["stripes".to_string()]
    );
}

#[test]
fn test_import_library_recomputes_and_skips() {
    let (_db, repo) = setup_test_db();
    repo.create(&square()).expect("Create failed");

    let json = r#"{
        "square": { "board": [[true, true], [true, true]] },
        "dot": { "board": [[true]], "descriptors": { "rows": [[9]], "columns": [[9]] } },
        "ragged": { "board": [[true, false], [true]] }
    }"#;

    let report = import_library(&repo, json).expect("Import failed");
    assert_eq!(report.imported(), &vec!["dot".to_string()]);
    assert_eq!(report.skipped().len(), 2);

    // Bogus descriptors in the file are ignored in favor of derivation.
    let dot = repo
        .get_by_name("dot")
        .expect("Query failed")
        .expect("Puzzle missing");
    assert_eq!(dot.descriptors().rows(), &vec![vec![1]]);
}

#[test]
fn test_import_rejects_invalid_json() {
    let (_db, repo) = setup_test_db();
    assert!(import_library(&repo, "not json").is_err());
}
