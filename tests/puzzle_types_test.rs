//! Tests for puzzle construction, name validation, and the wire format.

use nonogram_studio::{
    DescriptorSet, MAX_NAME_LEN, NameError, Puzzle, SolutionGrid, validate_name,
};

fn heart() -> SolutionGrid {
    SolutionGrid::new(vec![
        vec![false, true, false, true, false],
        vec![true, true, true, true, true],
        vec![true, true, true, true, true],
        vec![false, true, true, true, false],
        vec![false, false, true, false, false],
    ])
    .unwrap()
}

#[test]
fn test_valid_names_accepted() {
    assert!(validate_name("heart").is_ok());
    assert!(validate_name("Puzzle 12").is_ok());
    assert!(validate_name("my_puzzle-2").is_ok());
    assert!(validate_name("  padded  ").is_ok()); // trimmed before checking
}

#[test]
fn test_empty_name_rejected() {
    assert_eq!(validate_name(""), Err(NameError::Empty));
    assert_eq!(validate_name("   "), Err(NameError::Empty));
}

#[test]
fn test_overlong_name_rejected() {
    let name = "x".repeat(MAX_NAME_LEN + 1);
    assert_eq!(
        validate_name(&name),
        Err(NameError::TooLong {
            len: MAX_NAME_LEN + 1,
            max: MAX_NAME_LEN
        })
    );
    assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
}

#[test]
fn test_invalid_characters_rejected() {
    assert_eq!(
        validate_name("bad/name"),
        Err(NameError::InvalidChar { ch: '/' })
    );
    assert!(validate_name("émile").is_err());
    assert!(validate_name("tab\tname").is_err());
}

#[test]
fn test_puzzle_derives_descriptors_on_construction() {
    let puzzle = Puzzle::new("heart", heart()).unwrap();
    assert_eq!(puzzle.descriptors(), &DescriptorSet::compute(puzzle.board()));
    assert_eq!(puzzle.descriptors().rows()[4], vec![1]);
    assert_eq!(puzzle.descriptors().rows()[1], vec![5]);
}

#[test]
fn test_puzzle_trims_name() {
    let puzzle = Puzzle::new("  heart  ", heart()).unwrap();
    assert_eq!(puzzle.name(), "heart");
}

#[test]
fn test_puzzle_rejects_bad_name() {
    assert!(Puzzle::new("", heart()).is_err());
    assert!(Puzzle::new("no!bang", heart()).is_err());
}

#[test]
fn test_wire_format_matches_api_shape() {
    let grid = SolutionGrid::new(vec![vec![true, false], vec![false, true]]).unwrap();
    let puzzle = Puzzle::new("tiny", grid).unwrap();

    let json = serde_json::to_value(&puzzle).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "tiny",
            "board": [[true, false], [false, true]],
            "descriptors": {
                "rows": [[1], [1]],
                "columns": [[1], [1]],
            }
        })
    );

    let back: Puzzle = serde_json::from_value(json).unwrap();
    assert_eq!(back, puzzle);
}

#[test]
fn test_deserialization_revalidates_board_shape() {
    let json = serde_json::json!([[true, false], [true]]);
    let result: Result<SolutionGrid, _> = serde_json::from_value(json);
    assert!(result.is_err());
}
