//! Tests for run-length clue derivation.

use nonogram_studio::{DescriptorSet, EditGrid, SolutionGrid};

fn grid(cells: Vec<Vec<bool>>) -> SolutionGrid {
    SolutionGrid::new(cells).expect("rectangular grid")
}

#[test]
fn test_single_cell_runs() {
    let clues = DescriptorSet::compute(&grid(vec![
        vec![true, false],
        vec![false, true],
    ]));
    assert_eq!(clues.rows(), &vec![vec![1], vec![1]]);
    assert_eq!(clues.columns(), &vec![vec![1], vec![1]]);
}

#[test]
fn test_blank_lines_use_zero_sentinel() {
    let clues = DescriptorSet::compute(&grid(vec![
        vec![false, false],
        vec![false, false],
    ]));
    assert_eq!(clues.rows(), &vec![vec![0], vec![0]]);
    assert_eq!(clues.columns(), &vec![vec![0], vec![0]]);
}

#[test]
fn test_run_touching_line_end() {
    let clues = DescriptorSet::compute(&grid(vec![vec![true, true, false, true]]));
    assert_eq!(clues.rows(), &vec![vec![2, 1]]);
    assert_eq!(
        clues.columns(),
        &vec![vec![1], vec![1], vec![0], vec![1]]
    );
}

#[test]
fn test_full_line_is_single_run() {
    let clues = DescriptorSet::compute(&grid(vec![
        vec![true, true, true],
        vec![false, false, false],
    ]));
    assert_eq!(clues.rows(), &vec![vec![3], vec![0]]);
    assert_eq!(clues.columns(), &vec![vec![1], vec![1], vec![1]]);
}

#[test]
fn test_multiple_runs_per_line() {
    // X.X
    // XXX
    // .X.
    let clues = DescriptorSet::compute(&grid(vec![
        vec![true, false, true],
        vec![true, true, true],
        vec![false, true, false],
    ]));
    assert_eq!(clues.rows(), &vec![vec![1, 1], vec![3], vec![1]]);
    assert_eq!(clues.columns(), &vec![vec![2], vec![2], vec![1, 1]]);
}

#[test]
fn test_zero_row_grid_is_fully_empty() {
    let clues = DescriptorSet::compute(&grid(vec![]));
    assert!(clues.rows().is_empty());
    assert!(clues.columns().is_empty());
}

#[test]
fn test_zero_width_grid_is_fully_empty() {
    // Rows exist but carry no cells: still the empty-grid case, not [0] rows.
    let clues = DescriptorSet::compute(&grid(vec![vec![], vec![], vec![]]));
    assert!(clues.rows().is_empty());
    assert!(clues.columns().is_empty());
}

#[test]
fn test_dimensions_match_grid() {
    let g = grid(vec![vec![true, false, true, false]; 7]);
    let clues = DescriptorSet::compute(&g);
    assert_eq!(clues.rows().len(), 7);
    assert_eq!(clues.columns().len(), 4);
}

#[test]
fn test_compute_is_deterministic() {
    let g = grid(vec![
        vec![true, false, true],
        vec![false, true, false],
    ]);
    assert_eq!(DescriptorSet::compute(&g), DescriptorSet::compute(&g));
}

#[test]
fn test_edit_grid_computes_same_clues_as_solution() {
    let cells = vec![vec![true, true, false], vec![false, true, true]];
    let solution = grid(cells.clone());
    let editor = EditGrid::try_from(cells).expect("rectangular grid");
    assert_eq!(
        DescriptorSet::compute(&solution),
        DescriptorSet::compute(&editor)
    );
}

#[test]
fn test_matches_clue_against_any_line() {
    let clues = DescriptorSet::compute(&grid(vec![
        vec![true, false, true],
        vec![true, true, true],
        vec![false, true, false],
    ]));
    assert!(clues.matches_clue(&[3])); // middle row
    assert!(clues.matches_clue(&[1, 1])); // top row
    assert!(clues.matches_clue(&[2])); // left column
    assert!(!clues.matches_clue(&[4]));
    assert!(!clues.matches_clue(&[1, 2]));
}

#[test]
fn test_parse_clue_query() {
    use nonogram_studio::parse_clue_query;

    assert_eq!(parse_clue_query("1,2,3"), Some(vec![1, 2, 3]));
    assert_eq!(parse_clue_query("1 2 3"), Some(vec![1, 2, 3]));
    assert_eq!(parse_clue_query(" 4 , 5 "), Some(vec![4, 5]));
    assert_eq!(parse_clue_query("7"), Some(vec![7]));
    assert_eq!(parse_clue_query(""), None);
    assert_eq!(parse_clue_query("  ,  "), None);
    assert_eq!(parse_clue_query("one two"), None);
    assert_eq!(parse_clue_query("1,x"), None);
}
