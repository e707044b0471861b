//! Board rendering shared by the play and edit screens.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::puzzle::{CellState, DescriptorSet, EditGrid, PlayGrid};

const CLUE_STYLE_FG: Color = Color::DarkGray;

fn clue_text(line: &[u32]) -> String {
    line.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn cursor_style(style: Style) -> Style {
    style.add_modifier(Modifier::REVERSED)
}

/// Builds styled lines for a board: column clues on top, row clues on the
/// left, two terminal columns per cell.
fn board_lines(
    descriptors: &DescriptorSet,
    rows: usize,
    cols: usize,
    cursor: (usize, usize),
    cell: impl Fn(usize, usize) -> (&'static str, Style),
) -> Vec<Line<'static>> {
    let clue_style = Style::default().fg(CLUE_STYLE_FG);
    let row_clues: Vec<String> = descriptors.rows().iter().map(|l| clue_text(l)).collect();
    let clue_width = row_clues.iter().map(String::len).max().unwrap_or(0);
    let clue_height = descriptors
        .columns()
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(clue_height + rows);

    // Column clues, bottom-aligned above their columns.
    for i in 0..clue_height {
        let mut text = " ".repeat(clue_width + 1);
        for col_clue in descriptors.columns() {
            let pad = clue_height - col_clue.len();
            if i >= pad {
                text.push_str(&format!("{:>2}", col_clue[i - pad]));
            } else {
                text.push_str("  ");
            }
        }
        lines.push(Line::from(Span::styled(text, clue_style)));
    }

    for r in 0..rows {
        let clue = row_clues.get(r).map(String::as_str).unwrap_or("");
        let mut spans = vec![Span::styled(
            format!("{:>width$} ", clue, width = clue_width),
            clue_style,
        )];
        for c in 0..cols {
            let (glyph, style) = cell(r, c);
            let style = if (r, c) == cursor {
                cursor_style(style)
            } else {
                style
            };
            spans.push(Span::styled(glyph, style));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Renders a play-mode board with the puzzle's clues.
pub fn play_board_lines(
    descriptors: &DescriptorSet,
    play: &PlayGrid,
    cursor: (usize, usize),
) -> Vec<Line<'static>> {
    board_lines(
        descriptors,
        play.row_count(),
        play.col_count(),
        cursor,
        |r, c| match play.get(r, c).unwrap_or(CellState::Empty) {
            CellState::Empty => ("· ", Style::default().fg(Color::DarkGray)),
            CellState::Filled => ("██", Style::default().fg(Color::Cyan)),
            CellState::Marked => ("✕ ", Style::default().fg(Color::Red)),
        },
    )
}

/// Renders an edit-mode board with its live descriptors.
pub fn edit_board_lines(
    descriptors: &DescriptorSet,
    grid: &EditGrid,
    cursor: (usize, usize),
) -> Vec<Line<'static>> {
    board_lines(
        descriptors,
        grid.row_count(),
        grid.col_count(),
        cursor,
        |r, c| {
            if grid.get(r, c).unwrap_or(false) {
                ("██", Style::default().fg(Color::Cyan))
            } else {
                ("· ", Style::default().fg(Color::DarkGray))
            }
        },
    )
}
