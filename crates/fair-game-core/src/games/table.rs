//! Help table: the beats-relation for every pair of moves.

use super::{MoveIndex, MoveList};
use std::fmt;

/// Top-left header cell
pub const HEADER_CORNER: &str = "PC\\User";

/// Result for the row move (played by the computer) against the column move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Win,
    Lose,
    Draw,
}

impl Relation {
    /// Relation of `row` to `column` in a list of `move_count` moves
    pub fn between(row: MoveIndex, column: MoveIndex, move_count: usize) -> Self {
        let (i, j) = (row.get(), column.get());
        if i == j {
            Relation::Draw
        } else if (j + move_count - i) % move_count <= move_count / 2 {
            Relation::Win
        } else {
            Relation::Lose
        }
    }

    /// Cell label
    pub fn label(&self) -> &'static str {
        match self {
            Relation::Win => "Win",
            Relation::Lose => "Lose",
            Relation::Draw => "Draw",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// (N+1)x(N+1) grid of padded cells; row 0 and column 0 are headers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationTable {
    cells: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl RelationTable {
    /// Build the grid for a move list
    pub fn build(moves: &MoveList) -> Self {
        let n = moves.len();

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(n + 1);
        let mut header = Vec::with_capacity(n + 1);
        header.push(HEADER_CORNER.to_string());
        header.extend(moves.names().iter().cloned());
        rows.push(header);

        for (row, name) in moves.iter() {
            let mut cells = Vec::with_capacity(n + 1);
            cells.push(name.to_string());
            cells.extend(
                moves
                    .iter()
                    .map(|(column, _)| Relation::between(row, column, n).label().to_string()),
            );
            rows.push(cells);
        }

        // One shared width keeps the grid square
        let width = rows
            .iter()
            .flatten()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(0);
        let widths = vec![width; n + 1];

        let cells = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&widths)
                    .map(|(cell, &w)| format!("{cell:<w$}"))
                    .collect()
            })
            .collect();

        Self { cells, widths }
    }

    /// Padded cells, header row first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Column widths in characters
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Border and content lines, a border above and below every row
    pub fn render(&self) -> Vec<String> {
        let border: String = self.widths.iter().fold(String::from("+"), |mut line, &w| {
            line.push_str(&"-".repeat(w));
            line.push('+');
            line
        });

        let mut lines = Vec::with_capacity(self.cells.len() * 2 + 1);
        lines.push(border.clone());
        for row in &self.cells {
            lines.push(format!("|{}|", row.join("|")));
            lines.push(border.clone());
        }
        lines
    }
}

impl fmt::Display for RelationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
