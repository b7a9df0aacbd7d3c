//! Текстовая разметка сетки
//!
//! Одна строка текста — одна строка сетки. `#` или `1` — суша, `.` или `0` — вода.
//! Пробелы по краям строк и пустые строки игнорируются.

use crate::cell::{Cell, CellKind, CellState};
use crate::error::{GridError, GridResult};
use crate::grid::Grid;

const LAND: char = '#';
const WATER: char = '.';

fn parse_cell(c: char) -> Option<CellState> {
    match c {
        '#' | '1' => Some(CellState::Land),
        '.' | '0' => Some(CellState::Water),
        _ => None,
    }
}

impl Grid {
    /// Строит сетку по текстовой разметке
    pub fn from_layout(text: &str) -> GridResult<Self> {
        let mut states = Vec::new();
        let mut cols = None;
        let mut rows = 0;

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let row: Vec<CellState> = line
                .chars()
                .map(|c| {
                    parse_cell(c).ok_or_else(|| GridError::InvalidLayout {
                        line: i + 1,
                        reason: format!("unexpected character '{c}'"),
                    })
                })
                .collect::<GridResult<_>>()?;

            match cols {
                None => cols = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(GridError::InvalidLayout {
                        line: i + 1,
                        reason: format!("expected {expected} cells, found {}", row.len()),
                    });
                }
                Some(_) => {}
            }

            states.extend(row);
            rows += 1;
        }

        let Some(cols) = cols else {
            return Err(GridError::InvalidLayout {
                line: 0,
                reason: "layout is empty".to_string(),
            });
        };

        Self::from_states(rows, cols, &states)
    }

    /// Разметка текущих состояний (`#` — суша, `.` — вода)
    #[must_use]
    pub fn to_layout(&self) -> String {
        self.render(|cell| match cell.state() {
            CellState::Land => LAND,
            CellState::Water => WATER,
        })
    }

    /// Разметка с метками последнего прохода: `I` — остров, `L` — озеро
    #[must_use]
    pub fn label_layout(&self) -> String {
        self.render(|cell| match (cell.kind(), cell.state()) {
            (CellKind::Island, _) => 'I',
            (CellKind::Lake, _) => 'L',
            (CellKind::Unknown, CellState::Land) => LAND,
            (CellKind::Unknown, CellState::Water) => WATER,
        })
    }

    fn render<F>(&self, symbol: F) -> String
    where
        F: Fn(&Cell) -> char,
    {
        let mut out = String::with_capacity(self.len() + self.rows());
        for cell in self.cells() {
            out.push(symbol(cell));
            if cell.col() + 1 == self.cols() {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_round_trips() {
        let text = "#..#\n.##.\n....\n";
        let grid = Grid::from_layout(text).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.land_count(), 4);
        assert_eq!(grid.to_layout(), text);
    }

    #[test]
    fn digits_and_indentation_are_accepted() {
        let grid = Grid::from_layout("\n   101\n   010\n\n").unwrap();
        assert_eq!(grid.to_layout(), "#.#\n.#.\n");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_layout("###\n##\n").unwrap_err();
        assert!(matches!(err, GridError::InvalidLayout { line: 2, .. }));
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let err = Grid::from_layout("#x#").unwrap_err();
        assert!(matches!(err, GridError::InvalidLayout { line: 1, .. }));
        assert!(matches!(
            Grid::from_layout("  \n"),
            Err(GridError::InvalidLayout { line: 0, .. })
        ));
    }

    #[test]
    fn label_layout_marks_lakes() {
        let mut grid = Grid::from_layout("###\n#.#\n###").unwrap();
        assert_eq!(grid.count_lakes(), 1);
        assert_eq!(grid.label_layout(), "###\n#L#\n###\n");
        assert_eq!(grid.count_islands(), 1);
        assert_eq!(grid.label_layout(), "III\nI.I\nIII\n");
    }
}
