use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Состояние ячейки: суша или вода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Water,
    Land,
}

impl CellState {
    /// `1` для суши, `0` для воды
    #[must_use]
    pub fn bit(self) -> u8 {
        match self {
            CellState::Water => 0,
            CellState::Land => 1,
        }
    }

    #[must_use]
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            CellState::Water
        } else {
            CellState::Land
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            CellState::Water => CellState::Land,
            CellState::Land => CellState::Water,
        }
    }
}

/// Метка, которую ячейка получает по итогам поиска групп
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Unknown,
    Island,
    Lake,
}

/// Позиция ячейки (строка, столбец), считается с нуля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = GridError;

    /// Разбирает строку вида `"3,5"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidPosition(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }
}

/// Ячейка сетки
///
/// Снаружи доступно только состояние (суша/вода). Флаг посещения и метка
/// принадлежат проходу поиска групп: они сбрасываются в начале каждого прохода
/// и отражают только результат последнего из них.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    state: CellState,
    pub(crate) visited: bool,
    pub(crate) kind: CellKind,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Self {
            position: Position::new(row, col),
            state: CellState::Water,
            visited: false,
            kind: CellKind::Unknown,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.position.row
    }

    #[must_use]
    pub fn col(&self) -> usize {
        self.position.col
    }

    #[must_use]
    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Переключает сушу/воду и возвращает новое состояние
    pub fn toggle(&mut self) -> CellState {
        self.state = self.state.toggled();
        self.state
    }

    #[must_use]
    pub fn is_land(&self) -> bool {
        self.state == CellState::Land
    }

    #[must_use]
    pub fn is_water(&self) -> bool {
        self.state == CellState::Water
    }

    /// Метка последнего прохода поиска групп
    #[must_use]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    #[must_use]
    pub fn visited(&self) -> bool {
        self.visited
    }
}
