//! Направления соседства и режимы смежности

use std::str::FromStr;

use crate::error::GridError;

/// Категория направления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionType {
    Perpendicular,
    Diagonal,
}

/// Одно из восьми направлений от ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    /// Фиксированный порядок обхода соседей
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Смещение (Δстрока, Δстолбец)
    #[must_use]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    #[must_use]
    pub fn direction_type(self) -> DirectionType {
        match self {
            Direction::Up | Direction::Down | Direction::Left | Direction::Right => {
                DirectionType::Perpendicular
            }
            _ => DirectionType::Diagonal,
        }
    }

    #[must_use]
    pub fn is_diagonal(self) -> bool {
        self.direction_type() == DirectionType::Diagonal
    }

    /// Короткое имя направления
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpRight => "ur",
            Direction::UpLeft => "ul",
            Direction::DownRight => "lr",
            Direction::DownLeft => "ll",
        }
    }
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "ur" | "up-right" => Ok(Direction::UpRight),
            "ul" | "up-left" => Ok(Direction::UpLeft),
            "lr" | "down-right" => Ok(Direction::DownRight),
            "ll" | "down-left" => Ok(Direction::DownLeft),
            _ => Err(GridError::InvalidDirection(s.to_string())),
        }
    }
}

/// Режим смежности при поиске соседей
///
/// - `Perpendicular` — только сверху, снизу, слева и справа (4 соседа)
/// - `All` — вместе с диагоналями (8 соседей)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Adjacency {
    #[default]
    Perpendicular,
    All,
}

impl Adjacency {
    #[must_use]
    pub fn includes(self, direction: Direction) -> bool {
        match self {
            Adjacency::Perpendicular => !direction.is_diagonal(),
            Adjacency::All => true,
        }
    }

    /// Противоположный режим
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Adjacency::Perpendicular => Adjacency::All,
            Adjacency::All => Adjacency::Perpendicular,
        }
    }
}

impl FromStr for Adjacency {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perpendicular" => Ok(Adjacency::Perpendicular),
            "all" => Ok(Adjacency::All),
            _ => Err(GridError::InvalidAdjacencyMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_back() {
        for dir in Direction::ALL {
            assert_eq!(dir.token().parse::<Direction>().unwrap(), dir);
        }
        assert_eq!("down-left".parse::<Direction>().unwrap(), Direction::DownLeft);
    }

    #[test]
    fn unknown_tokens_fail() {
        assert!(matches!(
            "north".parse::<Direction>(),
            Err(GridError::InvalidDirection(t)) if t == "north"
        ));
        assert!(matches!(
            "diagonal".parse::<Adjacency>(),
            Err(GridError::InvalidAdjacencyMode(_))
        ));
    }

    #[test]
    fn perpendicular_skips_diagonals() {
        let count = Direction::ALL
            .iter()
            .filter(|d| Adjacency::Perpendicular.includes(**d))
            .count();
        assert_eq!(count, 4);
        assert_eq!(Adjacency::All.inverted(), Adjacency::Perpendicular);
    }
}
