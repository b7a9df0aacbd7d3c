//! Ошибки работы с сеткой

use thiserror::Error;

/// Ошибки, которые может вернуть сетка и её окружение (конфигурация, разметка)
#[derive(Debug, Error)]
pub enum GridError {
    /// Сетка должна содержать хотя бы одну строку и один столбец
    #[error("invalid grid size: {rows}x{cols} (both dimensions must be at least 1)")]
    InvalidSize { rows: usize, cols: usize },

    /// Обращение к ячейке за пределами сетки
    #[error("there is no cell at {row},{col} (grid is {rows}x{cols})")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },

    #[error(
        "'{0}' is an invalid direction, expected one of: up, down, left, right, ur, ul, lr, ll"
    )]
    InvalidDirection(String),

    #[error("'{0}' is an invalid adjacency mode, expected 'perpendicular' or 'all'")]
    InvalidAdjacencyMode(String),

    /// Координата ячейки в виде "строка,столбец" не разобрана
    #[error("invalid position '{0}', expected 'row,col'")]
    InvalidPosition(String),

    /// Ошибка текстовой разметки (номер строки начинается с 1)
    #[error("invalid layout at line {line}: {reason}")]
    InvalidLayout { line: usize, reason: String },

    /// Число переданных состояний не совпадает с числом ячеек
    #[error("expected {expected} cell states, got {actual}")]
    StateCountMismatch { expected: usize, actual: usize },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Результат операций над сеткой
pub type GridResult<T> = Result<T, GridError>;
