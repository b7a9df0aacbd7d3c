pub mod cell;
pub mod classify;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod groups;
pub mod layout;
pub mod terrain;

pub use cell::{Cell, CellKind, CellState, Position};
pub use classify::{GroupRule, IslandRule, LakeRule, Survey};
pub use config::{GenerationMethod, GenerationSettings, GridSettings};
pub use direction::{Adjacency, Direction, DirectionType};
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use groups::Group;
