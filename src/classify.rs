//! Острова и озёра
//!
//! Оба подсчёта — частные случаи [`Grid::find_groups`] с разными правилами:
//! - острова: связная суша, любая группа допустима;
//! - озёра: связная вода, не касающаяся края сетки.
//!
//! Режим смежности для озёр обратный режиму для островов: если суша связна по
//! диагонали, то диагонально соседствующая вода разделена, и наоборот.

use serde::Serialize;

use crate::cell::{Cell, CellKind};
use crate::direction::Adjacency;
use crate::grid::Grid;
use crate::groups::Group;

/// Набор правил для одного вида групп
pub trait GroupRule {
    /// Входит ли ячейка в группы этого вида
    fn includes(&self, cell: &Cell) -> bool;

    /// Допустима ли группа, содержащая эту ячейку
    fn is_valid(&self, grid: &Grid, cell: &Cell) -> bool;

    /// Режим смежности при заливке
    fn adjacency(&self, include_diagonal: bool) -> Adjacency;

    fn kind(&self) -> CellKind;
}

/// Острова: связные группы суши
#[derive(Debug, Clone, Copy, Default)]
pub struct IslandRule;

impl GroupRule for IslandRule {
    fn includes(&self, cell: &Cell) -> bool {
        cell.is_land()
    }

    fn is_valid(&self, _grid: &Grid, _cell: &Cell) -> bool {
        true
    }

    fn adjacency(&self, include_diagonal: bool) -> Adjacency {
        if include_diagonal {
            Adjacency::All
        } else {
            Adjacency::Perpendicular
        }
    }

    fn kind(&self) -> CellKind {
        CellKind::Island
    }
}

/// Озёра: связная вода, окружённая сушей
#[derive(Debug, Clone, Copy, Default)]
pub struct LakeRule;

impl GroupRule for LakeRule {
    fn includes(&self, cell: &Cell) -> bool {
        cell.is_water()
    }

    /// У ячейки на краю сетки меньше четырёх перпендикулярных соседей
    fn is_valid(&self, grid: &Grid, cell: &Cell) -> bool {
        grid.neighbor_count(cell, Adjacency::Perpendicular).is_ok_and(|n| n == 4)
    }

    fn adjacency(&self, include_diagonal: bool) -> Adjacency {
        IslandRule.adjacency(include_diagonal).inverted()
    }

    fn kind(&self) -> CellKind {
        CellKind::Lake
    }
}

/// Сводка по сетке: размеры, доли суши и воды, острова и озёра
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Survey {
    pub rows: usize,
    pub cols: usize,
    pub include_diagonal: bool,
    pub land_cells: usize,
    pub water_cells: usize,
    pub islands: usize,
    pub lakes: usize,
    /// Размеры островов в порядке обнаружения
    pub island_sizes: Vec<usize>,
    pub lake_sizes: Vec<usize>,
}

impl Grid {
    /// Находит группы по набору правил с учётом текущего режима диагоналей
    pub fn classify<R: GroupRule>(&mut self, rule: &R) -> Vec<Group> {
        let adjacency = rule.adjacency(self.include_diagonal());
        self.collect_groups(
            |cell| rule.includes(cell),
            |grid, cell| rule.is_valid(grid, cell),
            adjacency,
            rule.kind(),
        )
    }

    pub fn islands(&mut self) -> Vec<Group> {
        self.classify(&IslandRule)
    }

    pub fn lakes(&mut self) -> Vec<Group> {
        self.classify(&LakeRule)
    }

    /// Число островов. Стирает метки предыдущего прохода.
    pub fn count_islands(&mut self) -> usize {
        self.islands().len()
    }

    /// Число озёр. Стирает метки предыдущего прохода.
    pub fn count_lakes(&mut self) -> usize {
        self.lakes().len()
    }

    /// Считает острова, затем озёра. После вызова на ячейках остаются метки озёр.
    pub fn survey(&mut self) -> Survey {
        let islands = self.islands();
        let lakes = self.lakes();

        Survey {
            rows: self.rows(),
            cols: self.cols(),
            include_diagonal: self.include_diagonal(),
            land_cells: self.land_count(),
            water_cells: self.water_count(),
            islands: islands.len(),
            lakes: lakes.len(),
            island_sizes: islands.iter().map(Group::size).collect(),
            lake_sizes: lakes.iter().map(Group::size).collect(),
        }
    }
}
