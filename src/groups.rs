//! Поиск связных групп ячеек
//!
//! Обобщённый алгоритм: построчный обход сетки, из каждой непосещённой ячейки,
//! подходящей под условие включения, запускается заливка в глубину. После
//! заливки группа проверяется условием допустимости; отклонённая группа не
//! получает меток и не учитывается в счётчике.

use log::debug;
use serde::Serialize;

use crate::cell::{Cell, CellKind, Position};
use crate::direction::Adjacency;
use crate::grid::Grid;

/// Найденная группа: метка и позиции всех её ячеек
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub kind: CellKind,
    pub cells: Vec<Position>,
}

impl Group {
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

impl Grid {
    /// Считает группы ячеек и помечает их ячейки меткой `kind`
    ///
    /// # Аргументы
    /// * `include` — входит ли ячейка в группы этого вида
    /// * `is_valid` — допустима ли группа; вызывается для ячеек группы по мере
    ///   завершения их обхода
    /// * `adjacency` — какие соседи считаются смежными при заливке
    /// * `kind` — метка для ячеек принятых групп
    pub fn find_groups<I, V>(
        &mut self,
        include: I,
        is_valid: V,
        adjacency: Adjacency,
        kind: CellKind,
    ) -> usize
    where
        I: Fn(&Cell) -> bool,
        V: Fn(&Grid, &Cell) -> bool,
    {
        self.collect_groups(include, is_valid, adjacency, kind).len()
    }

    /// То же, что [`Grid::find_groups`], но возвращает сами группы в порядке обнаружения
    pub fn collect_groups<I, V>(
        &mut self,
        include: I,
        is_valid: V,
        adjacency: Adjacency,
        kind: CellKind,
    ) -> Vec<Group>
    where
        I: Fn(&Cell) -> bool,
        V: Fn(&Grid, &Cell) -> bool,
    {
        self.reset_traversal_state();

        let mut groups = Vec::new();
        let mut rejected = 0usize;
        let mut stack = Vec::new();
        let mut members = Vec::new();

        for idx in 0..self.cells.len() {
            if self.cells[idx].visited {
                continue;
            }
            self.cells[idx].visited = true;

            if !include(&self.cells[idx]) {
                continue;
            }

            members.clear();
            let mut valid = true;
            stack.push(idx);

            // Ячейка помечается посещённой в момент первой встречи,
            // поэтому в стек попадает не более одного раза.
            while let Some(current) = stack.pop() {
                members.push(current);

                for n in self.neighbor_indices(current, adjacency).into_iter().flatten() {
                    if self.cells[n].visited {
                        continue;
                    }
                    self.cells[n].visited = true;
                    if include(&self.cells[n]) {
                        stack.push(n);
                    }
                }

                if !is_valid(&*self, &self.cells[current]) {
                    valid = false;
                }
            }

            if !valid {
                rejected += 1;
                continue;
            }

            for &m in &members {
                self.cells[m].kind = kind;
            }
            groups.push(Group {
                kind,
                cells: members.iter().map(|&m| self.cells[m].position()).collect(),
            });
        }

        debug!(
            "{:?}: {} groups accepted, {} rejected ({:?} adjacency, {}x{} grid)",
            kind,
            groups.len(),
            rejected,
            adjacency,
            self.rows(),
            self.cols()
        );

        groups
    }
}
