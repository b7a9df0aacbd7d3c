use crate::cell::{Cell, CellKind, CellState};
use crate::direction::{Adjacency, Direction};
use crate::error::{GridError, GridResult};

/// Двумерная сетка суши и воды
///
/// Ячейки хранятся построчно: индекс ячейки `(row, col)` равен `row * cols + col`.
/// Размеры задаются при создании и больше не меняются.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    pub(crate) cells: Vec<Cell>,
    include_diagonal: bool,
}

impl Grid {
    /// Создаёт сетку `rows × cols`, целиком покрытую водой
    pub fn new(rows: usize, cols: usize) -> GridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidSize { rows, cols });
        }

        let total = rows
            .checked_mul(cols)
            .ok_or(GridError::InvalidSize { rows, cols })?;
        let cells = (0..total)
            .map(|i| Cell::new(i / cols, i % cols))
            .collect();

        Ok(Self {
            rows,
            cols,
            cells,
            include_diagonal: false,
        })
    }

    /// Создаёт сетку из готового набора состояний (построчно)
    pub fn from_states(rows: usize, cols: usize, states: &[CellState]) -> GridResult<Self> {
        let mut grid = Self::new(rows, cols)?;
        if states.len() != grid.len() {
            return Err(GridError::StateCountMismatch {
                expected: grid.len(),
                actual: states.len(),
            });
        }
        for (cell, &state) in grid.cells.iter_mut().zip(states) {
            cell.set_state(state);
        }
        Ok(grid)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Общее число ячеек
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Сетка никогда не бывает пустой, метод нужен для пары к `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Учитываются ли диагональные соседи при подсчёте островов
    #[must_use]
    pub fn include_diagonal(&self) -> bool {
        self.include_diagonal
    }

    pub fn set_include_diagonal(&mut self, include_diagonal: bool) {
        self.include_diagonal = include_diagonal;
    }

    /// Лежит ли позиция внутри сетки
    #[must_use]
    pub fn exists(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    fn index_of(&self, row: usize, col: usize) -> GridResult<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row: row as isize,
                col: col as isize,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> GridResult<&Cell> {
        let idx = self.index_of(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Изменяемая ссылка на ячейку. Снаружи через неё меняется только состояние.
    pub fn get_mut(&mut self, row: usize, col: usize) -> GridResult<&mut Cell> {
        let idx = self.index_of(row, col)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set_cell_state(&mut self, row: usize, col: usize, state: CellState) -> GridResult<()> {
        self.get_mut(row, col)?.set_state(state);
        Ok(())
    }

    /// Переключает сушу/воду в ячейке и возвращает новое состояние
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> GridResult<CellState> {
        Ok(self.get_mut(row, col)?.toggle())
    }

    pub(crate) fn neighbor_index(&self, idx: usize, direction: Direction) -> Option<usize> {
        let (dr, dc) = direction.offset();
        let row = (idx / self.cols) as isize + dr;
        let col = (idx % self.cols) as isize + dc;
        if self.exists(row, col) {
            Some(row as usize * self.cols + col as usize)
        } else {
            None
        }
    }

    /// Индексы соседей в фиксированном порядке `Direction::ALL`
    pub(crate) fn neighbor_indices(&self, idx: usize, adjacency: Adjacency) -> [Option<usize>; 8] {
        let mut out = [None; 8];
        for (slot, direction) in out.iter_mut().zip(Direction::ALL) {
            if adjacency.includes(direction) {
                *slot = self.neighbor_index(idx, direction);
            }
        }
        out
    }

    /// Индекс ячейки; ячейка с позицией вне этой сетки — ошибка `OutOfBounds`
    fn cell_index(&self, cell: &Cell) -> GridResult<usize> {
        self.index_of(cell.row(), cell.col())
    }

    /// Сосед ячейки в заданном направлении или `None` за краем сетки
    pub fn neighbor(&self, cell: &Cell, direction: Direction) -> GridResult<Option<&Cell>> {
        let idx = self.cell_index(cell)?;
        Ok(self.neighbor_index(idx, direction).map(|n| &self.cells[n]))
    }

    /// То же, что [`Grid::neighbor`], но направление задаётся строкой (`"up"`, `"ur"`, ...)
    pub fn neighbor_named(&self, cell: &Cell, direction: &str) -> GridResult<Option<&Cell>> {
        let direction: Direction = direction.parse()?;
        self.neighbor(cell, direction)
    }

    /// Все соседи ячейки внутри сетки
    ///
    /// Порядок: вверх, вниз, влево, вправо, вверх-вправо, вверх-влево, вниз-вправо, вниз-влево.
    /// В режиме `Perpendicular` диагонали пропускаются.
    pub fn neighbors(&self, cell: &Cell, adjacency: Adjacency) -> GridResult<Vec<&Cell>> {
        let idx = self.cell_index(cell)?;
        Ok(self
            .neighbor_indices(idx, adjacency)
            .into_iter()
            .flatten()
            .map(|n| &self.cells[n])
            .collect())
    }

    /// Число соседей ячейки внутри сетки, без сбора самих соседей
    pub fn neighbor_count(&self, cell: &Cell, adjacency: Adjacency) -> GridResult<usize> {
        let idx = self.cell_index(cell)?;
        Ok(self.neighbor_indices(idx, adjacency).iter().flatten().count())
    }

    /// Режим смежности задаётся строкой: `"perpendicular"` или `"all"`
    pub fn neighbors_named(&self, cell: &Cell, adjacency: &str) -> GridResult<Vec<&Cell>> {
        let adjacency: Adjacency = adjacency.parse()?;
        self.neighbors(cell, adjacency)
    }

    /// Есть ли сосед в направлении, удовлетворяющий условию
    pub fn has_neighbor<F>(&self, cell: &Cell, direction: Direction, test: F) -> GridResult<bool>
    where
        F: Fn(&Cell) -> bool,
    {
        Ok(self.neighbor(cell, direction)?.is_some_and(test))
    }

    /// Следующая ячейка в построчном порядке, `None` после последней
    pub fn next(&self, cell: &Cell) -> GridResult<Option<&Cell>> {
        let idx = self.cell_index(cell)?;
        Ok(self.cells.get(idx + 1))
    }

    /// Все ячейки построчно
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Применяет функцию к каждой ячейке построчно
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Cell),
    {
        self.cells.iter().for_each(visitor);
    }

    /// Сбрасывает флаги посещения и метки во всей сетке
    pub fn reset_traversal_state(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
            cell.kind = CellKind::Unknown;
        }
    }

    /// Заливает всю сетку водой
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set_state(CellState::Water);
        }
    }

    /// Меняет сушу и воду местами во всей сетке
    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            cell.toggle();
        }
    }

    #[must_use]
    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_land()).count()
    }

    #[must_use]
    pub fn water_count(&self) -> usize {
        self.len() - self.land_count()
    }
}
