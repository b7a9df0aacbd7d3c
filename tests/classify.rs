//! Подсчёт островов и озёр

use std::collections::VecDeque;

use islands::{Adjacency, CellKind, CellState, Grid, GroupRule, LakeRule, Position};
use rand::{Rng, SeedableRng};

fn grid(layout: &str) -> Grid {
    Grid::from_layout(layout).unwrap()
}

/// Независимый подсчёт компонент суши обходом в ширину
fn reference_island_count(grid: &Grid, adjacency: Adjacency) -> usize {
    let mut seen = vec![false; grid.len()];
    let mut count = 0;
    for start in grid.cells() {
        let start_idx = start.row() * grid.cols() + start.col();
        if !start.is_land() || seen[start_idx] {
            continue;
        }
        count += 1;
        seen[start_idx] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            for n in grid.neighbors(cell, adjacency).unwrap() {
                let idx = n.row() * grid.cols() + n.col();
                if n.is_land() && !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(n);
                }
            }
        }
    }
    count
}

fn random_grid(seed: u64, rows: usize, cols: usize) -> Grid {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols).unwrap();
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(0.45) {
                grid.set_cell_state(row, col, CellState::Land).unwrap();
            }
        }
    }
    grid
}

#[test]
fn single_land_cell() {
    let mut grid = grid("#");
    assert_eq!(grid.count_islands(), 1);
    assert_eq!(grid.count_lakes(), 0);
}

#[test]
fn land_ring_around_water() {
    let mut grid = grid("###\n#.#\n###");
    assert_eq!(grid.count_islands(), 1);
    assert_eq!(grid.count_lakes(), 1);
    assert_eq!(grid.get(1, 1).unwrap().kind(), CellKind::Lake);
}

#[test]
fn all_water_has_no_lakes() {
    let mut grid = Grid::new(3, 3).unwrap();
    assert_eq!(grid.count_lakes(), 0);
    assert_eq!(grid.count_islands(), 0);
}

#[test]
fn water_touching_the_edge_is_not_a_lake() {
    let mut grid = grid("###\n#..\n###");
    assert_eq!(grid.count_lakes(), 0);
    assert!(grid.cells().all(|c| c.kind() == CellKind::Unknown));
}

#[test]
fn enclosed_lake_inside_open_water() {
    let mut grid = grid(".....\n.###.\n.#.#.\n.###.\n.....");
    assert_eq!(grid.count_islands(), 1);
    assert_eq!(grid.count_lakes(), 1);
    let lakes = grid.lakes();
    assert_eq!(lakes[0].cells, vec![Position::new(2, 2)]);
}

#[test]
fn diagonal_mode_merges_islands() {
    let mut grid = grid("#.\n.#");
    assert_eq!(grid.count_islands(), 2);
    grid.set_include_diagonal(true);
    assert_eq!(grid.count_islands(), 1);
}

#[test]
fn lake_adjacency_is_inverted() {
    // Ромб из суши вокруг водяного центра
    let mut grid = grid(".#.\n#.#\n.#.");

    // Без диагоналей суша распадается на 4 острова, а вода связана с углами
    assert_eq!(grid.count_islands(), 4);
    assert_eq!(grid.count_lakes(), 0);

    // С диагоналями ромб — один остров, центр отрезан от углов
    grid.set_include_diagonal(true);
    assert_eq!(grid.count_islands(), 1);
    assert_eq!(grid.count_lakes(), 1);
}

#[test]
fn diagonal_water_cells_form_one_lake_without_diagonal_land() {
    let layout = "#####\n#.###\n##.##\n#####\n#####";
    let mut grid = grid(layout);
    assert_eq!(grid.count_lakes(), 1);
    assert_eq!(grid.lakes()[0].size(), 2);

    grid.set_include_diagonal(true);
    assert_eq!(grid.count_lakes(), 2);
    assert_eq!(grid.count_islands(), 1);
}

#[test]
fn repeated_counts_are_stable() {
    let mut grid = random_grid(11, 8, 8);
    let first = grid.count_islands();
    assert_eq!(grid.count_islands(), first);
    let lakes = grid.count_lakes();
    assert_eq!(grid.count_lakes(), lakes);
    assert_eq!(grid.count_islands(), first);
}

#[test]
fn each_pass_erases_previous_labels() {
    let mut grid = grid("###\n#.#\n###");
    grid.count_islands();
    assert_eq!(grid.get(0, 0).unwrap().kind(), CellKind::Island);
    grid.count_lakes();
    assert_eq!(grid.get(0, 0).unwrap().kind(), CellKind::Unknown);
    assert_eq!(grid.get(1, 1).unwrap().kind(), CellKind::Lake);
}

#[test]
fn every_land_cell_belongs_to_exactly_one_island() {
    for seed in 0..20 {
        let mut grid = random_grid(seed, 9, 7);
        let islands = grid.islands();

        let total: usize = islands.iter().map(|g| g.size()).sum();
        assert_eq!(total, grid.land_count(), "seed {seed}");

        let mut members: Vec<Position> = islands.iter().flat_map(|g| g.cells.clone()).collect();
        members.sort();
        members.dedup();
        assert_eq!(members.len(), total, "seed {seed}");

        for cell in grid.cells() {
            let expected = if cell.is_land() {
                CellKind::Island
            } else {
                CellKind::Unknown
            };
            assert_eq!(cell.kind(), expected, "seed {seed}");
        }
    }
}

#[test]
fn island_count_matches_reference_components() {
    for seed in 0..20 {
        let mut grid = random_grid(seed + 100, 10, 10);
        let perpendicular = reference_island_count(&grid, Adjacency::Perpendicular);
        let all = reference_island_count(&grid, Adjacency::All);

        assert_eq!(grid.count_islands(), perpendicular, "seed {seed}");
        grid.set_include_diagonal(true);
        assert_eq!(grid.count_islands(), all, "seed {seed}");
        assert!(all <= perpendicular);
    }
}

#[test]
fn lakes_never_touch_the_edge() {
    for seed in 0..20 {
        let mut grid = random_grid(seed + 200, 8, 8);
        for diagonal in [false, true] {
            grid.set_include_diagonal(diagonal);
            for lake in grid.lakes() {
                for pos in &lake.cells {
                    assert!(pos.row > 0 && pos.row < 7, "seed {seed}");
                    assert!(pos.col > 0 && pos.col < 7, "seed {seed}");
                    assert_eq!(grid.get(pos.row, pos.col).unwrap().kind(), CellKind::Lake);
                }
            }
        }
    }
}

#[test]
fn survey_reports_both_passes() {
    let mut grid = grid(".....\n.###.\n.#.#.\n.###.\n....#");
    let survey = grid.survey();
    assert_eq!(survey.islands, 2);
    assert_eq!(survey.lakes, 1);
    assert_eq!(survey.island_sizes, vec![8, 1]);
    assert_eq!(survey.lake_sizes, vec![1]);
    assert_eq!(survey.land_cells, 9);
    assert_eq!(survey.water_cells, 16);

    let json = serde_json::to_value(&survey).unwrap();
    assert_eq!(json["lakes"], 1);
}

#[test]
fn toggling_cells_updates_counts() {
    let mut grid = Grid::new(3, 3).unwrap();
    for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)] {
        grid.toggle_cell(row, col).unwrap();
    }
    assert_eq!(grid.count_islands(), 1);
    assert_eq!(grid.count_lakes(), 0);

    grid.toggle_cell(2, 2).unwrap();
    assert_eq!(grid.count_lakes(), 1);
}

#[test]
fn lake_validity_requires_four_perpendicular_neighbors() {
    let grid = Grid::new(3, 3).unwrap();
    let center = grid.get(1, 1).unwrap();
    assert!(LakeRule.is_valid(&grid, center));
    for (row, col) in [(0, 0), (0, 1), (1, 2), (2, 2)] {
        assert!(!LakeRule.is_valid(&grid, grid.get(row, col).unwrap()));
    }

    // Ячейка чужой сетки за пределами этой не может быть озером
    let big = Grid::new(5, 5).unwrap();
    assert!(!LakeRule.is_valid(&grid, big.get(3, 3).unwrap()));
}
