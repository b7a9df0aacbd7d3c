// src/config.rs
//! Конфигурация сетки
//!
//! Этот модуль определяет параметры, из которых строится исходная сетка:
//! - Размеры и режим диагональной смежности
//! - Готовая текстовая разметка (если задана)
//! - Параметры случайной генерации рельефа
//!
//! Все структуры поддерживают сериализацию в TOML/JSON для удобной настройки через конфигурационные файлы.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::GridResult;
use crate::grid::Grid;

/// Способ случайной генерации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GenerationMethod {
    /// Фрактальный шум с порогом: связные материки, острова и озёра
    #[default]
    Noise,
    /// Независимое заполнение ячеек с заданной вероятностью суши
    Scatter,
}

/// Параметры случайной генерации рельефа
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationSettings {
    /// Сид генератора случайных чисел (детерминированная генерация)
    #[serde(default)]
    pub seed: u64,

    /// Целевая доля суши (0.0 = только вода, 1.0 = только суша)
    #[serde(default = "default_land_ratio")]
    pub land_ratio: f64,

    #[serde(default)]
    pub method: GenerationMethod,

    /// Частота шума для `Noise`: чем больше, тем мельче острова
    #[serde(default = "default_frequency")]
    pub frequency: f32,
}

fn default_land_ratio() -> f64 {
    0.4
}
fn default_frequency() -> f32 {
    0.15
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            land_ratio: 0.4,
            method: GenerationMethod::Noise,
            frequency: 0.15,
        }
    }
}

/// Основные параметры сетки
///
/// Порядок построения: разметка `layout`, если она задана, иначе генерация по
/// `generation`, иначе пустая (водная) сетка `rows × cols`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridSettings {
    /// Число строк (по умолчанию 8)
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Число столбцов (по умолчанию 8)
    #[serde(default = "default_cols")]
    pub cols: usize,

    /// Считать ли диагональную сушу связной при подсчёте островов
    #[serde(default)]
    pub include_diagonal: bool,

    /// Текстовая разметка, по строке на ряд (`#` — суша, `.` — вода)
    #[serde(default)]
    pub layout: Option<Vec<String>>,

    #[serde(default)]
    pub generation: Option<GenerationSettings>,
}

fn default_rows() -> usize {
    8
}
fn default_cols() -> usize {
    8
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            include_diagonal: false,
            layout: None,
            generation: None,
        }
    }
}

impl GridSettings {
    /// Загружает параметры из TOML-файла
    ///
    /// # Пример
    /// ```toml
    /// # grid.toml
    /// rows = 5
    /// cols = 5
    /// include_diagonal = true
    ///
    /// [generation]
    /// seed = 42
    /// method = "Scatter"
    /// ```
    pub fn from_toml_file(path: impl AsRef<Path>) -> GridResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> GridResult<Self> {
        let settings: Self = toml::from_str(contents)?;
        Ok(settings)
    }

    /// Строит сетку по настройкам
    pub fn build_grid(&self) -> GridResult<Grid> {
        let mut grid = match (&self.layout, &self.generation) {
            (Some(lines), _) => {
                let grid = Grid::from_layout(&lines.join("\n"))?;
                if grid.rows() != self.rows || grid.cols() != self.cols {
                    warn!(
                        "layout is {}x{}, configured size {}x{} is ignored",
                        grid.rows(),
                        grid.cols(),
                        self.rows,
                        self.cols
                    );
                }
                grid
            }
            (None, Some(generation)) => Grid::generate(self.rows, self.cols, generation)?,
            (None, None) => Grid::new(self.rows, self.cols)?,
        };
        grid.set_include_diagonal(self.include_diagonal);
        Ok(grid)
    }
}
