//! Генерация случайных карт суши и воды
//!
//! Два способа:
//! - `Noise` — фрактальный шум OpenSimplex2 с порогом, подобранным под целевую долю суши
//!   (получаются связные материки, острова и озёра);
//! - `Scatter` — каждая ячейка независимо становится сушей с вероятностью `land_ratio`.
//!
//! Результат детерминирован для одного и того же сида.

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use log::debug;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cell::CellState;
use crate::config::{GenerationMethod, GenerationSettings};
use crate::error::{GridError, GridResult};
use crate::grid::Grid;

impl GenerationSettings {
    /// Проверяет, что параметры генерации допустимы
    pub fn validate(&self) -> GridResult<()> {
        if !(0.0..=1.0).contains(&self.land_ratio) {
            return Err(GridError::InvalidSettings(format!(
                "land_ratio must be within [0, 1], got {}",
                self.land_ratio
            )));
        }
        let bad_frequency = self.frequency.is_nan() || self.frequency <= 0.0;
        if self.method == GenerationMethod::Noise && bad_frequency {
            return Err(GridError::InvalidSettings(format!(
                "frequency must be positive, got {}",
                self.frequency
            )));
        }
        Ok(())
    }
}

impl Grid {
    /// Создаёт сетку `rows × cols` со случайным рельефом
    pub fn generate(rows: usize, cols: usize, settings: &GenerationSettings) -> GridResult<Self> {
        settings.validate()?;
        let mut grid = Self::new(rows, cols)?;

        let states = match settings.method {
            GenerationMethod::Noise => noise_states(rows, cols, settings),
            GenerationMethod::Scatter => scatter_states(rows, cols, settings),
        };
        for (cell, state) in grid.cells.iter_mut().zip(states) {
            cell.set_state(state);
        }

        debug!(
            "generated {}x{} grid ({:?}, seed {}): {} land cells",
            rows,
            cols,
            settings.method,
            settings.seed,
            grid.land_count()
        );
        Ok(grid)
    }
}

fn scatter_states(rows: usize, cols: usize, settings: &GenerationSettings) -> Vec<CellState> {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(settings.seed);
    (0..rows * cols)
        .map(|_| {
            if rng.gen_bool(settings.land_ratio) {
                CellState::Land
            } else {
                CellState::Water
            }
        })
        .collect()
}

fn noise_states(rows: usize, cols: usize, settings: &GenerationSettings) -> Vec<CellState> {
    let mut noise = FastNoiseLite::new();
    noise.set_seed(Some(settings.seed as i32));
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_fractal_type(Some(FractalType::FBm));
    noise.set_fractal_octaves(Some(3));
    noise.set_frequency(Some(settings.frequency));

    let sample = |i: usize| {
        let x = (i % cols) as f32;
        let y = (i / cols) as f32;
        (noise.get_noise_2d(x, y) + 1.0) * 0.5
    };

    #[cfg(feature = "parallel")]
    let mut data: Vec<f32> = (0..rows * cols).into_par_iter().map(sample).collect();
    #[cfg(not(feature = "parallel"))]
    let mut data: Vec<f32> = (0..rows * cols).map(sample).collect();

    // Нормализация в [0, 1]
    let min_h = data.iter().fold(f32::INFINITY, |a, &b| a.min(b));
    let max_h = data.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
    for h in &mut data {
        *h = if max_h > min_h {
            (*h - min_h) / (max_h - min_h)
        } else {
            0.5
        };
    }

    // Подбор сдвига под долю суши
    let mut best_offset = 0.0;
    let mut best_diff = f32::INFINITY;
    for i in 0..=100 {
        let offset = (i as f32) / 100.0 - 0.5;
        let land_count = data.iter().filter(|&&h| h + offset > 0.5).count();
        let land_ratio = land_count as f32 / data.len() as f32;
        let diff = (land_ratio - settings.land_ratio as f32).abs();
        if diff < best_diff {
            best_diff = diff;
            best_offset = offset;
        }
    }

    data.into_iter()
        .map(|h| {
            if h + best_offset > 0.5 {
                CellState::Land
            } else {
                CellState::Water
            }
        })
        .collect()
}
