use clap::Parser;
use islands::{Grid, GridSettings, Position};
use log::info;
use std::path::PathBuf;

/// Подсчёт островов и озёр на сетке суши и воды
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long, conflicts_with = "layout")]
    config: Option<PathBuf>,

    /// Путь к текстовой разметке (`#` — суша, `.` — вода)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Считать диагональную сушу связной
    #[arg(short, long)]
    diagonal: bool,

    /// Поменять сушу и воду местами перед подсчётом
    #[arg(long)]
    invert: bool,

    /// Переключить ячейку "строка,столбец" (можно указывать несколько раз)
    #[arg(short, long = "toggle")]
    toggles: Vec<Position>,

    /// Вывести итоговую сводку в JSON
    #[arg(long)]
    json: bool,
}

fn print_counts(grid: &mut Grid) {
    let islands = grid.count_islands();
    let lakes = grid.count_lakes();
    println!("Острова: {islands}, озёра: {lakes}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut grid = if let Some(path) = &cli.layout {
        info!("Загрузка разметки из {}", path.display());
        Grid::from_layout(&std::fs::read_to_string(path)?)?
    } else {
        let settings = match &cli.config {
            Some(path) => {
                info!("Загрузка конфигурации из {}", path.display());
                GridSettings::from_toml_file(path)?
            }
            None => GridSettings::default(),
        };
        settings.build_grid()?
    };

    if cli.diagonal {
        grid.set_include_diagonal(true);
    }
    if cli.invert {
        grid.invert();
    }

    info!(
        "Сетка {}×{}, диагонали: {}",
        grid.rows(),
        grid.cols(),
        if grid.include_diagonal() { "да" } else { "нет" }
    );
    print_counts(&mut grid);

    for pos in &cli.toggles {
        let state = grid.toggle_cell(pos.row, pos.col)?;
        println!("Ячейка {pos} -> {state:?}");
        print_counts(&mut grid);
    }

    let survey = grid.survey();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&survey)?);
    } else {
        print!("\n{}", grid.label_layout());
        println!(
            "\nСуша: {}, вода: {}, острова: {:?}, озёра: {:?}",
            survey.land_cells, survey.water_cells, survey.island_sizes, survey.lake_sizes
        );
    }

    Ok(())
}
