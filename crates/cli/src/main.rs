use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{
    timed, AxialHexCoordinate, GridConfig, GridLayout, HexGrid, Point2,
};
use log::{info, LevelFilter};
use serde::Serialize;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for generating hexagonal grids. The generated grid is printed to
/// stdout; nothing is written to disk.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the grid to be generated. Supported
    /// formats: JSON, TOML. If omitted, the default config is used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The format to print the grid in. Supported formats:
    ///
    /// cells - JSON array of every cell's axial coordinates, in grid order
    ///
    /// rows - JSON array of rows, where each row holds the cells that share
    ///   an r coordinate
    ///
    /// polygons - JSON array with the pixel center and corners of each cell
    ///
    /// cfg - The full config object used for the grid, in TOML format
    #[structopt(short, long, default_value = "cells")]
    format: OutputFormat,

    /// The logging level to use during grid generation. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options.
    /// Logs go to stderr, so they never mix with the output
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for `--format`!
    /// Every cell in the grid
    Cells,
    /// Cells grouped into rows by r
    Rows,
    /// Pixel geometry for each cell, for drawing
    Polygons,
    /// The grid's full config in a human-readable format
    Cfg,
}

/// Pixel geometry for a single cell
#[derive(Debug, Serialize)]
struct CellPolygon {
    cell: AxialHexCoordinate,
    center: Point2,
    corners: [Point2; 6],
}

impl CellPolygon {
    fn new(layout: &GridLayout, cell: AxialHexCoordinate) -> Self {
        Self {
            cell,
            center: layout.hex_to_pixel(cell),
            corners: layout.polygon_corners(cell),
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Render the grid (or its config) in the given format
fn gen_output(
    output_format: OutputFormat,
    config: &GridConfig,
    grid: &HexGrid,
) -> anyhow::Result<String> {
    let output = match output_format {
        OutputFormat::Cells => {
            serde_json::to_string_pretty(&grid.iter().collect::<Vec<_>>())?
        }
        OutputFormat::Rows => serde_json::to_string_pretty(&grid.rows())?,
        OutputFormat::Polygons => {
            let polygons: Vec<CellPolygon> = grid
                .iter()
                .map(|cell| CellPolygon::new(grid.layout(), cell))
                .collect();
            serde_json::to_string_pretty(&polygons)?
        }
        OutputFormat::Cfg => toml::to_string_pretty(config)
            .context("error serializing config")?,
    };
    Ok(output)
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    // stdout is reserved for the output itself
    env_logger::Builder::new()
        .filter_level(opt.log_level)
        .target(env_logger::Target::Stderr)
        .try_init()?;

    let config = match &opt.config {
        Some(config_path) => {
            let config = load_config(config_path)?;
            info!("Loaded config from {:?}", config_path);
            config
        }
        None => GridConfig::default(),
    };
    let grid = HexGrid::generate(config)?;

    let output = timed!(
        format!("Generating {} output", opt.format),
        gen_output(opt.format, &config, &grid)?
    );
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", output).context("error writing output")?;

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
