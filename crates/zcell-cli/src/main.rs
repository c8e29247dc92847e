//! Command-line entry point for the `zcell` tool.
//!
//! Provides subcommands to encode geographic points into curve cells and
//! to inspect cells given in their bit-string form. The empty bit-string
//! stands for the depth-0 cell covering the whole domain.

use std::{process, str::FromStr};

use anyhow::Result;
use clap::{Parser, Subcommand};
use zcell::{Region, ZCell};

/// Rectangle parsed from `--bounds MINX,MINY:MAXX,MAXY`.
#[derive(Clone, Copy, Debug)]
struct Bounds {
    /// Lower corner, `(x, y)`.
    min: (f64, f64),
    /// Upper corner, `(x, y)`.
    max: (f64, f64),
}

impl FromStr for Bounds {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (min, max) = value
            .split_once(':')
            .ok_or_else(|| "bounds must be in MINX,MINY:MAXX,MAXY form".to_string())?;

        let parse_corner = |label: &str, corner: &str| -> Result<(f64, f64), String> {
            let (x, y) = corner
                .split_once(',')
                .ok_or_else(|| format!("{label} corner must be in X,Y form"))?;
            let parse_bound = |axis: &str, bound: &str| -> Result<f64, String> {
                bound
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| format!("invalid {label} {axis} value '{}'", bound.trim()))
            };
            Ok((parse_bound("x", x)?, parse_bound("y", y)?))
        };

        let min = parse_corner("min", min)?;
        let max = parse_corner("max", max)?;
        if min.0 >= max.0 || min.1 >= max.1 {
            return Err(format!(
                "bounds minimum ({}, {}) must lie below the maximum ({}, {})",
                min.0, min.1, max.0, max.1
            ));
        }

        Ok(Self { min, max })
    }
}

/// Parse a cell from its bit-string form.
fn parse_cell(value: &str) -> Result<ZCell, String> {
    value.parse::<ZCell>().map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "zcell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top-level CLI options and subcommands.
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `zcell` tool.
enum Commands {
    #[command(
        about = "Encode a geographic point as a curve cell",
        allow_negative_numbers = true
    )]
    /// Encode a latitude/longitude point at a chosen depth.
    Encode {
        #[arg(
            short = 'd',
            long = "depth",
            default_value_t = 8,
            help = "Quadtree depth of the produced cell"
        )]
        /// Quadtree depth of the produced cell.
        depth: u32,

        #[arg(
            long = "half-split",
            default_value_t = false,
            help = "Mark the cell as covering a double-width column"
        )]
        /// Mark the produced cell half-split.
        half_split: bool,

        #[arg(help = "Latitude in degrees, -90 to 90")]
        /// Latitude in degrees.
        lat: f64,

        #[arg(help = "Longitude in degrees, -180 to 180")]
        /// Longitude in degrees.
        lon: f64,
    },

    #[command(about = "Show position, depth and grid indices of a cell")]
    /// Decode a cell and print its fields.
    Info {
        #[arg(value_parser = parse_cell, help = "Cell in bit-string form")]
        /// Cell to inspect.
        cell: ZCell,
    },

    #[command(about = "List the four same-depth neighbours of a cell")]
    /// Print the neighbour in each compass direction.
    Neighbours {
        #[arg(value_parser = parse_cell, help = "Cell in bit-string form")]
        /// Cell to inspect.
        cell: ZCell,
    },

    #[command(about = "Show the ancestor of a cell")]
    /// Print the ancestor a number of levels up.
    Parent {
        #[arg(
            short = 'l',
            long = "levels",
            default_value_t = 1,
            help = "How many levels to go up"
        )]
        /// How many levels to go up.
        levels: u32,

        #[arg(value_parser = parse_cell, help = "Cell in bit-string form")]
        /// Cell to inspect.
        cell: ZCell,
    },

    #[command(about = "List the descendants of a cell")]
    /// Print the descendants a number of levels down, in curve order.
    Children {
        #[arg(
            short = 'l',
            long = "levels",
            default_value_t = 1,
            help = "How many levels to go down"
        )]
        /// How many levels to go down.
        levels: u32,

        #[arg(value_parser = parse_cell, help = "Cell in bit-string form")]
        /// Cell to inspect.
        cell: ZCell,
    },

    #[command(about = "Show the bounding box covered by a cell")]
    /// Print the covered region, geographic by default.
    Region {
        #[arg(
            long = "bounds",
            value_name = "MINX,MINY:MAXX,MAXY",
            help = "Coordinate range to scale the region into (defaults to lon/lat degrees)"
        )]
        /// Optional coordinate range to scale into.
        bounds: Option<Bounds>,

        #[arg(value_parser = parse_cell, help = "Cell in bit-string form")]
        /// Cell to inspect.
        cell: ZCell,
    },

    #[command(about = "Add two cells coordinate-wise")]
    /// Print the coordinate-wise sum of two cells.
    Add {
        #[arg(value_parser = parse_cell, help = "First cell in bit-string form")]
        /// First operand.
        first: ZCell,

        #[arg(value_parser = parse_cell, help = "Second cell in bit-string form")]
        /// Second operand.
        second: ZCell,
    },
}

/// Handle the `encode` subcommand.
fn handle_encode(lat: f64, lon: f64, depth: u32, half_split: bool) -> Result<()> {
    let cell = ZCell::from_lat_lon_half_split(lat, lon, depth, half_split)?;
    println!("{cell}");
    Ok(())
}

/// Handle the `info` subcommand.
fn handle_info(cell: ZCell) {
    let (x, y) = cell.to_xy();
    println!("position {}", cell.position());
    println!("depth {}", cell.depth());
    println!("half-split {}", cell.is_half_split());
    println!("x {x}");
    println!("y {y}");
}

/// Handle the `neighbours` subcommand.
fn handle_neighbours(cell: ZCell) {
    for (direction, neighbour) in cell.neighbours().iter() {
        println!("{direction} {neighbour}");
    }
}

/// Handle the `children` subcommand.
fn handle_children(cell: ZCell, levels: u32) -> Result<()> {
    for child in cell.children(levels)? {
        println!("{child}");
    }
    Ok(())
}

/// Handle the `region` subcommand.
fn handle_region(cell: ZCell, bounds: Option<Bounds>) {
    let Region { min, max } = match bounds {
        Some(bounds) => cell.region_in(bounds.min, bounds.max),
        None => cell.region(),
    };
    println!("min {}, {}", min.0, min.1);
    println!("max {}, {}", max.0, max.1);
}

/// Dispatch the parsed command line.
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Encode {
            depth,
            half_split,
            lat,
            lon,
        } => handle_encode(lat, lon, depth, half_split)?,
        Commands::Info { cell } => handle_info(cell),
        Commands::Neighbours { cell } => handle_neighbours(cell),
        Commands::Parent { levels, cell } => println!("{}", cell.parent(levels)),
        Commands::Children { levels, cell } => handle_children(cell, levels)?,
        Commands::Region { bounds, cell } => handle_region(cell, bounds),
        Commands::Add { first, second } => println!("{}", first.add(second)),
    }
    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{e}");
        process::exit(1);
    }
}
