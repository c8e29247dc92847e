//! Minimal example: encode a point, inspect its cell, and walk the grid.

use std::error::Error;

use zcell::{Direction, ZCell};

fn main() -> Result<(), Box<dyn Error>> {
    // Depth-4 cell containing Munich (16x16 grid over the globe)
    let cell = ZCell::from_lat_lon(48.137, 11.575, 4)?;
    println!("cell {cell} (position {})", cell.position());

    let (x, y) = cell.to_xy();
    println!("grid indices: ({x}, {y})");

    let region = cell.region();
    println!(
        "covers lon {}..{}, lat {}..{}",
        region.min.0, region.max.0, region.min.1, region.max.1
    );

    let east = cell.neighbours()[Direction::East];
    println!("east neighbour: {east}");

    for child in cell.children(1)? {
        println!("child: {child}");
    }

    Ok(())
}
