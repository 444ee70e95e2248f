//! A worked example: build a mixed-content table and nest it into
//! itself a configurable number of times.
//!
//! ```text
//! gallery            # render the showcase table
//! gallery --depth 3  # re-embed it into its own top-left cell 3 times
//! ```

use anyhow::Result;
use clap::Parser;
use trellis::{Align, Cell, Image, Table};

#[derive(Parser)]
#[command(name = "gallery", about = "Render a nested ASCII table showcase")]
struct Args {
    /// How many times to re-embed the table into its own top-left cell.
    #[arg(long, default_value_t = 0)]
    depth: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut table = showcase()?;
    for _ in 0..args.depth {
        let snapshot = table.clone();
        table.set_cell(0, 0, snapshot)?;
    }

    print!("{table}");
    Ok(())
}

fn showcase() -> Result<Table> {
    let mut legend = Table::new(2, 2);
    legend.set_cell(0, 0, Cell::text("cell", Align::Left))?;
    legend.set_cell(0, 1, Cell::text("content", Align::Left))?;
    legend.set_cell(1, 0, Cell::text("text", Align::Left))?;
    legend.set_cell(1, 1, Cell::text("image", Align::Left))?;

    let mut table = Table::new(3, 2);
    table.set_cell(0, 0, Cell::text("Gallery\nof nested tables", Align::Left))?;
    table.set_cell(0, 1, &legend)?;
    table.set_cell(
        1,
        0,
        Image::new()
            .row("  *  ")
            .row(" *** ")
            .row("*****")
            .row("  #  "),
    )?;
    table.set_cell(1, 1, Cell::text("a tree,\ncentered", Align::Right))?;
    table.set_cell(2, 1, Cell::text("the cell to the left stays empty", Align::Left))?;
    Ok(table)
}
