//! Cell content variants and their sizing/rendering contract.
//!
//! A [`Cell`] is a closed sum over the four content kinds a table slot
//! can hold. Every variant knows its natural size and can render itself
//! into a block of exactly the requested dimensions, cropping or padding
//! as needed. Cells are plain values: cloning one (directly, or
//! transitively through a table copy or embed) always yields
//! independently owned content.

mod image;
mod text;

use std::fmt;

pub use image::Image;
pub use text::{Align, TextBlock};

use crate::error::TableError;
use crate::table::Table;
use crate::util::{blank, clip, display_width, pad_right};

/// The content of one table slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// No content; renders as blank space.
    #[default]
    Empty,
    /// Aligned multiline text.
    Text(TextBlock),
    /// An ASCII-art image, centered when the slot is larger.
    Image(Image),
    /// A fully independent snapshot of another table.
    Nested(Box<Table>),
}

/// Discriminant of a [`Cell`], used by the checked accessors and in
/// error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// [`Cell::Empty`]
    Empty,
    /// [`Cell::Text`]
    Text,
    /// [`Cell::Image`]
    Image,
    /// [`Cell::Nested`]
    Nested,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Empty => "empty",
            CellKind::Text => "text",
            CellKind::Image => "image",
            CellKind::Nested => "nested table",
        };
        f.write_str(name)
    }
}

impl Cell {
    /// Shorthand for a text cell.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trellis::{Align, Cell};
    ///
    /// let cell = Cell::text("total:\n42", Align::Right);
    /// assert_eq!(cell.natural_width(), 6);
    /// assert_eq!(cell.natural_height(), 2);
    /// ```
    pub fn text(text: impl AsRef<str>, align: Align) -> Self {
        Cell::Text(TextBlock::new(text, align))
    }

    /// The variant this cell holds.
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Empty => CellKind::Empty,
            Cell::Text(_) => CellKind::Text,
            Cell::Image(_) => CellKind::Image,
            Cell::Nested(_) => CellKind::Nested,
        }
    }

    /// The cell's intrinsic content width, before any row/column sizing.
    pub fn natural_width(&self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::Text(block) => block.natural_width(),
            Cell::Image(img) => img.natural_width(),
            Cell::Nested(table) => rendered_lines(table)
                .iter()
                .map(|line| display_width(line))
                .max()
                .unwrap_or(0),
        }
    }

    /// The cell's intrinsic content height, before any row/column sizing.
    pub fn natural_height(&self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::Text(block) => block.natural_height(),
            Cell::Image(img) => img.natural_height(),
            Cell::Nested(table) => rendered_lines(table).len(),
        }
    }

    /// Render the cell into exactly `height` lines of exactly `width`
    /// display columns each, cropping or padding as needed.
    ///
    /// A nested table renders at its own natural size first; the
    /// resulting block is then clipped or padded to the target, never
    /// re-laid-out.
    pub fn render(&self, height: usize, width: usize) -> Vec<String> {
        match self {
            Cell::Empty => vec![blank(width); height],
            Cell::Text(block) => block.render(height, width),
            Cell::Image(img) => img.render(height, width),
            Cell::Nested(table) => {
                let lines = rendered_lines(table);
                (0..height)
                    .map(|i| match lines.get(i) {
                        Some(line) => pad_right(&clip(line, width), width),
                        None => blank(width),
                    })
                    .collect()
            }
        }
    }

    /// Borrow the text payload, or fail if this is not a text cell.
    pub fn as_text(&self) -> Result<&TextBlock, TableError> {
        match self {
            Cell::Text(block) => Ok(block),
            other => Err(wrong_kind(CellKind::Text, other)),
        }
    }

    /// Mutably borrow the text payload, or fail if this is not a text cell.
    pub fn as_text_mut(&mut self) -> Result<&mut TextBlock, TableError> {
        match self {
            Cell::Text(block) => Ok(block),
            other => Err(wrong_kind(CellKind::Text, other)),
        }
    }

    /// Borrow the image payload, or fail if this is not an image cell.
    pub fn as_image(&self) -> Result<&Image, TableError> {
        match self {
            Cell::Image(img) => Ok(img),
            other => Err(wrong_kind(CellKind::Image, other)),
        }
    }

    /// Mutably borrow the image payload, or fail if this is not an image cell.
    pub fn as_image_mut(&mut self) -> Result<&mut Image, TableError> {
        match self {
            Cell::Image(img) => Ok(img),
            other => Err(wrong_kind(CellKind::Image, other)),
        }
    }

    /// Borrow the embedded table, or fail if this is not a nested cell.
    pub fn as_table(&self) -> Result<&Table, TableError> {
        match self {
            Cell::Nested(table) => Ok(table),
            other => Err(wrong_kind(CellKind::Nested, other)),
        }
    }

    /// Mutably borrow the embedded table, or fail if this is not a
    /// nested cell.
    pub fn as_table_mut(&mut self) -> Result<&mut Table, TableError> {
        match self {
            Cell::Nested(table) => Ok(table),
            other => Err(wrong_kind(CellKind::Nested, other)),
        }
    }
}

fn wrong_kind(expected: CellKind, found: &Cell) -> TableError {
    TableError::WrongKind {
        expected,
        found: found.kind(),
    }
}

/// The table's full render split into lines, with the trailing newline
/// dropped.
fn rendered_lines(table: &Table) -> Vec<String> {
    table.render().lines().map(str::to_string).collect()
}

impl From<TextBlock> for Cell {
    fn from(block: TextBlock) -> Self {
        Cell::Text(block)
    }
}

impl From<Image> for Cell {
    fn from(img: Image) -> Self {
        Cell::Image(img)
    }
}

impl From<Table> for Cell {
    /// Embedding an owned table: the move itself is the snapshot.
    fn from(table: Table) -> Self {
        Cell::Nested(Box::new(table))
    }
}

impl From<&Table> for Cell {
    /// Embedding a borrowed table takes a deep snapshot at call time;
    /// later mutation of either side never crosses the boundary.
    fn from(table: &Table) -> Self {
        Cell::Nested(Box::new(table.clone()))
    }
}
