//! The table grid and its layout/rendering engine.

use std::fmt;

use crate::cell::Cell;
use crate::error::TableError;

/// A fixed-size 2D grid of [`Cell`]s with a bordered ASCII renderer.
///
/// Dimensions are set at construction and never change; every slot
/// starts [`Cell::Empty`]. Tables are plain values: `clone` deep-copies
/// every cell (including embedded snapshots) and `==` compares
/// structurally, so no two live tables ever share mutable storage.
///
/// Rendering sizes each column to the widest natural width in it and
/// each row to the tallest natural height, renders every cell to that
/// shared size, and stitches the blocks with `+`, `-` and `|` borders.
///
/// # Example
///
/// ```rust
/// use trellis::{Align, Cell, Table};
///
/// let mut table = Table::new(1, 2);
/// table.set_cell(0, 0, Cell::text("one\ntwo", Align::Left)).unwrap();
/// table.set_cell(0, 1, Cell::text("three", Align::Right)).unwrap();
/// assert_eq!(
///     table.render(),
///     "+---+-----+\n\
///      |one|three|\n\
///      |two|     |\n\
///      +---+-----+\n"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Table {
    /// Create a `rows` x `cols` table of empty cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Table {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, TableError> {
        if row >= self.rows || col >= self.cols {
            return Err(TableError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Borrow the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, TableError> {
        let i = self.index(row, col)?;
        Ok(&self.cells[i])
    }

    /// Mutably borrow the cell at `(row, col)` for in-place mutation.
    ///
    /// This is the one path that edits placed content directly instead
    /// of replacing it; the exclusive borrow guarantees nothing else can
    /// observe the cell while it changes.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, TableError> {
        let i = self.index(row, col)?;
        Ok(&mut self.cells[i])
    }

    /// Replace the cell at `(row, col)`.
    ///
    /// Accepts anything convertible to a [`Cell`]: a cell value, a
    /// [`TextBlock`](crate::TextBlock), an [`Image`](crate::Image), or a
    /// table. Passing `&Table` takes a deep snapshot at call time, so
    /// later mutation of the original never shows through the embedded
    /// copy (and vice versa).
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        cell: impl Into<Cell>,
    ) -> Result<(), TableError> {
        let i = self.index(row, col)?;
        self.cells[i] = cell.into();
        Ok(())
    }

    /// Shared width of each column: the maximum natural width among the
    /// cells in it.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.cols];
        for row in 0..self.rows {
            for (col, width) in widths.iter_mut().enumerate() {
                *width = (*width).max(self.cells[row * self.cols + col].natural_width());
            }
        }
        widths
    }

    /// Shared height of each row: the maximum natural height among the
    /// cells in it.
    fn row_heights(&self) -> Vec<usize> {
        let mut heights = vec![0; self.rows];
        for (row, height) in heights.iter_mut().enumerate() {
            for col in 0..self.cols {
                *height = (*height).max(self.cells[row * self.cols + col].natural_height());
            }
        }
        heights
    }

    /// Render the full table, borders included, every line
    /// newline-terminated.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let heights = self.row_heights();

        let mut border = String::from("+");
        for width in &widths {
            border.push_str(&"-".repeat(*width));
            border.push('+');
        }

        writeln!(f, "{border}")?;
        for row in 0..self.rows {
            let blocks: Vec<Vec<String>> = (0..self.cols)
                .map(|col| self.cells[row * self.cols + col].render(heights[row], widths[col]))
                .collect();

            for line in 0..heights[row] {
                f.write_str("|")?;
                for block in &blocks {
                    f.write_str(&block[line])?;
                    f.write_str("|")?;
                }
                f.write_str("\n")?;
            }
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Align, CellKind, Image};

    #[test]
    fn test_new_table_is_all_empty() {
        let t = Table::new(2, 3);
        assert_eq!(t.rows(), 2);
        assert_eq!(t.cols(), 3);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(t.cell(row, col).unwrap(), &Cell::Empty);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut t = Table::new(2, 2);
        let err = TableError::OutOfBounds {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert_eq!(t.cell(2, 0).unwrap_err(), err);
        assert_eq!(t.cell_mut(2, 0).unwrap_err(), err);
        assert_eq!(t.set_cell(2, 0, Cell::Empty).unwrap_err(), err);
        assert!(t.cell(0, 2).is_err());
        assert!(t.cell(1, 1).is_ok());
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        let mut t = Table::new(1, 1);
        t.set_cell(0, 0, Cell::text("hi", Align::Left)).unwrap();
        assert_eq!(t.cell(0, 0).unwrap().kind(), CellKind::Text);
        t.set_cell(0, 0, Image::new().row("#")).unwrap();
        assert_eq!(t.cell(0, 0).unwrap().kind(), CellKind::Image);
    }

    #[test]
    fn test_empty_one_by_one_collapses() {
        // A zero-size cell collapses its row and column, leaving only
        // the two border lines.
        assert_eq!(Table::new(1, 1).render(), "++\n++\n");
    }

    #[test]
    fn test_zero_dimension_tables_render() {
        assert_eq!(Table::new(0, 0).render(), "+\n");
        assert_eq!(Table::new(0, 3).render(), "++++\n");
        assert_eq!(Table::new(2, 0).render(), "+\n+\n+\n");
    }

    #[test]
    fn test_column_and_row_maxima() {
        let mut t = Table::new(2, 2);
        t.set_cell(0, 0, Cell::text("wide cell here", Align::Left))
            .unwrap();
        t.set_cell(1, 0, Cell::text("a\nb\nc", Align::Left)).unwrap();
        t.set_cell(1, 1, Cell::text("x", Align::Left)).unwrap();
        assert_eq!(t.column_widths(), [14, 1]);
        assert_eq!(t.row_heights(), [1, 3]);
    }

    #[test]
    fn test_display_matches_render() {
        let mut t = Table::new(1, 1);
        t.set_cell(0, 0, Cell::text("x", Align::Left)).unwrap();
        assert_eq!(format!("{t}"), t.render());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut t = Table::new(1, 1);
        t.set_cell(0, 0, Cell::text("original", Align::Left)).unwrap();
        let mut copy = t.clone();
        copy.cell_mut(0, 0)
            .unwrap()
            .as_text_mut()
            .unwrap()
            .set_text("changed");
        assert_eq!(t.cell(0, 0).unwrap().as_text().unwrap().lines(), ["original"]);
        assert_ne!(t, copy);
    }

    #[test]
    fn test_structural_equality_requires_dimensions() {
        assert_ne!(Table::new(1, 2), Table::new(2, 1));
        assert_eq!(Table::new(2, 2), Table::new(2, 2));
    }
}
