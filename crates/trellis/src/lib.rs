//! # Trellis - Nested ASCII Table Rendering
//!
//! `trellis` renders a 2D grid of heterogeneous content cells into a
//! bordered, fixed-width text table. A cell can be empty, aligned
//! multiline text, an ASCII-art image, or a complete snapshot of another
//! table, nested to arbitrary depth.
//!
//! ## Core Concepts
//!
//! - [`Cell`]: closed sum over the four content kinds; knows its natural
//!   size and renders into an exact-size block of text
//! - [`Table`]: fixed `rows x cols` grid of cells; sizes each column and
//!   row to the largest natural size in it and stitches the rendered
//!   blocks with `+`, `-`, `|` borders
//! - Value semantics: cloning, copying, or embedding always deep-copies;
//!   no two live tables or cells share mutable storage
//! - [`TableError`]: the only failures are out-of-bounds access and
//!   asking a cell for a variant it does not hold
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis::{Align, Cell, Table};
//!
//! let mut inner = Table::new(1, 2);
//! inner.set_cell(0, 0, Cell::text("a", Align::Left)).unwrap();
//! inner.set_cell(0, 1, Cell::text("b", Align::Left)).unwrap();
//!
//! assert_eq!(inner.render(), "+-+-+\n|a|b|\n+-+-+\n");
//!
//! let mut outer = Table::new(1, 1);
//! // Embedding takes a deep snapshot; mutating `inner` afterwards
//! // leaves `outer` untouched.
//! outer.set_cell(0, 0, &inner).unwrap();
//!
//! // The embedded block keeps its own borders, one `|` deeper per
//! // nesting level.
//! assert_eq!(
//!     outer.render(),
//!     "+-----+\n\
//!      |+-+-+|\n\
//!      ||a|b||\n\
//!      |+-+-+|\n\
//!      +-----+\n"
//! );
//! ```
//!
//! ## Width Handling
//!
//! All sizing is in terminal display columns via `unicode-width`, so CJK
//! and other wide characters keep borders aligned. Content wider than
//! its target (only possible when rendering a cell directly below its
//! natural width) is hard-clipped at a character boundary.

mod cell;
mod error;
mod table;
mod util;

pub use cell::{Align, Cell, CellKind, Image, TextBlock};
pub use error::TableError;
pub use table::Table;
pub use util::{clip, display_width, pad_left, pad_right};
