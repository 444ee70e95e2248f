//! Multiline text cell content.

use serde::{Deserialize, Serialize};

use crate::util::{clip, display_width, pad_left, pad_right};

/// Text alignment within a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
}

/// A block of text lines with an alignment.
///
/// The natural width is the widest line; the natural height is the line
/// count. When rendered at a larger size the block is padded with spaces
/// on the alignment side; lines past the end come out blank. A line wider
/// than the target is hard-clipped at a character boundary with no
/// marker — this can only happen when a cell is rendered directly below
/// its natural width, never through [`Table::render`](crate::Table).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<String>,
    align: Align,
}

impl TextBlock {
    /// Create a text block by splitting `text` into lines.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trellis::{Align, TextBlock};
    ///
    /// let block = TextBlock::new("first\nsecond", Align::Left);
    /// assert_eq!(block.lines().len(), 2);
    /// ```
    pub fn new(text: impl AsRef<str>, align: Align) -> Self {
        let mut block = TextBlock {
            lines: Vec::new(),
            align,
        };
        block.set_text(text);
        block
    }

    /// Replace the block's content, re-splitting `text` into lines.
    pub fn set_text(&mut self, text: impl AsRef<str>) {
        self.lines = text.as_ref().lines().map(str::to_string).collect();
    }

    /// The parsed lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The block's alignment.
    pub fn align(&self) -> Align {
        self.align
    }

    /// Change the block's alignment.
    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    pub(crate) fn natural_width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| display_width(line))
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn natural_height(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn render(&self, height: usize, width: usize) -> Vec<String> {
        (0..height)
            .map(|i| {
                let line = self.lines.get(i).map(String::as_str).unwrap_or("");
                let line = clip(line, width);
                match self.align {
                    Align::Left => pad_right(&line, width),
                    Align::Right => pad_left(&line, width),
                }
            })
            .collect()
    }
}
