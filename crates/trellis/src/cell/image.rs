//! ASCII-art image cell content.

use crate::util::{blank, clip, display_width};

/// An image made of character rows, rendered centered on its canvas.
///
/// Rows may differ in length; the natural width is the display width of
/// the first row, matching the centering offset calculation. Rendering
/// places the image at floor-division offsets inside the target canvas
/// and clips anything past the right edge.
///
/// # Example
///
/// ```rust
/// use trellis::Image;
///
/// let arrow = Image::new().row(" # ").row("###");
/// assert_eq!(arrow.rows().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    rows: Vec<String>,
}

impl Image {
    /// Create an empty image.
    pub fn new() -> Self {
        Image::default()
    }

    /// Append a row, consuming and returning the image for chaining.
    pub fn row(mut self, row: impl Into<String>) -> Self {
        self.rows.push(row.into());
        self
    }

    /// Append a row in place.
    pub fn push_row(&mut self, row: impl Into<String>) {
        self.rows.push(row.into());
    }

    /// The image's rows.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub(crate) fn natural_width(&self) -> usize {
        self.rows.first().map(|row| display_width(row)).unwrap_or(0)
    }

    pub(crate) fn natural_height(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn render(&self, height: usize, width: usize) -> Vec<String> {
        let mut out = vec![blank(width); height];
        if self.rows.is_empty() || height == 0 || width == 0 {
            return out;
        }

        let offset_y = height.saturating_sub(self.natural_height()) / 2;
        let offset_x = width.saturating_sub(self.natural_width()) / 2;

        for (i, row) in self.rows.iter().enumerate() {
            let y = offset_y + i;
            if y >= height {
                break;
            }
            let art = clip(row, width - offset_x);
            let mut line = blank(offset_x);
            line.push_str(&art);
            line.push_str(&blank(width - offset_x - display_width(&art)));
            out[y] = line;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_size() {
        let img = Image::new().row("####").row("##");
        assert_eq!(img.natural_width(), 4);
        assert_eq!(img.natural_height(), 2);

        assert_eq!(Image::new().natural_width(), 0);
        assert_eq!(Image::new().natural_height(), 0);
    }

    #[test]
    fn test_render_at_natural_size() {
        let img = Image::new().row("##").row("##");
        assert_eq!(img.render(2, 2), ["##", "##"]);
    }

    #[test]
    fn test_render_centers_horizontally() {
        let img = Image::new().row("##");
        assert_eq!(img.render(1, 6), ["  ##  "]);
        // Floor division leaves the extra column on the right.
        assert_eq!(img.render(1, 5), [" ##  "]);
    }

    #[test]
    fn test_render_centers_vertically() {
        let img = Image::new().row("#");
        assert_eq!(img.render(3, 1), [" ", "#", " "]);
        assert_eq!(img.render(4, 1), [" ", "#", " ", " "]);
    }

    #[test]
    fn test_render_clips_past_right_edge() {
        let img = Image::new().row("abcdef");
        assert_eq!(img.render(1, 4), ["abcd"]);
    }

    #[test]
    fn test_render_clips_ragged_rows() {
        // Natural width comes from the first row; the longer second row
        // is clipped at the canvas edge.
        let img = Image::new().row("##").row("######");
        assert_eq!(img.render(2, 4), [" ## ", " ###"]);
    }

    #[test]
    fn test_render_drops_rows_past_bottom() {
        let img = Image::new().row("a").row("b").row("c");
        assert_eq!(img.render(2, 1), ["a", "b"]);
    }

    #[test]
    fn test_render_empty_image_is_blank() {
        let img = Image::new();
        assert_eq!(img.render(2, 3), ["   ", "   "]);
    }

    #[test]
    fn test_render_zero_canvas() {
        let img = Image::new().row("#");
        assert!(img.render(0, 3).is_empty());
        assert_eq!(img.render(2, 0), ["", ""]);
    }
}
