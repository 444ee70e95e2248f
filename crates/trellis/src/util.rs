//! Display-width utilities shared by the cell renderers.
//!
//! All width math is in terminal display columns, not bytes or chars, so
//! CJK and other wide characters keep table borders aligned.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the display width of a string in terminal columns.
///
/// # Example
///
/// ```rust
/// use trellis::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads a string with trailing spaces to the given display width.
///
/// Strings already at or beyond `width` are returned unchanged; use
/// [`clip`] first when an exact width is required.
pub fn pad_right(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width.max(s.len()));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(s.width())));
    out
}

/// Pads a string with leading spaces to the given display width.
pub fn pad_left(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width.max(s.len()));
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(s.width())));
    out.push_str(s);
    out
}

/// Hard-cuts a string at a character boundary so it fits within `width`
/// display columns. No truncation marker is added.
///
/// A wide character straddling the limit is dropped entirely, so the
/// result may come in under `width`; pad afterwards when an exact width
/// is required.
pub fn clip(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

/// A line of `width` spaces.
pub(crate) fn blank(width: usize) -> String {
    " ".repeat(width)
}
