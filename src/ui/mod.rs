//! Fixed-width text rendering
//!
//! This module is organized into submodules:
//! - `header` - Page header shown above every menu
//! - `footer` - Navigation footers (quit, back, back/help)
//! - `body` - Line helpers for concrete menu bodies
//!
//! Every block is exactly [`LINE_WIDTH`] columns wide. Padding is always
//! computed on the uncolored text so colored and plain output line up.

pub mod body;
pub mod footer;
pub mod header;

use unicode_width::UnicodeWidthStr;

/// Visible columns between `"| "` and `" |"`
pub const CONTENT_WIDTH: usize = 53;

/// Columns of each half of a split footer row (`"| " half " | " half " |"`)
pub const HALF_WIDTH: usize = (CONTENT_WIDTH - 3) / 2;

/// Full line width including the border characters
pub const LINE_WIDTH: usize = CONTENT_WIDTH + 4;

pub use body::{numbered_options, option_line, separator_line, text_line, title_line};
pub use footer::{back_footer, back_help_footer, quit_footer, render_footer};
pub use header::render_header;

/// Center `text` in `width` columns, filling with `fill`.
///
/// Odd padding puts the extra column on the right. Text wider than `width`
/// is returned unchanged.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.width();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    let mut out = String::with_capacity(text.len() + pad);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, pad - left));
    out
}

/// Left-align `text` in `width` columns.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.width();
    if len >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - len))
}

fn rule(left: char, fill: char, right: char) -> String {
    let mut out = String::with_capacity(LINE_WIDTH + 2);
    out.push(left);
    out.extend(std::iter::repeat_n(fill, CONTENT_WIDTH + 2));
    out.push(right);
    out.push('\n');
    out
}

/// `/=====\` opening border
pub fn top_border() -> String {
    rule('/', '=', '\\')
}

/// `\=====/` closing border
pub fn bottom_border() -> String {
    rule('\\', '=', '/')
}

/// `|-----|` divider between body and footer
pub fn divider() -> String {
    rule('|', '-', '|')
}
