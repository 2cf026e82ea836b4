//! Navigation footers
//!
//! All three variants share the divider and closing border of the header so
//! they stay aligned with it.

use super::{CONTENT_WIDTH, HALF_WIDTH, bottom_border, center, divider};
use crate::menu::FooterKind;
use crate::theme::Palette;

const QUIT_TEXT: &str = "Q) Quit";
const BACK_TEXT: &str = "B) « Back";
const HELP_TEXT: &str = "H) Help [?]";

/// Render the footer selected by `kind`.
pub fn render_footer(kind: FooterKind, palette: &Palette) -> String {
    match kind {
        FooterKind::Quit => quit_footer(palette),
        FooterKind::Back => back_footer(palette),
        FooterKind::BackHelp => back_help_footer(palette),
    }
}

pub fn quit_footer(palette: &Palette) -> String {
    single(QUIT_TEXT, palette, palette.quit)
}

pub fn back_footer(palette: &Palette) -> String {
    single(BACK_TEXT, palette, palette.back)
}

pub fn back_help_footer(palette: &Palette) -> String {
    let back = palette.paint(&center(BACK_TEXT, HALF_WIDTH, ' '), palette.back);
    let help = palette.paint(&center(HELP_TEXT, HALF_WIDTH, ' '), palette.help);
    let mut out = divider();
    out.push_str(&format!("| {back} | {help} |\n"));
    out.push_str(&bottom_border());
    out
}

fn single(text: &str, palette: &Palette, color: crossterm::style::Color) -> String {
    let row = palette.paint(&center(text, CONTENT_WIDTH, ' '), color);
    let mut out = divider();
    out.push_str(&format!("| {row} |\n"));
    out.push_str(&bottom_border());
    out
}
