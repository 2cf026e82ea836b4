//! Line helpers for concrete menu bodies

use super::{CONTENT_WIDTH, center, pad_right};
use crate::theme::Palette;

/// `|  ~~~~~ [ Title ] ~~~~~  |` in the header color
pub fn title_line(title: &str, palette: &Palette) -> String {
    let text = center(&format!(" [ {title} ] "), CONTENT_WIDTH - 10, '~');
    let row = palette.paint(&center(&text, CONTENT_WIDTH, ' '), palette.header);
    format!("| {row} |\n")
}

/// Left-aligned body row
pub fn text_line(text: &str) -> String {
    format!("| {} |\n", pad_right(text, CONTENT_WIDTH))
}

/// `|-----|` row inside a body
pub fn separator_line() -> String {
    super::divider()
}

/// One ` n) label` row
pub fn option_line(token: &str, label: &str) -> String {
    text_line(&format!(" {token}) {label}"))
}

/// Number `labels` starting at `offset` and return `(token, row)` pairs.
///
/// Menus that spread a long list over several pages pass the number of
/// entries shown on earlier pages so numbering continues.
pub fn numbered_options<'a>(
    labels: impl IntoIterator<Item = &'a str>,
    offset: usize,
) -> Vec<(String, String)> {
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let token = (i + offset).to_string();
            let row = option_line(&token, label);
            (token, row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::LINE_WIDTH;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_rows_have_line_width() {
        let palette = Palette::plain();
        for row in [
            title_line("Main Menu", &palette),
            text_line("Options:"),
            option_line("1", "[Install]"),
            separator_line(),
        ] {
            assert_eq!(row.trim_end_matches('\n').width(), LINE_WIDTH, "{row:?}");
        }
    }

    #[test]
    fn test_title_is_decorated() {
        let row = title_line("Main Menu", &Palette::plain());
        assert!(row.contains("~ [ Main Menu ] ~"));
    }

    #[test]
    fn test_numbering_continues_from_offset() {
        let rows = numbered_options(["Klipper", "Moonraker"], 5);
        assert_eq!(rows[0].0, "5");
        assert_eq!(rows[1].0, "6");
        assert!(rows[1].1.starts_with("|  6) Moonraker"));
    }
}
