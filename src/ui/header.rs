//! Page header rendering

use super::{CONTENT_WIDTH, bottom_border, center, top_border};
use crate::theme::Palette;

const TITLE: &str = " [ KIAUH ] ";
const SUBTITLE: &str = "Klipper Installation And Update Helper";

/// Render the bordered KIAUH header block.
pub fn render_header(palette: &Palette) -> String {
    let mut out = top_border();
    for (text, fill) in [(TITLE, '~'), (SUBTITLE, ' '), ("", '~')] {
        let row = palette.paint(&center(text, CONTENT_WIDTH, fill), palette.header);
        out.push_str(&format!("| {row} |\n"));
    }
    out.push_str(&bottom_border());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::LINE_WIDTH;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_header_layout() {
        let header = render_header(&Palette::plain());
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.width() == LINE_WIDTH));
        assert!(lines[1].contains(" [ KIAUH ] "));
        assert!(lines[1].starts_with("| ~~~"));
        assert!(lines[2].contains("Klipper Installation And Update Helper"));
        assert_eq!(lines[3], format!("| {} |", "~".repeat(CONTENT_WIDTH)));
    }

    #[test]
    fn test_colored_header_has_same_text() {
        let plain = render_header(&Palette::plain());
        let colored = render_header(&Palette::colored());
        assert_ne!(plain, colored);
        assert!(colored.contains("Klipper Installation And Update Helper"));
        assert_eq!(colored.lines().count(), plain.lines().count());
    }
}
