//! Color palette for line-mode menu output
//!
//! Renderers never read global color state. A [`Palette`] value is built once
//! from the engine configuration and handed to every rendering routine.
//!
//! # Usage
//! ```rust
//! use kiauh::theme::Palette;
//!
//! let palette = Palette::plain();
//! assert_eq!(palette.paint("Q) Quit", palette.quit), "Q) Quit");
//! ```

use crossterm::Command;
use crossterm::style::{Color, ResetColor, SetForegroundColor};

/// Foreground colors for each highlighted span of the menu output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// When false, `paint` returns text without escape codes
    pub enabled: bool,
    /// Page header lines
    pub header: Color,
    /// Quit footer
    pub quit: Color,
    /// Back footer (and the back half of the back/help footer)
    pub back: Color,
    /// Help half of the back/help footer
    pub help: Color,
    /// Input prompt
    pub prompt: Color,
    /// Success notices and the farewell line
    pub ok: Color,
    /// Informational notices
    pub info: Color,
    /// Warnings
    pub warning: Color,
    /// Errors, including the invalid input notice
    pub error: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

impl Palette {
    /// The standard KIAUH colors
    pub const fn colored() -> Self {
        Self {
            enabled: true,
            header: Color::Cyan,
            quit: Color::Red,
            back: Color::Green,
            help: Color::Yellow,
            prompt: Color::Cyan,
            ok: Color::Green,
            info: Color::White,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Same layout, no escape codes
    pub const fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::colored()
        }
    }

    /// Wrap `text` in a foreground color followed by a reset.
    pub fn paint(&self, text: &str, color: Color) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len() + 16);
        // Writing ANSI sequences into a String cannot fail.
        let _ = SetForegroundColor(color).write_ansi(&mut out);
        out.push_str(text);
        let _ = ResetColor.write_ansi(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_emits_no_escapes() {
        let palette = Palette::plain();
        assert_eq!(palette.paint("B) Back", palette.back), "B) Back");
    }

    #[test]
    fn test_colored_span_is_reset() {
        let palette = Palette::colored();
        let painted = palette.paint("Q) Quit", palette.quit);
        assert!(painted.starts_with('\x1b'));
        assert!(painted.contains("Q) Quit"));
        assert!(painted.ends_with("\x1b[0m"));
    }
}
