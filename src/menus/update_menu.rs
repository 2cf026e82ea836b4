use super::{COMPONENTS, component, component_options};
use crate::console::Console;
use crate::menu::{FooterKind, Menu, MenuBase, OptionTarget};
use crate::theme::Palette;
use crate::ui;
use std::io::{self, Write};

const UPDATE_ALL: &str = "a";

/// Update menu. Pressing enter (or anything unrecognized) updates everything.
///
/// Opened as a menu type, so the list of components updated during a visit
/// starts empty each time.
pub struct UpdateMenu {
    base: MenuBase<Self>,
    updated: Vec<&'static str>,
}

impl Default for UpdateMenu {
    fn default() -> Self {
        let offset = 1;
        let mut options = component_options(offset, Self::update_one);
        options.insert(UPDATE_ALL, OptionTarget::action(Self::update_all));
        Self {
            base: MenuBase::new(FooterKind::Back, options)
                .with_options_offset(offset)
                .with_default_option(UPDATE_ALL),
            updated: Vec::new(),
        }
    }
}

impl UpdateMenu {
    /// Components marked as updated during this visit
    pub fn updated(&self) -> &[&'static str] {
        &self.updated
    }

    fn update_one(&mut self, console: &mut Console<'_>, token: &str) {
        match component(token, self.base.options_offset) {
            Some(name) => self.mark(name, console),
            None => console.print_error(&format!("No component for option {token}")),
        }
    }

    fn update_all(&mut self, console: &mut Console<'_>, _token: &str) {
        for name in COMPONENTS {
            self.mark(name, console);
        }
    }

    fn mark(&mut self, name: &'static str, console: &mut Console<'_>) {
        console.print_ok(&format!("###### {name} selected for update"));
        if !self.updated.contains(&name) {
            self.updated.push(name);
        }
    }
}

impl Menu for UpdateMenu {
    fn base(&self) -> &MenuBase<Self> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MenuBase<Self> {
        &mut self.base
    }

    fn render_body(&self, out: &mut dyn Write, palette: &Palette) -> io::Result<()> {
        write!(out, "{}", ui::title_line("Update Menu", palette))?;
        write!(out, "{}", ui::option_line("A", "Update all (default)"))?;
        write!(out, "{}", ui::separator_line())?;
        for (i, (_, row)) in ui::numbered_options(COMPONENTS, self.base.options_offset)
            .into_iter()
            .enumerate()
        {
            if self.updated.contains(&COMPONENTS[i]) {
                let row = row.trim_end_matches('\n');
                // Replace the trailing padding with the marker to keep the width.
                let marker = "[selected] |";
                let keep = row.len() - marker.len();
                writeln!(out, "{}{marker}", &row[..keep])?;
            } else {
                write!(out, "{row}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Navigable;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_update_all_marks_every_component() {
        let mut menu = UpdateMenu::default();
        let mut console = Console::new(io::empty(), io::sink(), Palette::plain());
        menu.invoke(UPDATE_ALL, &mut console).unwrap();
        assert_eq!(menu.updated(), COMPONENTS);
    }

    #[test]
    fn test_marked_rows_keep_width() {
        let mut menu = UpdateMenu::default();
        let mut console = Console::new(io::empty(), io::sink(), Palette::plain());
        menu.invoke("2", &mut console).unwrap();
        menu.invoke("2", &mut console).unwrap();
        assert_eq!(menu.updated(), ["Moonraker"]);

        let mut out = Vec::new();
        menu.render_body(&mut out, &Palette::plain()).unwrap();
        let body = String::from_utf8(out).unwrap();
        let marked: Vec<&str> = body.lines().filter(|l| l.contains("[selected]")).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Moonraker"));
        assert_eq!(marked[0].width(), ui::LINE_WIDTH);
    }
}
