use super::{COMPONENTS, component, component_options};
use crate::console::Console;
use crate::menu::{FooterKind, Menu, MenuBase};
use crate::theme::Palette;
use crate::ui;
use std::io::{self, Write};

pub struct InstallMenu {
    base: MenuBase<Self>,
}

impl Default for InstallMenu {
    fn default() -> Self {
        let offset = 1;
        Self {
            base: MenuBase::new(FooterKind::Back, component_options(offset, Self::install))
                .with_options_offset(offset),
        }
    }
}

impl InstallMenu {
    fn install(&mut self, console: &mut Console<'_>, token: &str) {
        match component(token, self.base.options_offset) {
            Some(name) => console.print_ok(&format!("###### {name} selected for installation")),
            None => console.print_error(&format!("No component for option {token}")),
        }
    }
}

impl Menu for InstallMenu {
    fn base(&self) -> &MenuBase<Self> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MenuBase<Self> {
        &mut self.base
    }

    fn render_body(&self, out: &mut dyn Write, palette: &Palette) -> io::Result<()> {
        write!(out, "{}", ui::title_line("Installation Menu", palette))?;
        write!(out, "{}", ui::separator_line())?;
        for (_, row) in ui::numbered_options(COMPONENTS, self.base.options_offset) {
            write!(out, "{row}")?;
        }
        Ok(())
    }
}
