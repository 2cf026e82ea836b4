use super::{COMPONENTS, component, component_options};
use crate::console::Console;
use crate::menu::{FooterKind, Menu, MenuBase};
use crate::theme::Palette;
use crate::ui;
use std::io::{self, Write};

pub struct RemoveMenu {
    base: MenuBase<Self>,
}

impl Default for RemoveMenu {
    fn default() -> Self {
        let offset = 1;
        Self {
            base: MenuBase::new(FooterKind::Back, component_options(offset, Self::remove))
                .with_options_offset(offset)
                .with_input_label("Select component to remove"),
        }
    }
}

impl RemoveMenu {
    fn remove(&mut self, console: &mut Console<'_>, token: &str) {
        match component(token, self.base.options_offset) {
            Some(name) => console.print_warn(&format!("###### {name} selected for removal")),
            None => console.print_error(&format!("No component for option {token}")),
        }
    }
}

impl Menu for RemoveMenu {
    fn base(&self) -> &MenuBase<Self> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MenuBase<Self> {
        &mut self.base
    }

    fn render_body(&self, out: &mut dyn Write, palette: &Palette) -> io::Result<()> {
        write!(out, "{}", ui::title_line("Remove Menu", palette))?;
        write!(out, "{}", ui::text_line("INFO: Configurations and backups will be kept!"))?;
        write!(out, "{}", ui::separator_line())?;
        for (_, row) in ui::numbered_options(COMPONENTS, self.base.options_offset) {
            write!(out, "{row}")?;
        }
        Ok(())
    }
}
