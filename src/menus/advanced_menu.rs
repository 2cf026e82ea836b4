use crate::console::Console;
use crate::menu::{FooterKind, HELP_TOKEN, Menu, MenuBase, OptionTable, OptionTarget};
use crate::theme::Palette;
use crate::ui;
use std::io::{self, Write};

const TASKS: [(&str, &str); 3] = [
    ("1", "Build Firmware"),
    ("2", "Flash MCU"),
    ("3", "Get MCU ID"),
];

/// Firmware tasks. The only menu with a help entry behind its footer.
pub struct AdvancedMenu {
    base: MenuBase<Self>,
}

impl Default for AdvancedMenu {
    fn default() -> Self {
        let mut options = OptionTable::new();
        for (token, _) in TASKS {
            options.insert(token, OptionTarget::action(Self::run_task));
        }
        options.insert(HELP_TOKEN, OptionTarget::action(Self::help));
        Self {
            base: MenuBase::new(FooterKind::BackHelp, options),
        }
    }
}

impl AdvancedMenu {
    fn run_task(&mut self, console: &mut Console<'_>, token: &str) {
        match TASKS.iter().find(|(t, _)| *t == token) {
            Some((_, task)) => console.print_ok(&format!("###### {task} selected")),
            None => console.print_error(&format!("No task for option {token}")),
        }
    }

    fn help(&mut self, console: &mut Console<'_>, _token: &str) {
        console.print_info("Build Firmware: compile Klipper firmware for your board.");
        console.print_info("Flash MCU: write a built firmware image to a connected MCU.");
        console.print_info("Get MCU ID: list serial IDs of connected MCUs.");
    }
}

impl Menu for AdvancedMenu {
    fn base(&self) -> &MenuBase<Self> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MenuBase<Self> {
        &mut self.base
    }

    fn render_body(&self, out: &mut dyn Write, palette: &Palette) -> io::Result<()> {
        write!(out, "{}", ui::title_line("Advanced Menu", palette))?;
        write!(out, "{}", ui::text_line("Firmware:"))?;
        for (token, task) in TASKS {
            write!(out, "{}", ui::option_line(token, task))?;
        }
        Ok(())
    }
}
