use super::{AdvancedMenu, InstallMenu, RemoveMenu, SettingsMenu, UpdateMenu};
use crate::menu::{FooterKind, Menu, MenuBase, MenuHandle, OptionTable, OptionTarget, into_handle};
use crate::theme::Palette;
use crate::ui;
use std::io::{self, Write};

/// Top-level menu. Settings are kept as an instance so they survive visits.
pub struct MainMenu {
    base: MenuBase<Self>,
}

impl MainMenu {
    pub fn new(settings: MenuHandle) -> Self {
        let options = OptionTable::new()
            .with("1", OptionTarget::menu::<InstallMenu>())
            .with("2", OptionTarget::menu::<UpdateMenu>())
            .with("3", OptionTarget::menu::<RemoveMenu>())
            .with("4", OptionTarget::menu::<AdvancedMenu>())
            .with("s", OptionTarget::instance(settings));
        Self {
            base: MenuBase::new(FooterKind::Quit, options),
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new(into_handle(SettingsMenu::default()))
    }
}

impl Menu for MainMenu {
    fn base(&self) -> &MenuBase<Self> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MenuBase<Self> {
        &mut self.base
    }

    fn render_body(&self, out: &mut dyn Write, palette: &Palette) -> io::Result<()> {
        write!(out, "{}", ui::title_line("Main Menu", palette))?;
        write!(out, "{}", ui::separator_line())?;
        write!(out, "{}", ui::option_line("1", "[Install]"))?;
        write!(out, "{}", ui::option_line("2", "[Update]"))?;
        write!(out, "{}", ui::option_line("3", "[Remove]"))?;
        write!(out, "{}", ui::option_line("4", "[Advanced]"))?;
        write!(out, "{}", ui::text_line(""))?;
        write!(out, "{}", ui::option_line("S", "[Settings]"))
    }
}
