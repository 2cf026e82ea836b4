use crate::console::Console;
use crate::menu::{FooterKind, Menu, MenuBase, OptionTable, OptionTarget};
use crate::theme::Palette;
use crate::ui;
use std::io::{self, Write};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Web interface installed by default alongside Klipper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum WebClient {
    #[default]
    Mainsail,
    Fluidd,
}

impl WebClient {
    /// The following client, wrapping around
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let index = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

/// Settings that persist while the program runs.
///
/// The main menu holds this menu as an instance, so changes survive going
/// back and opening it again.
pub struct SettingsMenu {
    base: MenuBase<Self>,
    backup_before_update: bool,
    webclient: WebClient,
}

impl Default for SettingsMenu {
    fn default() -> Self {
        let options = OptionTable::new()
            .with("1", OptionTarget::action(Self::toggle_backups))
            .with("2", OptionTarget::action(Self::cycle_webclient));
        Self {
            base: MenuBase::new(FooterKind::Back, options),
            backup_before_update: false,
            webclient: WebClient::default(),
        }
    }
}

impl SettingsMenu {
    pub fn backup_before_update(&self) -> bool {
        self.backup_before_update
    }

    pub fn webclient(&self) -> WebClient {
        self.webclient
    }

    fn toggle_backups(&mut self, console: &mut Console<'_>, _token: &str) {
        self.backup_before_update = !self.backup_before_update;
        console.print_ok(&format!(
            "Backup before update: {}",
            on_off(self.backup_before_update)
        ));
    }

    fn cycle_webclient(&mut self, console: &mut Console<'_>, _token: &str) {
        self.webclient = self.webclient.next();
        console.print_ok(&format!("Default web client: {}", self.webclient));
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "enabled" } else { "disabled" }
}

impl Menu for SettingsMenu {
    fn base(&self) -> &MenuBase<Self> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MenuBase<Self> {
        &mut self.base
    }

    fn render_body(&self, out: &mut dyn Write, palette: &Palette) -> io::Result<()> {
        write!(out, "{}", ui::title_line("Settings", palette))?;
        write!(
            out,
            "{}",
            ui::option_line(
                "1",
                &format!("Backup before update: {}", on_off(self.backup_before_update))
            )
        )?;
        write!(
            out,
            "{}",
            ui::option_line("2", &format!("Default web client: {}", self.webclient))
        )
    }
}
