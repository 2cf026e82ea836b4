//! Menu tree shipped with the `kiauh` binary
//!
//! The installers themselves live in separate feature modules; the actions
//! here report what was selected so the navigation can be exercised on its
//! own.

mod advanced_menu;
mod install_menu;
mod main_menu;
mod remove_menu;
mod settings_menu;
mod update_menu;

pub use advanced_menu::AdvancedMenu;
pub use install_menu::InstallMenu;
pub use main_menu::MainMenu;
pub use remove_menu::RemoveMenu;
pub use settings_menu::{SettingsMenu, WebClient};
pub use update_menu::UpdateMenu;

use crate::console::Console;
use crate::menu::{MenuHandle, OptionTable, OptionTarget, into_handle};
use crate::ui;

/// Components offered by the install, update and remove menus
pub const COMPONENTS: [&str; 4] = ["Klipper", "Moonraker", "Mainsail", "Fluidd"];

/// Root menu for the binary
pub fn main_menu() -> MenuHandle {
    into_handle(MainMenu::default())
}

/// One numbered entry per component, all bound to `action`.
fn component_options<M: 'static>(
    offset: usize,
    action: fn(&mut M, &mut Console<'_>, &str),
) -> OptionTable<M> {
    let mut options = OptionTable::new();
    for (token, _) in ui::numbered_options(COMPONENTS, offset) {
        options.insert(token, OptionTarget::action(action));
    }
    options
}

/// Component selected by a numbered token
fn component(token: &str, offset: usize) -> Option<&'static str> {
    let index = token.parse::<usize>().ok()?.checked_sub(offset)?;
    COMPONENTS.get(index).copied()
}
