//! KIAUH menu engine
//!
//! This library provides the interactive menu navigation used by the
//! Klipper Installation And Update Helper: bordered text menus, validated
//! single-token input, and recursive descent into child menus.

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod menu;
pub mod menus;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use config::{ColorChoice, EngineConfig};
pub use console::Console;
pub use error::{MenuError, Result};
pub use menu::{
    Exit, FooterKind, Menu, MenuBase, MenuHandle, MenuState, Navigable, Navigator, OptionTable,
    OptionTarget, into_handle,
};
pub use theme::Palette;
