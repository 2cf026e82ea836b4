//! Shared menus and helpers for integration tests

#![allow(dead_code)]

use kiauh::{
    Console, EngineConfig, Exit, FooterKind, Menu, MenuBase, MenuHandle, Navigator, OptionTable,
    OptionTarget, Palette, Result,
};
use std::io::{self, Cursor, Write};

/// Feed `input` to a navigator running `menu` and capture plain output.
pub fn navigate(menu: &MenuHandle, input: &str) -> (Result<Exit>, String) {
    navigate_with(menu, input, &EngineConfig::default())
}

pub fn navigate_with(menu: &MenuHandle, input: &str, config: &EngineConfig) -> (Result<Exit>, String) {
    let mut out = Vec::new();
    let result = {
        let console = Console::new(Cursor::new(input.to_string()), &mut out, Palette::plain());
        Navigator::new(console, config).run(menu)
    };
    (result, String::from_utf8(out).expect("menu output is UTF-8"))
}

/// Child menu whose action counts presses on its own state
pub struct Tally {
    base: MenuBase<Self>,
    pub presses: u32,
}

impl Default for Tally {
    fn default() -> Self {
        let options = OptionTable::new()
            .with("1", OptionTarget::action(Self::press))
            .with("2", OptionTarget::menu::<Leaf>());
        Self {
            base: MenuBase::new(FooterKind::Back, options),
            presses: 0,
        }
    }
}

impl Tally {
    fn press(&mut self, console: &mut Console<'_>, _token: &str) {
        self.presses += 1;
        console.print_info(&format!("presses={}", self.presses));
    }
}

impl Menu for Tally {
    fn base(&self) -> &MenuBase<Self> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MenuBase<Self> {
        &mut self.base
    }

    fn render_body(&self, out: &mut dyn Write, _: &Palette) -> io::Result<()> {
        writeln!(out, "TALLY")
    }
}

/// Menu with nothing but a back footer
pub struct Leaf {
    base: MenuBase<Self>,
}

impl Default for Leaf {
    fn default() -> Self {
        Self {
            base: MenuBase::new(FooterKind::Back, OptionTable::new()),
        }
    }
}

impl Menu for Leaf {
    fn base(&self) -> &MenuBase<Self> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MenuBase<Self> {
        &mut self.base
    }

    fn render_body(&self, out: &mut dyn Write, _: &Palette) -> io::Result<()> {
        writeln!(out, "LEAF")
    }
}

/// Root menu built from a caller-supplied table
pub struct Root {
    pub base: MenuBase<Self>,
    pub label: &'static str,
}

impl Root {
    pub fn new(footer: FooterKind, options: OptionTable<Self>) -> Self {
        Self {
            base: MenuBase::new(footer, options),
            label: "ROOT",
        }
    }
}

impl Menu for Root {
    fn base(&self) -> &MenuBase<Self> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MenuBase<Self> {
        &mut self.base
    }

    fn render_body(&self, out: &mut dyn Write, _: &Palette) -> io::Result<()> {
        writeln!(out, "{}", self.label)
    }
}
