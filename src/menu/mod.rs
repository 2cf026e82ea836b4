//! Menu contract and navigation engine
//!
//! A concrete menu owns a [`MenuBase`] (option table, default token, prompt
//! label, header flag, footer kind and back-reference) and renders its own
//! body. The [`Navigator`] drives any menu through the same loop: render,
//! read a validated token, then quit, go back, run an action or descend into
//! a child menu.
//!
//! ```text
//! Idle -> Rendering -> AwaitingInput -> Dispatching -> Rendering ...
//!                                    |             \-> Descended -> Rendering ...
//!                                    |-> Returning   (back, this frame only)
//!                                    \-> Terminated  (quit, whole process)
//! ```
//!
//! Menus are shared through [`MenuHandle`] (`Rc<RefCell<dyn Navigable>>`).
//! The back-reference from child to parent is a [`WeakMenu`], so a parent and
//! a child it keeps as an option never own each other.

mod navigator;
mod options;
mod state;

pub use navigator::{Exit, Navigator};
pub use options::{Action, MenuFactory, OptionTable, OptionTarget};
pub use state::MenuState;

use crate::console::Console;
use crate::error::{MenuError, Result};
use crate::theme::Palette;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::{Rc, Weak};
use strum::{Display, EnumIter, EnumString};

/// Shared handle to a running or reusable menu
pub type MenuHandle = Rc<RefCell<dyn Navigable>>;

/// Non-owning back-reference to the menu that opened this one
pub type WeakMenu = Weak<RefCell<dyn Navigable>>;

pub const QUIT_TOKEN: &str = "q";
pub const BACK_TOKEN: &str = "b";
pub const HELP_TOKEN: &str = "h";

/// Navigation affordances offered by a menu's footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Display, EnumString, EnumIter)]
pub enum FooterKind {
    #[default]
    #[strum(serialize = "QUIT_FOOTER")]
    Quit,
    #[strum(serialize = "BACK_FOOTER")]
    Back,
    #[strum(serialize = "BACK_HELP_FOOTER")]
    BackHelp,
}

impl FooterKind {
    /// Tokens accepted before the option table is consulted.
    ///
    /// Quit is available from every menu; back and help follow the footer.
    pub const fn navigation_tokens(self) -> &'static [&'static str] {
        match self {
            Self::Quit => &[QUIT_TOKEN],
            Self::Back => &[BACK_TOKEN, QUIT_TOKEN],
            Self::BackHelp => &[BACK_TOKEN, HELP_TOKEN, QUIT_TOKEN],
        }
    }

    pub fn is_navigation_token(self, token: &str) -> bool {
        self.navigation_tokens().contains(&token)
    }

    pub const fn offers_back(self) -> bool {
        matches!(self, Self::Back | Self::BackHelp)
    }
}

/// State every menu carries
pub struct MenuBase<M> {
    pub options: OptionTable<M>,
    /// Token used when input is empty or unrecognized
    pub default_option: Option<String>,
    /// First number used when rendering numbered options
    pub options_offset: usize,
    /// Prompt label; the configured default is used when unset or empty
    pub input_label: Option<String>,
    /// Whether the page header renders above the body
    pub header: bool,
    pub footer: FooterKind,
    previous_menu: Option<WeakMenu>,
}

impl<M> MenuBase<M> {
    pub fn new(footer: FooterKind, options: OptionTable<M>) -> Self {
        Self {
            options,
            default_option: None,
            options_offset: 0,
            input_label: None,
            header: true,
            footer,
            previous_menu: None,
        }
    }

    pub fn with_default_option(mut self, token: impl Into<String>) -> Self {
        self.default_option = Some(token.into().to_lowercase());
        self
    }

    pub fn with_options_offset(mut self, offset: usize) -> Self {
        self.options_offset = offset;
        self
    }

    pub fn with_input_label(mut self, label: impl Into<String>) -> Self {
        self.input_label = Some(label.into());
        self
    }

    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    /// The menu that opened this one, if it is still alive
    pub fn previous_menu(&self) -> Option<MenuHandle> {
        self.previous_menu.as_ref().and_then(Weak::upgrade)
    }

    pub fn set_previous_menu(&mut self, previous: WeakMenu) {
        self.previous_menu = Some(previous);
    }

    /// Check the option table against the input normalization and footer.
    ///
    /// A token the prompt can never produce, or one that navigation would
    /// always intercept, is a defect in the menu definition. The help token
    /// is the exception: a help entry is how a back/help menu shows help.
    pub fn validate(&self) -> Result<()> {
        for token in self.options.tokens() {
            if token.is_empty() {
                return Err(MenuError::type_contract(token, "a non-empty token"));
            }
            if token.trim() != token {
                return Err(MenuError::type_contract(
                    token,
                    "a token without surrounding whitespace",
                ));
            }
            if token != HELP_TOKEN && self.footer.is_navigation_token(token) {
                return Err(MenuError::type_contract(
                    token,
                    format!("a token not reserved by {}", self.footer),
                ));
            }
        }
        Ok(())
    }
}

/// A concrete menu.
///
/// Implementors build their [`MenuBase`] in their constructor and render
/// their own title and option list. Everything else comes from the
/// navigator.
pub trait Menu: Sized + 'static {
    fn base(&self) -> &MenuBase<Self>;

    fn base_mut(&mut self) -> &mut MenuBase<Self>;

    fn render_body(&self, out: &mut dyn Write, palette: &Palette) -> io::Result<()>;
}

/// What a validated token resolves to
pub enum Resolved {
    /// An action entry; run it with [`Navigable::invoke`]
    Action,
    /// A child menu to descend into. `fresh` is true for menu types.
    Descend { menu: MenuHandle, fresh: bool },
}

/// Object-safe view of a menu used by the navigator.
///
/// Implemented for every [`Menu`]; concrete menus never implement it
/// directly.
pub trait Navigable {
    fn footer(&self) -> FooterKind;

    fn shows_header(&self) -> bool;

    fn default_option(&self) -> Option<&str>;

    fn input_label(&self) -> Option<&str>;

    fn has_option(&self, token: &str) -> bool;

    fn validate(&self) -> Result<()>;

    fn draw_body(&self, out: &mut dyn Write, palette: &Palette) -> io::Result<()>;

    /// Look up `token`, instantiating menu types.
    fn resolve(&self, token: &str) -> Result<Resolved>;

    /// Run the action bound to `token`.
    fn invoke(&mut self, token: &str, console: &mut Console<'_>) -> Result<()>;

    fn set_previous_menu(&mut self, previous: WeakMenu);

    fn previous_menu(&self) -> Option<MenuHandle>;
}

impl<M: Menu> Navigable for M {
    fn footer(&self) -> FooterKind {
        self.base().footer
    }

    fn shows_header(&self) -> bool {
        self.base().header
    }

    fn default_option(&self) -> Option<&str> {
        self.base().default_option.as_deref()
    }

    fn input_label(&self) -> Option<&str> {
        self.base().input_label.as_deref()
    }

    fn has_option(&self, token: &str) -> bool {
        self.base().options.contains(token)
    }

    fn validate(&self) -> Result<()> {
        self.base().validate()
    }

    fn draw_body(&self, out: &mut dyn Write, palette: &Palette) -> io::Result<()> {
        self.render_body(out, palette)
    }

    fn resolve(&self, token: &str) -> Result<Resolved> {
        match self.base().options.get(token) {
            Some(OptionTarget::Action(_)) => Ok(Resolved::Action),
            Some(OptionTarget::MenuType(factory)) => Ok(Resolved::Descend {
                menu: factory(),
                fresh: true,
            }),
            Some(OptionTarget::MenuInstance(menu)) => Ok(Resolved::Descend {
                menu: Rc::clone(menu),
                fresh: false,
            }),
            None => Err(MenuError::dispatch(token)),
        }
    }

    fn invoke(&mut self, token: &str, console: &mut Console<'_>) -> Result<()> {
        let action = match self.base().options.get(token) {
            Some(OptionTarget::Action(action)) => Rc::clone(action),
            Some(other) => {
                return Err(MenuError::type_contract(
                    token,
                    format!("an action, found a {}", other.kind()),
                ));
            }
            None => return Err(MenuError::dispatch(token)),
        };
        action(self, console, token);
        Ok(())
    }

    fn set_previous_menu(&mut self, previous: WeakMenu) {
        self.base_mut().set_previous_menu(previous);
    }

    fn previous_menu(&self) -> Option<MenuHandle> {
        self.base().previous_menu()
    }
}

/// Wrap a menu in a shareable handle.
pub fn into_handle<T: Menu>(menu: T) -> MenuHandle {
    Rc::new(RefCell::new(menu))
}
