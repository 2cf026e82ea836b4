//! Option tables: input tokens mapped to actions or child menus

use super::{Menu, MenuHandle, into_handle};
use crate::console::Console;
use std::fmt;
use std::rc::Rc;

/// Side-effecting command bound to a menu.
///
/// Receives the menu it belongs to, the console for its own reporting and
/// the token that selected it.
pub type Action<M> = Rc<dyn Fn(&mut M, &mut Console<'_>, &str)>;

/// Constructor used for menus that start from scratch on every visit
pub type MenuFactory = fn() -> MenuHandle;

/// What a token leads to
pub enum OptionTarget<M> {
    /// Invoke a command and stay in the current menu
    Action(Action<M>),
    /// Build a fresh child menu and descend into it
    MenuType(MenuFactory),
    /// Descend into an existing child menu, keeping its state between visits
    MenuInstance(MenuHandle),
}

impl<M> OptionTarget<M> {
    pub fn action<F>(action: F) -> Self
    where
        F: Fn(&mut M, &mut Console<'_>, &str) + 'static,
    {
        Self::Action(Rc::new(action))
    }

    /// Child menu built with `T::default()` on every descent
    pub fn menu<T: Menu + Default>() -> Self {
        Self::MenuType(instantiate::<T>)
    }

    pub fn instance(menu: MenuHandle) -> Self {
        Self::MenuInstance(menu)
    }

    /// Short name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Action(_) => "action",
            Self::MenuType(_) => "menu type",
            Self::MenuInstance(_) => "menu instance",
        }
    }
}

impl<M> Clone for OptionTarget<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Action(action) => Self::Action(Rc::clone(action)),
            Self::MenuType(factory) => Self::MenuType(*factory),
            Self::MenuInstance(menu) => Self::MenuInstance(Rc::clone(menu)),
        }
    }
}

impl<M> fmt::Debug for OptionTarget<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

fn instantiate<T: Menu + Default>() -> MenuHandle {
    into_handle(T::default())
}

/// Token → target mapping.
///
/// Tokens are stored lowercase because input is lowercased before lookup.
/// Entries keep insertion order for rendering; inserting an existing token
/// replaces its target in place.
pub struct OptionTable<M> {
    entries: Vec<(String, OptionTarget<M>)>,
}

impl<M> Default for OptionTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for OptionTable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter().map(|(k, v)| (k, v))).finish()
    }
}

impl<M> OptionTable<M> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, token: impl Into<String>, target: OptionTarget<M>) {
        let token = token.into().to_lowercase();
        match self.entries.iter_mut().find(|(existing, _)| *existing == token) {
            Some((_, slot)) => *slot = target,
            None => self.entries.push((token, target)),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, token: impl Into<String>, target: OptionTarget<M>) -> Self {
        self.insert(token, target);
        self
    }

    pub fn get(&self, token: &str) -> Option<&OptionTarget<M>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == token)
            .map(|(_, target)| target)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Tokens in insertion order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(token, _)| token.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
