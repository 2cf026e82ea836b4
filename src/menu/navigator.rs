//! The navigation loop shared by every menu

use super::{
    BACK_TOKEN, HELP_TOKEN, MenuHandle, MenuState, Navigable, QUIT_TOKEN, Resolved,
};
use crate::config::EngineConfig;
use crate::console::Console;
use crate::error::{MenuError, Result};
use crate::ui;
use std::ops::ControlFlow;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

/// How a menu's loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user went back; the caller resumes its own loop
    Back,
    /// The user quit; every enclosing loop stops without rendering again
    Quit,
}

/// Drives menus: render, read a validated token, dispatch.
///
/// Descent is plain recursion through [`run`](Self::run). One state entry
/// per active frame is kept on an explicit stack so the depth guard and
/// transition checks see the whole chain.
pub struct Navigator<'io> {
    console: Console<'io>,
    frames: Vec<MenuState>,
    max_depth: usize,
    farewell: String,
    default_prompt: String,
    clear_screen: bool,
}

impl<'io> Navigator<'io> {
    pub fn new(console: Console<'io>, config: &EngineConfig) -> Self {
        Self {
            console,
            frames: Vec::new(),
            max_depth: config.max_depth,
            farewell: config.farewell.clone(),
            default_prompt: config.default_prompt.clone(),
            clear_screen: config.clear_screen,
        }
    }

    /// Number of menu loops currently on the stack
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Run `root` as the program's top menu.
    ///
    /// Quitting from any depth, or closing standard input, prints the
    /// farewell line and exits the process with success. Backing out of a
    /// root that offers back returns normally.
    pub fn start(&mut self, root: &MenuHandle) -> Result<()> {
        info!("Starting menu navigation");
        match self.run(root) {
            Ok(Exit::Quit) => std::process::exit(0),
            Ok(Exit::Back) => Ok(()),
            Err(MenuError::InputClosed) => {
                info!("Input closed, leaving");
                self.console.print_ok(&self.farewell);
                std::process::exit(0)
            }
            Err(e) => {
                if e.is_contract_violation() {
                    error!("Menu contract violation: {}", e);
                }
                Err(e)
            }
        }
    }

    /// The navigation loop for one menu.
    pub fn run(&mut self, menu: &MenuHandle) -> Result<Exit> {
        if self.frames.len() >= self.max_depth {
            return Err(MenuError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        menu.borrow().validate()?;

        self.frames.push(MenuState::Idle);
        let result = self.drive(menu);
        self.frames.pop();
        result
    }

    fn drive(&mut self, menu: &MenuHandle) -> Result<Exit> {
        loop {
            self.transition(MenuState::Rendering)?;
            self.display(&*menu.borrow())?;

            self.transition(MenuState::AwaitingInput)?;
            let token = self.read_validated_input(&*menu.borrow())?;
            let footer = menu.borrow().footer();

            if footer.is_navigation_token(&token) {
                match token.as_str() {
                    QUIT_TOKEN => {
                        self.transition(MenuState::Terminated)?;
                        self.console.print_ok(&self.farewell);
                        return Ok(Exit::Quit);
                    }
                    BACK_TOKEN => {
                        self.transition(MenuState::Returning)?;
                        debug!(depth = self.depth(), "Returning to previous menu");
                        return Ok(Exit::Back);
                    }
                    HELP_TOKEN if !menu.borrow().has_option(HELP_TOKEN) => {
                        self.transition(MenuState::Dispatching)?;
                        warn!(%footer, "Help requested but the menu has no help entry");
                        self.console.print_warn("No help available for this menu.");
                        continue;
                    }
                    _ => {}
                }
            }

            self.transition(MenuState::Dispatching)?;
            if self.dispatch(menu, &token)?.is_break() {
                self.transition(MenuState::Terminated)?;
                return Ok(Exit::Quit);
            }
        }
    }

    /// Resolve `token` in `menu` and act on it.
    ///
    /// Returns `Break` when a child menu quit, so the caller must stop too.
    pub fn dispatch(&mut self, menu: &MenuHandle, token: &str) -> Result<ControlFlow<()>> {
        let resolved = menu.borrow().resolve(token)?;
        match resolved {
            Resolved::Action => {
                debug!(token, "Invoking action");
                menu.borrow_mut().invoke(token, &mut self.console)?;
                Ok(ControlFlow::Continue(()))
            }
            Resolved::Descend { menu: child, fresh } => {
                self.transition(MenuState::Descended)?;
                debug!(token, fresh, depth = self.depth() + 1, "Descending into menu");
                child.borrow_mut().set_previous_menu(Rc::downgrade(menu));
                match self.run(&child)? {
                    Exit::Back => Ok(ControlFlow::Continue(())),
                    Exit::Quit => Ok(ControlFlow::Break(())),
                }
            }
        }
    }

    /// Header (when enabled), body, footer.
    pub fn display(&mut self, menu: &dyn Navigable) -> Result<()> {
        if self.clear_screen {
            self.console.clear_screen()?;
        }
        let palette = self.console.palette();
        if menu.shows_header() {
            self.console.write_block(&ui::render_header(&palette))?;
        }
        menu.draw_body(self.console.output(), &palette)?;
        self.console
            .write_block(&ui::render_footer(menu.footer(), &palette))?;
        self.console.output().flush()?;
        Ok(())
    }

    /// Prompt until the input is a navigation token, a known option, or a
    /// default applies. Each rejected line prints one invalid input notice.
    pub fn read_validated_input(&mut self, menu: &dyn Navigable) -> Result<String> {
        let label = match menu.input_label() {
            Some(label) if !label.is_empty() => label,
            _ => self.default_prompt.as_str(),
        };
        let palette = self.console.palette();
        let prompt = palette.paint(&format!("###### {label}: "), palette.prompt);

        loop {
            let choice = self.console.read_line(&prompt)?.to_lowercase();

            if menu.footer().is_navigation_token(&choice) || menu.has_option(&choice) {
                return Ok(choice);
            }
            if let Some(default) = menu.default_option() {
                debug!(input = %choice, default, "Falling back to default option");
                return Ok(default.to_string());
            }
            self.console.print_error("Invalid input!");
        }
    }

    fn transition(&mut self, next: MenuState) -> Result<()> {
        let depth = self.frames.len();
        let current = self.frames.last().copied().unwrap_or_default();
        if !current.can_transition_to(next) {
            return Err(MenuError::Transition {
                from: current,
                to: next,
            });
        }
        if let Some(state) = self.frames.last_mut() {
            *state = next;
        }
        debug!(depth, from = %current, to = %next, "Menu state transition");
        Ok(())
    }
}
