//! Per-frame navigation state machine

use strum::Display;

/// Where a menu frame is in its navigation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum MenuState {
    /// Frame created, loop not entered yet
    #[default]
    Idle,
    /// Writing header, body and footer
    Rendering,
    /// Blocked on the prompt; invalid input keeps the frame here
    AwaitingInput,
    /// Resolving a validated token
    Dispatching,
    /// Suspended while a child menu runs
    Descended,
    /// Back was chosen (terminal for this frame)
    Returning,
    /// Quit was chosen here or below (terminal for the whole process)
    Terminated,
}

impl MenuState {
    /// Returns true if the frame can no longer change state
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Returning | Self::Terminated)
    }

    /// Whether moving from `self` to `next` is legal
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Rendering)
                | (Self::Rendering, Self::AwaitingInput)
                | (Self::AwaitingInput, Self::Dispatching)
                | (Self::AwaitingInput, Self::Returning)
                | (Self::AwaitingInput, Self::Terminated)
                | (Self::Dispatching, Self::Rendering)
                | (Self::Dispatching, Self::Descended)
                | (Self::Descended, Self::Rendering)
                | (Self::Descended, Self::Terminated)
        )
    }
}
