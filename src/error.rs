//! Error handling for the menu engine
//!
//! Invalid user input never shows up here: it is recovered inside the prompt
//! loop. Everything in this module is either a contract violation between a
//! menu and its option table, an I/O failure, or a configuration problem.

use crate::menu::MenuState;
use thiserror::Error;

/// Main error type for the menu engine
#[derive(Error, Debug)]
pub enum MenuError {
    /// A validated token has no entry in the option table
    #[error("No implementation for option '{token}'")]
    Dispatch { token: String },

    /// An option table entry does not have the shape the operation requires
    #[error("Option '{token}' violates the option contract: expected {expected}")]
    TypeContract { token: String, expected: String },

    /// Menu descent went deeper than the configured limit
    #[error("Menu depth limit of {limit} exceeded (self-referential menu graph?)")]
    DepthExceeded { limit: usize },

    /// Standard input reached end of file while waiting for a choice
    #[error("Input stream closed")]
    InputClosed,

    /// The navigator attempted an illegal state transition
    #[error("Invalid navigation transition: {from} -> {to}")]
    Transition { from: MenuState, to: MenuState },

    /// IO errors (terminal reads and writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for menu engine operations
pub type Result<T> = std::result::Result<T, MenuError>;

impl MenuError {
    /// Create a dispatch error for a token missing from the option table
    pub fn dispatch(token: impl Into<String>) -> Self {
        Self::Dispatch {
            token: token.into(),
        }
    }

    /// Create a type contract error
    pub fn type_contract(token: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::TypeContract {
            token: token.into(),
            expected: expected.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Contract violations are defects in a menu definition, not runtime conditions
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::Dispatch { .. } | Self::TypeContract { .. } | Self::Transition { .. }
        )
    }
}
