//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Process Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Signal handler error: {message}")]
    Signal { message: String },

    // ─────────────────────────────────────────────────────────────
    // User Input Errors (surfaced as a blocking prompt, never logged to a panel)
    // ─────────────────────────────────────────────────────────────
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Precondition { message: String },

    #[error("Panel {index} does not exist (have {count})")]
    PanelOutOfRange { index: usize, count: usize },

    // ─────────────────────────────────────────────────────────────
    // Remote Backend Errors
    // ─────────────────────────────────────────────────────────────
    /// The backend answered and explicitly reported failure (`ok=false`).
    #[error("{message}")]
    Remote { message: String },

    /// Network failure, non-success HTTP status, or an unparseable body.
    #[error("{message}")]
    Transport { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn signal(message: impl Into<String>) -> Self {
        Self::Signal {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn panel_out_of_range(index: usize, count: usize) -> Self {
        Self::PanelOutOfRange { index, count }
    }

    /// Errors that are shown to the operator as a blocking prompt instead of
    /// being appended to a panel log.
    pub fn is_user_prompt(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. } | Error::Precondition { .. } | Error::PanelOutOfRange { .. }
        )
    }
}
