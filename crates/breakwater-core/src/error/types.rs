//! Core error type for Breakwater

use thiserror::Error;

/// Result type alias for Breakwater operations
pub type BreakwaterResult<T> = Result<T, BreakwaterError>;

/// Main error type for Breakwater
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BreakwaterError {
    /// A configuration value violates its constraint
    #[error("Configuration error: {field}: {message}")]
    Config {
        field: String,
        message: String,
        context: Option<String>,
    },

    /// No Tokio runtime is available to drive cooldown timers
    #[error("Runtime error: {message}")]
    Runtime {
        message: String,
        context: Option<String>,
    },

    /// A configuration document could not be parsed
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        context: Option<String>,
    },
}

impl BreakwaterError {
    /// Stable code for programmatic error handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "BREAKWATER_CONFIG",
            Self::Runtime { .. } => "BREAKWATER_RUNTIME",
            Self::Parse { .. } => "BREAKWATER_PARSE",
        }
    }

    /// Human-readable message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Config { message, .. } => message,
            Self::Runtime { message, .. } => message,
            Self::Parse { message, .. } => message,
        }
    }

    /// Optional context about where the error occurred
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::Runtime { context, .. } => context.as_deref(),
            Self::Parse { context, .. } => context.as_deref(),
        }
    }
}
