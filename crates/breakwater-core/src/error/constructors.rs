//! Constructor methods for BreakwaterError

use super::types::BreakwaterError;

impl BreakwaterError {
    /// Create a new configuration error for `field`
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
            context: None,
        }
    }

    /// Create a new runtime error
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            context: None,
        }
    }

    /// Attach context to any error variant, replacing what was there
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        let ctx = Some(ctx.into());
        match &mut self {
            Self::Config { context, .. }
            | Self::Runtime { context, .. }
            | Self::Parse { context, .. } => *context = ctx,
        }
        self
    }
}

impl From<toml::de::Error> for BreakwaterError {
    fn from(err: toml::de::Error) -> Self {
        Self::parse(err.message().to_string())
    }
}
