//! Validation error type.

use crate::{ActionKind, FragmentSource};
use std::error::Error as StdError;
use thiserror::Error;

/// Result type for validation.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// A rejected write.
///
/// Validators raise it with just a message. The dispatcher records which
/// fragment failed, and the annotation policy may tag the entity and action
/// and rewrite the message before the error reaches the caller.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable reason, displayed verbatim.
    pub message: String,
    /// Entity the failing mutation targeted, once annotated.
    pub entity: Option<String>,
    /// Action of the failing mutation, once annotated.
    pub action: Option<ActionKind>,
    /// Fragment of the arguments that failed.
    pub fragment: Option<FragmentSource>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            entity: None,
            action: None,
            fragment: None,
            source: None,
        }
    }

    /// Wrap an arbitrary error raised by validation logic, keeping it as the source.
    pub fn from_error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: err.to_string(),
            entity: None,
            action: None,
            fragment: None,
            source: Some(Box::new(err)),
        }
    }

    /// Replace the message, keeping every tag and the source.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Tag the entity and action the error belongs to.
    pub fn at(mut self, entity: impl Into<String>, action: ActionKind) -> Self {
        self.entity = Some(entity.into());
        self.action = Some(action);
        self
    }

    /// Record which fragment failed.
    pub fn in_fragment(mut self, fragment: FragmentSource) -> Self {
        self.fragment = Some(fragment);
        self
    }

    /// Returns true once an entity and action have been tagged.
    pub fn is_annotated(&self) -> bool {
        self.entity.is_some() && self.action.is_some()
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
