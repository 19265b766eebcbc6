//! DispatcherBuilder - one configuration call for validators and policy.

use mutguard_core::{MutationDescription, ValidationError};
use mutguard_registry::{RegistryBuilder, RegistryError, Validator};

use crate::annotate::AnnotationPolicy;
use crate::dispatcher::Dispatcher;

/// Builder for a [`Dispatcher`].
///
/// ```
/// use mutguard_core::{Payload, ValidationError};
/// use mutguard_mutation::Dispatcher;
///
/// fn user(data: &Payload) -> Result<(), ValidationError> {
///     match data.get("email").and_then(|e| e.as_str()) {
///         Some(email) if !email.contains('@') => Err(ValidationError::new("email must include @")),
///         _ => Ok(()),
///     }
/// }
///
/// let dispatcher = Dispatcher::builder().validator("User", user).build().unwrap();
/// assert!(dispatcher.registry().contains("User"));
/// ```
#[derive(Default)]
pub struct DispatcherBuilder {
    registry: RegistryBuilder,
    annotate: Option<AnnotationPolicy>,
}

impl DispatcherBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the validator for an entity.
    pub fn validator(mut self, entity: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.registry = self.registry.validator(entity, validator);
        self
    }

    /// Replace the default annotation policy.
    pub fn annotate<P>(mut self, policy: P) -> Self
    where
        P: Fn(ValidationError, &MutationDescription<'_>) -> ValidationError + Send + Sync + 'static,
    {
        self.annotate = Some(Box::new(policy));
        self
    }

    /// Build the dispatcher, failing on the first registration error.
    pub fn build(self) -> Result<Dispatcher, RegistryError> {
        let registry = self.registry.build()?;
        Ok(match self.annotate {
            Some(policy) => Dispatcher::with_annotation(registry, policy),
            None => Dispatcher::new(registry),
        })
    }
}
