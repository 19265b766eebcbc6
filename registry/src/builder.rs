//! RegistryBuilder for constructing an immutable ValidatorRegistry.

use crate::{Validator, ValidatorRegistry};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate validator for entity: {0}")]
    DuplicateEntity(String),

    #[error("Entity name must not be empty")]
    EmptyEntityName,
}

/// Builder for constructing an immutable ValidatorRegistry.
///
/// Registration can be checked eagerly with [`RegistryBuilder::register`],
/// or chained with [`RegistryBuilder::validator`], in which case the first
/// error is held back and reported by [`RegistryBuilder::build`].
#[derive(Default)]
pub struct RegistryBuilder {
    /// Validators being collected.
    validators: HashMap<String, Arc<dyn Validator>>,
    /// First error seen while chaining.
    error: Option<RegistryError>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator for an entity.
    pub fn register(
        &mut self,
        entity: impl Into<String>,
        validator: impl Validator + 'static,
    ) -> Result<(), RegistryError> {
        self.register_shared(entity, Arc::new(validator))
    }

    /// Register a validator that is also used elsewhere (e.g. by another entity).
    pub fn register_shared(
        &mut self,
        entity: impl Into<String>,
        validator: Arc<dyn Validator>,
    ) -> Result<(), RegistryError> {
        let entity = entity.into();
        if entity.is_empty() {
            return Err(RegistryError::EmptyEntityName);
        }
        if self.validators.contains_key(&entity) {
            return Err(RegistryError::DuplicateEntity(entity));
        }

        self.validators.insert(entity, validator);
        Ok(())
    }

    /// Chaining form of [`RegistryBuilder::register`].
    pub fn validator(mut self, entity: impl Into<String>, validator: impl Validator + 'static) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.register(entity, validator) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Build the immutable ValidatorRegistry.
    pub fn build(self) -> Result<ValidatorRegistry, RegistryError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(ValidatorRegistry::new(self.validators)),
        }
    }
}
