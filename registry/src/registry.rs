//! The ValidatorRegistry - immutable per-entity validator lookup.

use crate::Validator;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps entity names to the validator that guards their writes.
/// It is immutable after construction (use `RegistryBuilder`).
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    /// Validators by entity name.
    validators: HashMap<String, Arc<dyn Validator>>,
}

impl ValidatorRegistry {
    pub(crate) fn new(validators: HashMap<String, Arc<dyn Validator>>) -> Self {
        Self { validators }
    }

    /// A registry that guards nothing: every dispatch passes through.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the validator registered for an entity.
    pub fn get(&self, entity: &str) -> Option<&dyn Validator> {
        self.validators.get(entity).map(|v| v.as_ref())
    }

    /// Returns true if the entity has a validator.
    pub fn contains(&self, entity: &str) -> bool {
        self.validators.contains_key(entity)
    }

    /// Names of all guarded entities, sorted.
    pub fn entities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of guarded entities.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("entities", &self.entities())
            .finish()
    }
}
