//! The validator capability and its adapters.
//!
//! A validator receives one fragment (the data about to be written for one
//! row) and either accepts it or raises a [`ValidationError`]. How it decides
//! is up to the application: plain closures, typed checks over a
//! deserialized struct, or a chain of both.

use mutguard_core::{Payload, ValidationError, ValidationResult};
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Validates one fragment of written data.
pub trait Validator: Send + Sync {
    fn validate(&self, fragment: &Payload) -> ValidationResult;
}

impl<F, E> Validator for F
where
    F: Fn(&Payload) -> Result<(), E> + Send + Sync,
    E: Into<ValidationError>,
{
    fn validate(&self, fragment: &Payload) -> ValidationResult {
        self(fragment).map_err(Into::into)
    }
}

/// Pin a closure's signature so its argument and error types are inferred.
///
/// ```
/// use mutguard_core::ValidationError;
/// use mutguard_registry::from_fn;
///
/// let email = from_fn(|data| match data.get("email").and_then(|e| e.as_str()) {
///     Some(email) if !email.contains('@') => Err(ValidationError::new("email must include @")),
///     _ => Ok(()),
/// });
/// # let _ = email;
/// ```
pub fn from_fn<F>(f: F) -> F
where
    F: Fn(&Payload) -> ValidationResult + Send + Sync,
{
    f
}

/// Validate a fragment by deserializing it into `T` first.
///
/// A fragment that does not deserialize is rejected with the deserializer's
/// message. Partial payloads (updates) should use a `T` whose fields are
/// `Option`s.
pub fn typed<T, F, E>(check: F) -> Typed<T, F>
where
    T: DeserializeOwned,
    F: Fn(&T) -> Result<(), E> + Send + Sync,
    E: Into<ValidationError>,
{
    Typed {
        check,
        _marker: PhantomData,
    }
}

/// Validator over a deserialized view of the fragment. See [`typed`].
pub struct Typed<T, F> {
    check: F,
    _marker: PhantomData<fn() -> T>,
}

impl<T, F, E> Validator for Typed<T, F>
where
    T: DeserializeOwned,
    F: Fn(&T) -> Result<(), E> + Send + Sync,
    E: Into<ValidationError>,
{
    fn validate(&self, fragment: &Payload) -> ValidationResult {
        let value = T::deserialize(fragment).map_err(ValidationError::from_error)?;
        (self.check)(&value).map_err(Into::into)
    }
}

impl<T, F> fmt::Debug for Typed<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typed")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

/// Runs several validators in order and stops at the first rejection.
#[derive(Default, Clone)]
pub struct All {
    validators: Vec<Arc<dyn Validator>>,
}

impl All {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator to the chain.
    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validator for All {
    fn validate(&self, fragment: &Payload) -> ValidationResult {
        self.validators
            .iter()
            .try_for_each(|validator| validator.validate(fragment))
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All")
            .field("validators", &self.validators.len())
            .finish()
    }
}
