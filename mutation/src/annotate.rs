//! Error annotation policies.
//!
//! A policy sees every validation failure once, together with the mutation it
//! came from, and returns the error the caller will receive.

use mutguard_core::{MutationDescription, ValidationError};

/// Process-wide error transformation, fixed when the dispatcher is built.
pub type AnnotationPolicy =
    Box<dyn Fn(ValidationError, &MutationDescription<'_>) -> ValidationError + Send + Sync>;

/// Prefix the message with `<entity>.<action>: ` and tag both on the error.
///
/// `email must include @` raised for a root `User` create becomes
/// `User.create: email must include @`.
pub fn default_annotation(err: ValidationError, mutation: &MutationDescription<'_>) -> ValidationError {
    let message = format!("{}.{}: {}", mutation.entity, mutation.action, err.message);
    err.at(mutation.entity, mutation.action).with_message(message)
}

/// Tag entity and action but keep the validator's message untouched.
pub fn tag_only(err: ValidationError, mutation: &MutationDescription<'_>) -> ValidationError {
    err.at(mutation.entity, mutation.action)
}
