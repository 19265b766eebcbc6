//! Validation dispatcher - the single entry point called once per mutation node.
//!
//! For each mutation description the dispatcher:
//! 1. looks up the validator for the target entity (none, or an action
//!    outside the write set: pass through);
//! 2. asks the classifier for the fragments of written data;
//! 3. validates them in order, stopping at the first rejection;
//! 4. annotates that rejection once and hands it back, or runs the write.

use mutguard_core::{MutationDescription, ValidationError, ValidationResult};
use mutguard_registry::ValidatorRegistry;
use std::fmt;
use tracing::{debug, trace};

use crate::annotate::{default_annotation, AnnotationPolicy};
use crate::builder::DispatcherBuilder;
use crate::classifier::classify;

/// Routes mutation payloads to their entity's validator.
///
/// Holds no mutable state: one dispatcher can serve any number of threads.
pub struct Dispatcher {
    registry: ValidatorRegistry,
    annotate: AnnotationPolicy,
}

impl Dispatcher {
    /// Create a dispatcher with the default annotation policy.
    pub fn new(registry: ValidatorRegistry) -> Self {
        Self {
            registry,
            annotate: Box::new(default_annotation),
        }
    }

    /// Create a dispatcher with a custom annotation policy.
    pub fn with_annotation<P>(registry: ValidatorRegistry, policy: P) -> Self
    where
        P: Fn(ValidationError, &MutationDescription<'_>) -> ValidationError + Send + Sync + 'static,
    {
        Self {
            registry,
            annotate: Box::new(policy),
        }
    }

    /// Start configuring a dispatcher.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// The validators this dispatcher routes to.
    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Validate a mutation without running it.
    ///
    /// Returns the first rejection, already annotated.
    pub fn validate(&self, mutation: &MutationDescription<'_>) -> ValidationResult {
        if !mutation.action.is_write() {
            trace!(
                entity = mutation.entity,
                action = %mutation.action,
                "action is not inspected, passing through"
            );
            return Ok(());
        }

        let Some(validator) = self.registry.get(mutation.entity) else {
            debug!(
                entity = mutation.entity,
                action = %mutation.action,
                "no validator registered, passing through"
            );
            return Ok(());
        };

        for fragment in classify(mutation) {
            trace!(
                entity = mutation.entity,
                action = %mutation.action,
                nested = mutation.is_nested(),
                relation = mutation.relation(),
                fragment = %fragment.source,
                "validating fragment"
            );

            if let Err(err) = validator.validate(fragment.payload) {
                let err = (self.annotate)(err.in_fragment(fragment.source), mutation);
                debug!(
                    entity = mutation.entity,
                    action = %mutation.action,
                    nested = mutation.is_nested(),
                    relation = mutation.relation(),
                    fragment = %fragment.source,
                    error = %err,
                    "mutation rejected"
                );
                return Err(err);
            }
        }

        Ok(())
    }

    /// Validate a mutation, then run `proceed` if it passed.
    ///
    /// Rejections are converted into the caller's error type. Whatever
    /// `proceed` returns, value or error, is handed back untouched.
    pub fn dispatch<T, E, F>(&self, mutation: &MutationDescription<'_>, proceed: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<ValidationError>,
    {
        self.validate(mutation)?;
        proceed()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
