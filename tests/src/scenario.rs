//! Scenario definition and builder.

use mutguard_mutation::{Dispatcher, DispatcherBuilder};

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::HarnessResult;
use crate::runner::Runner;
use crate::tree::WriteNode;

/// A step in a scenario with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Step name (for reporting).
    pub name: String,
    /// The write tree to run.
    pub tree: WriteNode,
    /// Assertion to verify the result.
    pub assertion: Assertion,
}

/// A sequence of write trees run against one dispatcher and one store.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Dispatcher to use; the fixture dispatcher if unset.
    dispatcher: Option<Dispatcher>,
    /// Why the configured dispatcher could not be built.
    setup_error: Option<String>,
    /// Entities the store refuses to write.
    unavailable: Vec<String>,
    /// Steps with assertions.
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dispatcher: None,
            setup_error: None,
            unavailable: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Use a specific dispatcher instead of the fixture one.
    pub fn dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Build the dispatcher from a builder. A configuration error fails the run.
    pub fn configure(mut self, builder: DispatcherBuilder) -> Self {
        match builder.build() {
            Ok(dispatcher) => self.dispatcher = Some(dispatcher),
            Err(err) => self.setup_error = Some(err.to_string()),
        }
        self
    }

    /// Make the store refuse writes to an entity.
    pub fn unavailable(mut self, entity: impl Into<String>) -> Self {
        self.unavailable.push(entity.into());
        self
    }

    /// Add a step with an assertion.
    pub fn step<F>(mut self, name: impl Into<String>, tree: WriteNode, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let name = name.into();
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step {
            name,
            tree,
            assertion,
        });
        self
    }

    /// Run the scenario and return the result.
    pub fn run(&self) -> HarnessResult<()> {
        Runner::new(self).run()
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the configured dispatcher, if any.
    pub fn configured_dispatcher(&self) -> Option<&Dispatcher> {
        self.dispatcher.as_ref()
    }

    /// Get the dispatcher configuration error, if any.
    pub fn setup_error(&self) -> Option<&str> {
        self.setup_error.as_deref()
    }

    /// Get the entities the store refuses.
    pub fn unavailable_entities(&self) -> &[String] {
        &self.unavailable
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("test")
            .unavailable("Comment")
            .step(
                "create",
                WriteNode::new("User", "create", json!({ "data": { "email": "a@b.com" } })),
                |a| a.writes(1),
            )
            .step(
                "reject",
                WriteNode::new("User", "create", json!({ "data": { "email": "bad" } })),
                |a| a.error("User.create: email must include @"),
            );

        assert_eq!(scenario.name(), "test");
        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(scenario.steps()[0].name, "create");
        assert_eq!(scenario.steps()[1].assertion.writes, None);
        assert_eq!(scenario.unavailable_entities(), ["Comment".to_string()]);
        assert!(scenario.configured_dispatcher().is_none());
    }

    #[test]
    fn test_configure_records_setup_error() {
        let scenario = Scenario::new("duplicate").configure(
            Dispatcher::builder()
                .validator("User", crate::fixtures::user_email)
                .validator("User", crate::fixtures::user_email),
        );

        assert!(scenario.configured_dispatcher().is_none());
        assert!(scenario.setup_error().is_some());
    }
}
