//! Mutation descriptions handed to the dispatcher by a nested-operation walker.

use crate::ActionKind;
use std::fmt;

/// Arguments and fragments are plain JSON documents.
pub type Payload = serde_json::Value;

/// Cardinality of the relation field a nested mutation was reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// The relation points at a single record.
    ToOne,
    /// The relation points at a list of records.
    ToMany,
}

impl Cardinality {
    /// Returns true for list relations.
    pub fn is_list(&self) -> bool {
        matches!(self, Cardinality::ToMany)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::ToOne => write!(f, "to-one"),
            Cardinality::ToMany => write!(f, "to-many"),
        }
    }
}

/// Where a nested mutation came from inside its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestingContext {
    /// Cardinality of the relation field.
    pub cardinality: Cardinality,
    /// Name of the relation field, if the walker knows it. Only used for logging.
    pub relation: Option<String>,
}

impl NestingContext {
    pub fn new(cardinality: Cardinality) -> Self {
        Self {
            cardinality,
            relation: None,
        }
    }

    pub fn to_one() -> Self {
        Self::new(Cardinality::ToOne)
    }

    pub fn to_many() -> Self {
        Self::new(Cardinality::ToMany)
    }

    /// Attach the relation field name.
    pub fn via(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }
}

/// One entity-level write, root or nested, as seen by the dispatcher.
///
/// The arguments are borrowed: a description lives only for the duration of
/// a single dispatch call and is never allowed to change what it describes.
#[derive(Debug, Clone, Copy)]
pub struct MutationDescription<'a> {
    /// Entity type being written.
    pub entity: &'a str,
    /// What kind of write this is.
    pub action: ActionKind,
    /// Action-shaped arguments.
    pub arguments: &'a Payload,
    /// Present when the mutation was reached through a relation field.
    pub nesting: Option<&'a NestingContext>,
}

impl<'a> MutationDescription<'a> {
    /// Describe a mutation issued at the root of an operation.
    pub fn root(entity: &'a str, action: ActionKind, arguments: &'a Payload) -> Self {
        Self {
            entity,
            action,
            arguments,
            nesting: None,
        }
    }

    /// Describe a mutation reached through a relation field of a parent mutation.
    pub fn nested(
        entity: &'a str,
        action: ActionKind,
        arguments: &'a Payload,
        nesting: &'a NestingContext,
    ) -> Self {
        Self {
            entity,
            action,
            arguments,
            nesting: Some(nesting),
        }
    }

    /// Returns true if this mutation was reached through a relation field.
    pub fn is_nested(&self) -> bool {
        self.nesting.is_some()
    }

    /// Returns true if this mutation was reached through a to-one relation field.
    pub fn is_nested_to_one(&self) -> bool {
        self.nesting.is_some_and(|n| !n.cardinality.is_list())
    }

    /// Name of the relation field this mutation was reached through, if known.
    pub fn relation(&self) -> Option<&'a str> {
        self.nesting.and_then(|n| n.relation.as_deref())
    }
}

impl fmt::Display for MutationDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity, self.action)
    }
}

/// Which part of a mutation's arguments a fragment was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentSource {
    /// The arguments themselves (nested create, nested to-one update).
    Arguments,
    /// `arguments.data`.
    Data,
    /// One element of `arguments.data`, by array index.
    DataElement(usize),
    /// `arguments.create`.
    Create,
    /// `arguments.update`.
    Update,
}

impl fmt::Display for FragmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentSource::Arguments => write!(f, "arguments"),
            FragmentSource::Data => write!(f, "data"),
            FragmentSource::DataElement(i) => write!(f, "data[{}]", i),
            FragmentSource::Create => write!(f, "create"),
            FragmentSource::Update => write!(f, "update"),
        }
    }
}
