//! Action kinds of intercepted mutations.
//!
//! Action names follow the data-access layer's camelCase spelling
//! (`create`, `createMany`, `connectOrCreate`, ...). Anything that does not
//! write data collapses into [`ActionKind::Other`].

use std::fmt;
use std::str::FromStr;

/// The kind of action carried by a mutation description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Single-row create.
    Create,
    /// Single-row update.
    Update,
    /// Create-or-update of a single row.
    Upsert,
    /// Batched create.
    CreateMany,
    /// Batched update sharing one payload.
    UpdateMany,
    /// Connect to an existing row, or create it.
    ConnectOrCreate,
    /// Reads, deletes, plain connects and raw operations.
    Other,
}

impl ActionKind {
    /// All action kinds that carry written data.
    pub const WRITES: [ActionKind; 6] = [
        ActionKind::Create,
        ActionKind::Update,
        ActionKind::Upsert,
        ActionKind::CreateMany,
        ActionKind::UpdateMany,
        ActionKind::ConnectOrCreate,
    ];

    /// The data-access layer's name for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Create => "create",
            ActionKind::Update => "update",
            ActionKind::Upsert => "upsert",
            ActionKind::CreateMany => "createMany",
            ActionKind::UpdateMany => "updateMany",
            ActionKind::ConnectOrCreate => "connectOrCreate",
            ActionKind::Other => "other",
        }
    }

    /// Map an action name to its kind. Unknown names are [`ActionKind::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "create" => ActionKind::Create,
            "update" => ActionKind::Update,
            "upsert" => ActionKind::Upsert,
            "createMany" => ActionKind::CreateMany,
            "updateMany" => ActionKind::UpdateMany,
            "connectOrCreate" => ActionKind::ConnectOrCreate,
            _ => ActionKind::Other,
        }
    }

    /// Returns true if this action can introduce written data.
    pub fn is_write(&self) -> bool {
        !matches!(self, ActionKind::Other)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ActionKind::from_name(s))
    }
}
