//! mutguard Mutation
//!
//! Validate intercepted writes before they reach storage.
//!
//! Responsibilities:
//! - Classify a mutation's arguments into fragments of written data
//! - Run the entity's validator over each fragment, fail-fast
//! - Annotate the first rejection with entity and action
//! - Run the write only when everything passed
//!
//! # Module Structure
//!
//! - `classifier` - Per-action extraction of fragments
//! - `dispatcher` - `Dispatcher`, called once per mutation node by a walker
//! - `annotate` - Error annotation policies
//! - `builder` - `DispatcherBuilder` configuration

mod annotate;
mod builder;
mod classifier;
mod dispatcher;

pub use annotate::{default_annotation, tag_only, AnnotationPolicy};
pub use builder::DispatcherBuilder;
pub use classifier::{classify, Fragment};
pub use dispatcher::Dispatcher;
