//! mutguard Core Types
//!
//! This crate provides the types shared by every mutguard component:
//! - Action kinds (the closed set of intercepted actions)
//! - Mutation descriptions (entity, action, arguments, nesting context)
//! - Fragment sources (which part of the arguments a payload came from)
//! - The validation error raised by validators and annotated by the dispatcher

mod action;
mod error;
mod mutation;

pub use action::*;
pub use error::*;
pub use mutation::*;
