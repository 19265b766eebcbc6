//! mutguard Registry
//!
//! Validators and the immutable registry that maps entity names to them.
//!
//! # Module Structure
//!
//! - `validator` - The `Validator` capability plus closure, typed and chained adapters
//! - `registry` - `ValidatorRegistry`, the read-only lookup used on every dispatch
//! - `builder` - `RegistryBuilder` and its construction errors

mod builder;
mod registry;
mod validator;

pub use builder::{RegistryBuilder, RegistryError};
pub use registry::ValidatorRegistry;
pub use validator::{from_fn, typed, All, Typed, Validator};
