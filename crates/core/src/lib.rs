//! `contrast-core` — foundation building blocks for the value-vs-identity demo.
//!
//! This crate contains **pure domain** primitives (no IO, no printing): the
//! value-object contract, identity-comparison helpers, the error model, and
//! strongly-typed identifiers.

pub mod error;
pub mod id;
pub mod identity;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use identity::{identity_hash, same_instance};
pub use value_object::{ValueObject, structural_hash};
