//! # casegen-core
//!
//! Core types shared across all casegen crates:
//! - Entity structs for specifications and generated test cases
//! - Structural validation of generated cases
//! - Slug and bounded-repr text helpers
//! - Error kinds every crate error maps onto
//! - Serde adapters for presence-aware and null-tolerant fields

pub mod entities;
pub mod errors;
pub mod serde_ext;
pub mod text;
pub mod validation;

pub use entities::{GeneratedTestCase, InputCase, Specification, TestStep};
pub use errors::{ErrorKind, ValidationError};
pub use validation::{ValidationReport, validate_test_cases};
