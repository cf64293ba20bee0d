//! Shared primitives: errors, colours, geometry.

pub mod core;
pub mod error;
