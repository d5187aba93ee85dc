//! Shared validation helpers and input limits.

pub mod validation;
