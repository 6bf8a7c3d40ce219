//! Git hooks for Gigmarket development tools
//!
//! This crate provides the pre-commit hook implementation:
//! - Secret scanning over staged files

pub mod secrets;

pub use gigmarket_core::error::{exit_codes, Result};
