//! Core utilities for Gigmarket development tools
//!
//! This crate provides shared functionality used by the git hook binaries:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **File reading**: Defensive, lossy text loading that tolerates binary input
//!
//! # Example
//!
//! ```rust,no_run
//! use gigmarket_core::fs::read_to_string_lossy;
//! use std::path::Path;
//!
//! match read_to_string_lossy(Path::new(".env.local")) {
//!     Ok(content) => println!("{} bytes of text", content.len()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod fs;

pub use error::{Error, ErrorCode, Result, ResultExt};
