//! Common utilities for the Quire renderer.
//!
//! This crate provides shared infrastructure used by all renderer components:
//! - **Warning System** - colored, deduplicated terminal output for style
//!   values that fell back to a default

pub mod warning;
