//! Cascaded style lookups for the Quire renderer.
//!
//! # Scope
//!
//! Selector matching and the cascade itself happen upstream. This crate
//! models what the renderer consumes from them:
//!
//! - **Cascade outcomes** ([`Cascaded`]) - every lookup resolves to a value,
//!   an explicit instruction to inherit, or "no styles at all"
//! - **Style errors** ([`StyleError`]) - malformed values that must abort
//!   rendering instead of producing wrong geometry
//! - **Values** - colors ([`ColorValue`]), pixel lengths and display keywords
//!   ([`DisplayType`])
//! - **Style handles** ([`StyledElement`]) - per-node cascaded declarations
//!   with typed accessors
//!
//! # Not Yet Implemented
//!
//! - Relative length units (em, rem, %)
//! - rgb(), hsl() color functions

/// Three-way cascade outcomes and style errors.
pub mod cascade;
/// Display keyword parsing.
pub mod display;
/// Per-node cascaded declarations.
pub mod styled;
/// Color and length values.
pub mod values;

pub use cascade::{Cascaded, Declared, StyleError};
pub use display::DisplayType;
pub use styled::StyledElement;
pub use values::{ColorValue, DEFAULT_FONT_SIZE_PX, MAX_PX, parse_px};
