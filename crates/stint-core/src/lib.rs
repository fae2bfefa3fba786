//! STINT Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout STINT:
//! - RGB colors and hex encoding
//! - Clock color pairs (background/foreground per displayed timer)
//! - Screen quadrant positions for the four-clock layout
//! - Error taxonomy

pub mod color;
pub mod error;
pub mod position;

pub use color::*;
pub use error::*;
pub use position::*;
