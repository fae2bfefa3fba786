//! STINT Colors - Color table loading
//!
//! This crate reads the `colors.csv` table into validated color records:
//! - `ColorTable`: semicolon-delimited table with a required header row
//! - Single-clock policy: first record wins, every failure defaults
//! - Quad-clock policy: all records, unknown position labels are fatal
//!
//! The loader runs exactly once at startup and performs no caching.

pub mod loader;
pub mod table;

pub use loader::*;
pub use table::*;
