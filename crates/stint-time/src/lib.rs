//! STINT Time - Stopwatch state machine and refresh cadence
//!
//! This crate implements the timing half of the display:
//! - `Stopwatch`: pause/resume elapsed-time accumulation
//! - `RefreshCadence`: the explicit re-arming redraw interval
//!
//! Timestamps are always passed in by the caller, so nothing here samples
//! a clock or touches the rendering stack.

pub mod cadence;
pub mod stopwatch;

pub use cadence::*;
pub use stopwatch::*;
