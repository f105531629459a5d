//! Minimal integer pipeline: transform, filter, and tally values into a
//! running total.
//!
//! Each input is doubled, values at or below 10 are zeroed out, and the
//! survivors are folded into a [`Calculator`] owned by a [`DataProcessor`].
//! The binary feeds a fixed batch through the pipeline and prints the tally.
//!
//! Building with the `debug-mode` feature compiles in `[DEBUG]` diagnostic
//! lines and a final sanity assert; default builds carry neither.

pub mod calculator;
pub mod output;
pub mod pipeline;
mod trace;

pub use calculator::Calculator;
pub use pipeline::{filter, transform, DataProcessor};
