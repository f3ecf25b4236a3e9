//! Filesystem utilities for prompt-batch.
//!
//! Output artifacts are written atomically so an interrupted run never leaves
//! a truncated file behind in `outputs/`.

mod atomic;
mod output;

pub use output::write_output;
