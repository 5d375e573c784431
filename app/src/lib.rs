//! srsconv application crate: CLI wiring around `srs-convert`.

pub mod cli;
pub mod tracing_init;
