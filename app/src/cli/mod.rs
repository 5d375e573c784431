//! CLI modules.

pub mod convert;
