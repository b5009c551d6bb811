//! Harbor CLI library.
//!
//! Terminal styling and output formatting shared by the `harbor-cli` binary
//! and its tests.

pub mod output;
pub mod terminal;
