//! docmodel command-line driver.
//!
//! Loads JSON model descriptions, runs the resolver over them and renders
//! member lists, flattened hierarchies or a JSON report.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
