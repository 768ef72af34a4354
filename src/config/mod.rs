//! Configuration loading and translation into workload specs.
mod apply;
mod loader;
mod parse;
pub mod types;

#[cfg(test)]
mod tests;

pub use apply::{GlobalSettings, build_workload_specs, resolve_global};
pub use loader::load_config_file;
pub(crate) use parse::parse_duration_value;
