//! CLI argument types.
mod cli;
mod defaults;


pub use cli::BlasterArgs;
pub use defaults::{
    DEFAULT_CONFIG_FILE, DEFAULT_HEAP_PROFILE_FILE, DEFAULT_REQUEST_TIMEOUT, DEFAULT_RESULTS_FILE,
};

pub(crate) use defaults::DEFAULT_USER_AGENT;
