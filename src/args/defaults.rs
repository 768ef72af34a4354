use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!("http-blaster/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_CONFIG_FILE: &str = "example.toml";
pub const DEFAULT_RESULTS_FILE: &str = "example.results";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_HEAP_PROFILE_FILE: &str = "mem_profile";
