//! HTTP client construction, the shared write payload, and single-request
//! execution.
mod client;
mod payload;
mod request;


pub use client::{ClientSettings, build_client, target_url};
pub use payload::PayloadBuffer;
pub use request::send_request;
