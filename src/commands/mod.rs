//! Command flows behind the `latest-release` and `send-msg` binaries.

pub mod config;
mod latest;
mod send;
mod services;

pub use config::{LatestConfig, MESSAGE_FILE, SendConfig};
pub use latest::latest_release;
pub use send::send_message;
pub use services::{REQUEST_TIMEOUT, build_http_client};
