pub mod asset;
pub mod commands;
pub mod http;
pub mod notify;
pub mod provider;
pub mod runtime;
