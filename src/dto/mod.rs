//! DTO modules that bridge the relay with its callers and the upstream API.

pub mod api;
pub mod upstream;
