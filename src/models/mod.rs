//! Runtime models shared across the relay.

pub mod config;
