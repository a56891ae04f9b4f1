//! Application layer - use-case handlers over the profile store port.

pub mod handlers;
