// file: src/utils/mod.rs
// version: 1.0.0
// guid: abae21e0-96f2-4106-9e51-84aad10811c0

//! Utility modules for host environment checks

pub mod environment;

pub use environment::{EnvironmentCheck, EnvironmentReport};
