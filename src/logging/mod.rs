// file: src/logging/mod.rs
// version: 1.0.0
// guid: 00c83c2d-2b6f-4128-be9e-d8d0b00fff20

//! Logging system for the ZFS install configuration tool

pub mod logger;

pub use logger::init_logger;
