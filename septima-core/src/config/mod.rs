//! Configuration types
//!
//! Board-agnostic display settings. The firmware fills these from its TOML
//! file at build time; nothing is persisted at runtime.

pub mod types;

pub use types::*;
