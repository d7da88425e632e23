//! Display controller drivers
//!
//! This crate provides concrete implementations of the display traits
//! defined in septima-core:
//!
//! - MAX7219 / MAX7221 serial LED driver (4-digit seven-segment modules)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod max7219;

#[cfg(test)]
mod mock;

pub use max7219::{Max7219Display, Max7219Error};
