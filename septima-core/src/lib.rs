//! Board-agnostic core logic for the seven-segment display firmware
//!
//! This crate contains all display logic that does not depend on
//! specific hardware implementations:
//!
//! - Glyph encoding (raw segments and Code B)
//! - Text preprocessing (decimal point merging)
//! - Clock face digit layout
//! - Scroll and animation state machines
//! - Hardware abstraction traits (display contract, clock)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod glyph;
pub mod state;
pub mod text;
pub mod time;
pub mod traits;
