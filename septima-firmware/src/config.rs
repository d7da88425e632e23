//! Build-time display configuration
//!
//! `build.rs` validates display.toml and generates `DISPLAY_CONFIG`.

use septima_core::config::DisplayConfig;

include!(concat!(env!("OUT_DIR"), "/display_config.rs"));
