//! Build script for septima-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml and compiles it into a constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use septima_core::config::{ConfigError, DisplayConfig};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);

    let config = load_config();
    write_config(&out_dir, &config);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Layout of display.toml
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    display: DisplayConfig,
}

/// Read and validate display.toml
fn load_config() -> DisplayConfig {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    // A missing file means built-in defaults
    if !config_path.exists() {
        println!("cargo:warning=display.toml not found, using default display settings");
        return DisplayConfig::default();
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let file: ConfigFile = match toml::from_str(&config_content) {
        Ok(file) => file,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid display.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = file.display.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid [display] settings in display.toml               ║\n\
            ║                                                                  ║\n\
            ║  {:<64} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            describe(e)
        );
    }

    println!("cargo:warning=display.toml validated successfully");
    file.display
}

fn describe(error: ConfigError) -> &'static str {
    match error {
        ConfigError::BrightnessOutOfRange => "brightness must be 0-15",
        ConfigError::ZeroScrollDelay => "scroll_delay_ms must be greater than 0",
        ConfigError::FrequencyOutOfRange => "spi_frequency_hz must be 1-10000000",
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emit the validated settings as a Rust constant
fn write_config(out_dir: &Path, config: &DisplayConfig) {
    let mut f = File::create(out_dir.join("display_config.rs")).unwrap();
    writeln!(
        f,
        "pub const DISPLAY_CONFIG: DisplayConfig = DisplayConfig {{\n    \
         brightness: {},\n    \
         scroll_delay_ms: {},\n    \
         twelve_hour: {},\n    \
         blink_colon: {},\n    \
         spi_frequency_hz: {},\n\
         }};",
        config.brightness,
        config.scroll_delay_ms,
        config.twelve_hour,
        config.blink_colon,
        config.spi_frequency_hz,
    )
    .unwrap();
}
