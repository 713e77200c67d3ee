//! CLI output formatting.
//!
//! Human-readable output goes through the helpers here so JSON mode (for
//! scripting) and quiet mode behave the same in every command. In JSON mode
//! each command prints exactly one JSON document via [`json_output`].

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Decorative output is skipped in JSON mode and in quiet mode.
fn decorations_suppressed(config: OutputConfig) -> bool {
    config.json || config.quiet
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    if decorations_suppressed(read_config()) {
        return;
    }
    println!("{} {}", "oddsboard".bold(), version.dimmed());
    println!();
}

/// Print a section header.
pub fn section(title: &str) {
    if decorations_suppressed(read_config()) {
        return;
    }
    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if decorations_suppressed(read_config()) {
        return;
    }
    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a primary result line. Shown in quiet mode, never in JSON mode.
pub fn result(value: impl Display) {
    if is_json() {
        return;
    }
    println!("{value}");
}

/// Print multiple lines of content, each indented. Shown in quiet mode.
pub fn lines(content: &str) {
    if is_json() {
        return;
    }
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Print a warning line to stderr.
pub fn warning(message: &str) {
    if is_json() {
        return;
    }
    eprintln!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a note.
pub fn note(message: &str) {
    if decorations_suppressed(read_config()) {
        return;
    }
    println!("  {}", message.dimmed());
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    if decorations_suppressed(read_config()) {
        return;
    }
    println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
}

/// Emit a JSON value directly.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

/// Format a best-price value in bold green.
pub fn best(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.green().bold())
}

/// Format a positive value in green.
pub fn positive(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.green())
}

/// Format a negative value in red.
pub fn negative(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.red())
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.cyan())
}

/// Format a dimmed/muted value.
pub fn muted(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.dimmed())
}
