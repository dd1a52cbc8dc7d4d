/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Parsing and validation of user-supplied values
pub mod input;
/// Tracing subscriber setup
pub mod logging;
/// Terminal bar display
pub mod progress;
/// GIF capture and export
pub mod visualization;
