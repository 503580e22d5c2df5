/*
[INPUT]:  Public API exports for the kettik-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point shared by the binary and tests
[UPDATE]: When adding new modules or public exports
*/

pub mod app;
pub mod cli;
pub mod config;
pub mod navigator;
pub mod render;

// Re-export main types for convenience
pub use app::App;
pub use cli::Command;
pub use config::{CliConfig, CliOverrides};
pub use navigator::TerminalNavigator;
