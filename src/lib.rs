//! medsched - schedule a medical appointment from the terminal
//!
//! The binary offers the interactive form (`medsched-tui`) and a headless
//! NDJSON mode for scripting. Both build their state through [`startup`].

pub mod app;
pub mod headless;
pub mod startup;

// Re-export main entry points
pub use app::run;
pub use headless::run_headless;
pub use startup::StartupOptions;
