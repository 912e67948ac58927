//! medsched-tui - Terminal UI for the appointment form
//!
//! This crate provides the ratatui-based terminal interface: it renders the
//! form and its picker modals from an [`AppState`](medsched_app::AppState),
//! converts crossterm key events into app messages and runs the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
