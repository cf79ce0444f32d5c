//! Terminal UI for Tenzies.
//!
//! Renders the round snapshot with ratatui, forwards key and mouse input
//! to the engine, and drives the round clock from the event loop.

pub mod app;
pub mod logging;
pub mod terminal;
pub mod view;
