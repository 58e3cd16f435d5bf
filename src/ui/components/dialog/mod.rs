//! Overlay components for TUI

mod base;
mod snackbar;

pub use snackbar::render_snackbar;
