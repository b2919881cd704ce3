//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes,
//! organized by responsibility:
//!
//! - [`bits`]: the bit-field visualization (colored bit cells, field
//!   labels for IEEE-754 subjects, nibble ruler for integers)
//! - [`report`]: the currently selected textual report
//! - [`status`]: status bar with keybindings and the report selector
//!
//! Each pane module exports a primary `render_*_pane()` function that
//! draws into a [`ratatui::Frame`] region and owns no state of its own;
//! scroll offsets live in [`crate::ui::app::App`] and are passed in
//! mutably so panes can clamp them to the rendered content.

pub mod bits;
pub mod report;
pub mod status;

pub use bits::render_bits_pane;
pub use report::render_report_pane;
pub use status::render_status_bar;
