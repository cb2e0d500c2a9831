//! TUI screen implementations.

pub mod date_picker;
pub mod recap_entry;

pub use date_picker::{DatePickerState, display_date};
pub use recap_entry::{RecapEntryState, Row, draw_recap_entry, rows, visible_rows};
