//! Reusable TUI widgets.

pub mod calendar;
pub mod form;
pub mod progress;

pub use calendar::draw_calendar;
pub use form::{LocationDisplay, draw_field_row, draw_location_row};
pub use progress::draw_progress;
