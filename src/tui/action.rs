//! Actions returned by input handlers.

use chrono::NaiveDate;

/// An action that an input handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the record, move between pages, and
/// start asynchronous work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Advance to the next page.
    NextPage,
    /// Return to the previous page.
    PrevPage,
    /// Open the calendar modal for the date field.
    OpenCalendar,
    /// A day was confirmed in the calendar modal.
    SelectDate(NaiveDate),
    /// Start a location fetch.
    FetchLocation,
    /// Submit the recap (honored only on the final page).
    Submit,
    /// Close the active alert.
    DismissAlert,
    /// Quit the application.
    Quit,
}
