//! Calendar modal state — single selected date, capped at today.

use chrono::{Days, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::action::Action;

/// Formats a stored ISO date for display, or the placeholder when unset.
pub fn display_date(iso: &str) -> String {
    if iso.is_empty() {
        return "Select Date".to_string();
    }
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%a, %b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// State for the calendar modal.
///
/// Recaps describe past or current activity, so the selectable maximum is
/// the construction-time "today"; later dates are rejected at selection, not
/// validated after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerState {
    open: bool,
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
    max: NaiveDate,
}

impl DatePickerState {
    /// Creates a closed picker with nothing selected and the given maximum
    /// selectable date.
    pub fn new(max: NaiveDate) -> Self {
        Self {
            open: false,
            cursor: max,
            selected: None,
            max,
        }
    }

    /// Reveals the calendar, cursor on the selection (or the maximum).
    pub fn open(&mut self) {
        self.open = true;
        self.cursor = self.selected.unwrap_or(self.max);
    }

    /// Closes the calendar without reporting a date.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Returns `true` while the calendar is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the confirmed selection, if any.
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Returns the highlighted day.
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Returns the latest selectable date.
    pub fn max(&self) -> NaiveDate {
        self.max
    }

    /// Confirms `date` and closes the calendar.
    ///
    /// Rejected (state unchanged) for any date after the maximum.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if date > self.max {
            return false;
        }
        self.selected = Some(date);
        self.open = false;
        true
    }

    /// Handles a key event while the calendar is open.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left => {
                self.move_days(-1);
                Action::None
            }
            KeyCode::Right => {
                self.move_days(1);
                Action::None
            }
            KeyCode::Up => {
                self.move_days(-7);
                Action::None
            }
            KeyCode::Down => {
                self.move_days(7);
                Action::None
            }
            KeyCode::PageUp => {
                self.move_months(-1);
                Action::None
            }
            KeyCode::PageDown => {
                self.move_months(1);
                Action::None
            }
            KeyCode::Char('t') => {
                // Today shortcut: always within the maximum.
                let today = self.max;
                self.select(today);
                Action::SelectDate(today)
            }
            KeyCode::Enter => {
                let cursor = self.cursor;
                if self.select(cursor) {
                    Action::SelectDate(cursor)
                } else {
                    Action::None
                }
            }
            KeyCode::Esc => {
                self.cancel();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn move_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days as u64))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    fn move_months(&mut self, months: i32) {
        let moved = if months >= 0 {
            self.cursor.checked_add_months(Months::new(months as u32))
        } else {
            self.cursor
                .checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn max() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn new_is_closed_and_unselected() {
        let picker = DatePickerState::new(max());
        assert!(!picker.is_open());
        assert_eq!(picker.selected(), None);
        assert_eq!(picker.cursor(), max());
    }

    #[test]
    fn select_past_date_accepted() {
        let mut picker = DatePickerState::new(max());
        picker.open();
        let date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        assert!(picker.select(date));
        assert_eq!(picker.selected(), Some(date));
        assert!(!picker.is_open());
    }

    #[test]
    fn select_today_accepted() {
        let mut picker = DatePickerState::new(max());
        assert!(picker.select(max()));
        assert_eq!(picker.selected(), Some(max()));
    }

    #[test]
    fn select_future_date_rejected_state_unchanged() {
        let mut picker = DatePickerState::new(max());
        picker.open();
        let future = max().succ_opt().unwrap();
        assert!(!picker.select(future));
        assert_eq!(picker.selected(), None);
        assert!(picker.is_open());
    }

    #[test]
    fn cancel_closes_without_reporting() {
        let mut picker = DatePickerState::new(max());
        picker.open();
        picker.cancel();
        assert!(!picker.is_open());
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn open_moves_cursor_to_selection() {
        let mut picker = DatePickerState::new(max());
        let date = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
        picker.open();
        picker.select(date);
        picker.open();
        assert_eq!(picker.cursor(), date);
    }

    #[test]
    fn enter_on_future_cursor_is_rejected() {
        let mut picker = DatePickerState::new(max());
        picker.open();
        picker.handle_key(press(KeyCode::Right));
        assert_eq!(picker.cursor(), max().succ_opt().unwrap());

        let action = picker.handle_key(press(KeyCode::Enter));
        assert_eq!(action, Action::None);
        assert!(picker.is_open());
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn enter_selects_cursor() {
        let mut picker = DatePickerState::new(max());
        picker.open();
        picker.handle_key(press(KeyCode::Left));
        let expected = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let action = picker.handle_key(press(KeyCode::Enter));
        assert_eq!(action, Action::SelectDate(expected));
        assert_eq!(picker.selected(), Some(expected));
        assert!(!picker.is_open());
    }

    #[test]
    fn today_shortcut_selects_max() {
        let mut picker = DatePickerState::new(max());
        picker.open();
        picker.handle_key(press(KeyCode::PageUp));
        let action = picker.handle_key(press(KeyCode::Char('t')));
        assert_eq!(action, Action::SelectDate(max()));
        assert_eq!(picker.selected(), Some(max()));
        assert!(!picker.is_open());
    }

    #[test]
    fn arrows_move_by_day_and_week() {
        let mut picker = DatePickerState::new(max());
        picker.open();
        picker.handle_key(press(KeyCode::Up));
        assert_eq!(picker.cursor(), NaiveDate::from_ymd_opt(2026, 7, 30).unwrap());
        picker.handle_key(press(KeyCode::Down));
        picker.handle_key(press(KeyCode::Left));
        assert_eq!(picker.cursor(), NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
    }

    #[test]
    fn page_keys_move_by_month() {
        let mut picker = DatePickerState::new(max());
        picker.open();
        picker.handle_key(press(KeyCode::PageUp));
        assert_eq!(picker.cursor(), NaiveDate::from_ymd_opt(2026, 7, 6).unwrap());
        picker.handle_key(press(KeyCode::PageDown));
        assert_eq!(picker.cursor(), max());
    }

    #[test]
    fn esc_cancels_via_keys() {
        let mut picker = DatePickerState::new(max());
        picker.open();
        let action = picker.handle_key(press(KeyCode::Esc));
        assert_eq!(action, Action::None);
        assert!(!picker.is_open());
    }

    // --- display_date ---

    #[test]
    fn display_placeholder_when_unset() {
        assert_eq!(display_date(""), "Select Date");
    }

    #[test]
    fn display_formats_iso_date() {
        assert_eq!(display_date("2026-08-05"), "Wed, Aug 5, 2026");
        assert_eq!(display_date("2026-01-01"), "Thu, Jan 1, 2026");
    }

    #[test]
    fn display_falls_back_to_raw_string() {
        assert_eq!(display_date("not-a-date"), "not-a-date");
    }
}
