//! Recap entry screen — the paged data entry form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::model::{FieldKey, FieldKind, Page, RecapRecord, is_numeric_input};
use crate::tui::action::Action;
use crate::tui::widgets::form::{LocationDisplay, draw_field_row, draw_location_row};

/// One focusable row on a page: a bound field, or the location affordance.
///
/// The location row stands in for the derived latitude/longitude fields,
/// which are never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Field(FieldKey),
    Location,
}

/// Returns the rows of a page in display order.
pub fn rows(page: Page) -> Vec<Row> {
    let mut rows = Vec::new();
    for key in FieldKey::all().iter().filter(|k| k.page() == page) {
        match key {
            FieldKey::Latitude => rows.push(Row::Location),
            FieldKey::Longitude => {}
            _ => rows.push(Row::Field(*key)),
        }
    }
    rows
}

/// Returns the rows of a page with gated fields hidden while their flag is
/// unset.
pub fn visible_rows(page: Page, record: &RecapRecord) -> Vec<Row> {
    rows(page)
        .into_iter()
        .filter(|row| match row {
            Row::Field(key) => key.gated_by().is_none_or(|gate| record.flag(gate)),
            Row::Location => true,
        })
        .collect()
}

/// State for the recap entry screen: field focus within the active page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecapEntryState {
    focus: usize,
    choice_cursor: usize,
}

impl RecapEntryState {
    /// Creates a new entry state focused on the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of the focused row.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the option cursor within a focused multi-choice row.
    pub fn choice_cursor(&self) -> usize {
        self.choice_cursor
    }

    /// Resets focus after a page change.
    pub fn page_changed(&mut self) {
        self.focus = 0;
        self.choice_cursor = 0;
    }

    /// Returns the focused row of the given page, if any.
    pub fn focused_row(&self, page: Page, record: &RecapRecord) -> Option<Row> {
        visible_rows(page, record).get(self.focus).copied()
    }

    /// Handles a key event, editing the record in place and returning an
    /// [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, page: Page, record: &mut RecapRecord) -> Action {
        // Alt chords: page navigation and submission.
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('n') => return Action::NextPage,
                KeyCode::Char('p') => return Action::PrevPage,
                KeyCode::Char('s') => return Action::Submit,
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_move(page, record, 1);
                Action::None
            }
            KeyCode::BackTab => {
                self.focus_move(page, record, -1);
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => match self.focused_row(page, record) {
                Some(Row::Location) => Action::FetchLocation,
                Some(Row::Field(key)) if key.kind() == FieldKind::Date => Action::OpenCalendar,
                _ => Action::None,
            },
            KeyCode::Backspace => {
                if let Some(Row::Field(key)) = self.focused_row(page, record) {
                    match key.kind() {
                        FieldKind::Text | FieldKind::Numeric => record.pop_char(key),
                        FieldKind::Count => record.pop_digit(key),
                        _ => {}
                    }
                }
                Action::None
            }
            KeyCode::Left | KeyCode::Right => {
                if let Some(Row::Field(field)) = self.focused_row(page, record)
                    && field.kind() == FieldKind::MultiChoice
                {
                    let last = field.choices().len().saturating_sub(1);
                    self.choice_cursor = if key.code == KeyCode::Left {
                        self.choice_cursor.saturating_sub(1)
                    } else {
                        (self.choice_cursor + 1).min(last)
                    };
                }
                Action::None
            }
            KeyCode::Char(ch) => {
                self.handle_char(ch, page, record);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Applies a printable character to the focused field.
    fn handle_char(&mut self, ch: char, page: Page, record: &mut RecapRecord) {
        let Some(Row::Field(key)) = self.focused_row(page, record) else {
            return;
        };
        match key.kind() {
            FieldKind::Text => record.push_char(key, ch),
            FieldKind::Numeric => {
                let candidate = format!("{}{ch}", record.text(key));
                if is_numeric_input(&candidate) {
                    record.push_char(key, ch);
                }
            }
            FieldKind::Count => {
                if let Some(digit) = ch.to_digit(10) {
                    record.push_digit(key, digit);
                }
            }
            FieldKind::Rating => {
                if let Some(rating) = ch.to_digit(10)
                    && (1..=5).contains(&rating)
                {
                    record.set_rating(key, rating as u8);
                }
            }
            FieldKind::Flag => {
                match ch {
                    ' ' => {
                        record.toggle_flag(key);
                    }
                    'y' => record.set_flag(key, true),
                    'n' => record.set_flag(key, false),
                    _ => {}
                }
                // Toggling a gate can hide rows below; keep focus in range.
                self.clamp_focus(page, record);
            }
            FieldKind::MultiChoice => {
                if ch == ' '
                    && let Some(choice) = key.choices().get(self.choice_cursor)
                {
                    record.toggle_choice(key, choice);
                }
            }
            FieldKind::Date => {}
        }
    }

    fn focus_move(&mut self, page: Page, record: &RecapRecord, step: isize) {
        let len = visible_rows(page, record).len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        self.focus = ((self.focus as isize + step).rem_euclid(len)) as usize;
        self.choice_cursor = 0;
    }

    fn clamp_focus(&mut self, page: Page, record: &RecapRecord) {
        let len = visible_rows(page, record).len();
        if len > 0 {
            self.focus = self.focus.min(len - 1);
        }
    }
}

/// Renders the active page's rows, windowed so the focused row stays
/// visible.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_recap_entry(
    state: &RecapEntryState,
    page: Page,
    record: &RecapRecord,
    location: &LocationDisplay,
    frame: &mut Frame,
    area: Rect,
) {
    let rows = visible_rows(page, record);
    let row_height = 3_u16;
    let [rows_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let capacity = (rows_area.height / row_height).max(1) as usize;
    let start = state.focus.saturating_sub(capacity - 1);
    let window = rows.iter().enumerate().skip(start).take(capacity);

    let constraints: Vec<Constraint> = window
        .clone()
        .map(|_| Constraint::Length(row_height))
        .collect();
    let areas = Layout::vertical(constraints).split(rows_area);

    for (slot, (index, row)) in window.enumerate() {
        let focused = index == state.focus;
        match row {
            Row::Field(key) => {
                draw_field_row(*key, record, focused, state.choice_cursor, frame, areas[slot]);
            }
            Row::Location => draw_location_row(location, record, focused, frame, areas[slot]),
        }
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next field  Alt+n/p: page  Alt+s: submit  Enter: open/fetch  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
