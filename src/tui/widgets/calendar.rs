//! Month-grid calendar widget for the date picker modal.

use chrono::{Datelike, NaiveDate};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::screens::DatePickerState;

/// Returns the number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .map(|d| d.pred_opt().map(|p| p.day()).unwrap_or(31))
        .unwrap_or(31)
}

/// Returns the Sunday-based weekday column of the first of the month.
pub fn first_weekday_offset(year: i32, month: u32) -> usize {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0)
}

/// Builds the month as Sunday-first weeks; `None` pads the edges.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let offset = first_weekday_offset(year, month);
    let days = days_in_month(year, month);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut column = offset;
    for day in 1..=days {
        week[column] = Some(day);
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }
    weeks
}

/// Renders the calendar modal over the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_calendar(state: &DatePickerState, frame: &mut Frame, area: Rect) {
    let cursor = state.cursor();
    let weeks = month_grid(cursor.year(), cursor.month());
    let height = weeks.len() as u16 + 7;

    let [modal] = Layout::horizontal([Constraint::Length(40)])
        .flex(Flex::Center)
        .areas(area);
    let [modal] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(modal);

    frame.render_widget(Clear, modal);
    let block = Block::default()
        .title(" Select Date ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines = vec![
        Line::from(Span::styled(
            cursor.format("%B %Y").to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Su Mo Tu We Th Fr Sa",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];

    for week in &weeks {
        let mut spans = Vec::new();
        for slot in week {
            match slot {
                Some(day) => {
                    let date = NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), *day);
                    let mut style = Style::default();
                    if date.is_some_and(|d| d > state.max()) {
                        style = style.fg(Color::DarkGray);
                    }
                    if date == state.selected() {
                        style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
                    }
                    if date == Some(cursor) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    spans.push(Span::styled(format!("{day:>2}"), style));
                }
                None => spans.push(Span::raw("  ")),
            }
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).centered());
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "t: today  Enter: select  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}
