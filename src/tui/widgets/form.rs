//! Field row rendering for the paged form.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::location::PermissionState;
use crate::model::{FieldKey, FieldKind, Fix, RecapRecord, is_required};
use crate::tui::screens::display_date;

/// What the location row needs to render its affordance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationDisplay {
    /// A fetch is in flight; the row is disabled.
    pub fetching: bool,
    /// Last known permission state, drives the button label.
    pub permission: PermissionState,
    /// The most recent resolved fix, if any.
    pub fix: Option<Fix>,
}

impl LocationDisplay {
    /// Returns the action label for the current state.
    pub fn button_label(&self) -> &'static str {
        if self.fetching {
            return "Getting Location...";
        }
        match self.permission {
            PermissionState::Granted => "Refresh Location",
            PermissionState::Denied => "Enable Location",
            PermissionState::Undetermined => "Get Location",
        }
    }
}

/// Renders one bound field row.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_field_row(
    key: FieldKey,
    record: &RecapRecord,
    focused: bool,
    choice_cursor: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };
    let label = if is_required(key, record) {
        format!("{} *", key.label())
    } else {
        key.label().to_string()
    };
    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = match key.kind() {
        FieldKind::Text | FieldKind::Numeric => text_line(record.text(key), focused),
        FieldKind::Date => {
            let display = display_date(record.text(key));
            let style = if record.text(key).is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(Span::styled(display, style))
        }
        FieldKind::Count => text_line(&record.count(key).to_string(), focused),
        FieldKind::Flag => {
            let value = record.flag(key);
            Line::from(vec![
                pick_span("Yes", value),
                Span::raw("  "),
                pick_span("No", !value),
            ])
        }
        FieldKind::Rating => {
            let value = record.rating(key);
            let mut spans = Vec::new();
            for rating in 1..=5u8 {
                spans.push(pick_span(&format!(" {rating} "), rating == value));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        }
        FieldKind::MultiChoice => {
            let mut spans = Vec::new();
            for (i, choice) in key.choices().iter().enumerate() {
                let selected = record.choices(key).iter().any(|c| c == choice);
                let mut span = pick_span(&format!("[{choice}]"), selected);
                if focused && i == choice_cursor {
                    span.style = span.style.add_modifier(Modifier::UNDERLINED);
                }
                spans.push(span);
                spans.push(Span::raw("  "));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line), inner);
}

/// Renders the location affordance row on the first page.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_location_row(
    location: &LocationDisplay,
    record: &RecapRecord,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .title("Location")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let latitude = record.text(FieldKey::Latitude);
    let longitude = record.text(FieldKey::Longitude);
    let coords = if latitude.is_empty() {
        Span::styled(
            "Press Enter to get location",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        let accuracy = location
            .fix
            .map(|fix| format!(" (\u{b1}{:.0} m)", fix.accuracy))
            .unwrap_or_default();
        Span::raw(format!("Lat: {latitude}, Lng: {longitude}{accuracy}"))
    };

    let button_color = if location.fetching {
        Color::DarkGray
    } else if location.permission == PermissionState::Denied {
        Color::Red
    } else {
        Color::Green
    };

    let line = Line::from(vec![
        coords,
        Span::raw("   "),
        Span::styled(
            format!("[ {} ]", location.button_label()),
            Style::default().fg(button_color),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn text_line(value: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

fn pick_span(text: &str, selected: bool) -> Span<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(text.to_string(), style)
}
