//! Modal alerts — the only surface that interrupts the form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::model::FieldKey;
use crate::tui::action::Action;

/// What an alert is about; determines its remediation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Location permission was denied on check and on request.
    PermissionDenied,
    /// The positioning backend failed or timed out.
    LocationError,
    /// Required fields were still unset at submission.
    MissingRequired,
}

/// A dismissible modal alert with one or two buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    kind: AlertKind,
    title: &'static str,
    message: String,
    buttons: Vec<&'static str>,
    selected: usize,
}

impl Alert {
    /// Alert for a denied location permission, with a path back to the
    /// permission prompt.
    pub fn permission_denied() -> Self {
        Self {
            kind: AlertKind::PermissionDenied,
            title: "Location Permission Required",
            message: "This app needs location permission to work properly. \
                      Please enable location access in your device settings."
                .to_string(),
            buttons: vec!["Cancel", "Open Settings"],
            selected: 0,
        }
    }

    /// Alert for a failed or timed-out position fetch.
    pub fn location_error() -> Self {
        Self {
            kind: AlertKind::LocationError,
            title: "Location Error",
            message: "Unable to get your location. Please make sure location \
                      services are enabled and try again."
                .to_string(),
            buttons: vec!["OK"],
            selected: 0,
        }
    }

    /// Alert listing the required fields that block submission.
    pub fn missing_required(missing: &[FieldKey]) -> Self {
        let labels: Vec<&str> = missing.iter().take(4).map(|k| k.label()).collect();
        let rest = missing.len().saturating_sub(labels.len());
        let mut message = format!(
            "{} required field{} still unset: {}",
            missing.len(),
            if missing.len() == 1 { " is" } else { "s are" },
            labels.join(", "),
        );
        if rest > 0 {
            message.push_str(&format!(" and {rest} more"));
        }
        message.push('.');

        Self {
            kind: AlertKind::MissingRequired,
            title: "Required Fields Missing",
            message,
            buttons: vec!["OK"],
            selected: 0,
        }
    }

    /// Returns what this alert is about.
    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    /// Returns the alert body text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handles a key event while the alert is on top.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Right | KeyCode::Tab => {
                self.selected = (self.selected + 1).min(self.buttons.len() - 1);
                Action::None
            }
            KeyCode::Enter => {
                if self.kind == AlertKind::PermissionDenied && self.selected == 1 {
                    // "Open Settings" re-runs the permission request path.
                    Action::FetchLocation
                } else {
                    Action::DismissAlert
                }
            }
            KeyCode::Esc => Action::DismissAlert,
            _ => Action::None,
        }
    }
}

/// Renders the alert modal over the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_alert(alert: &Alert, frame: &mut Frame, area: Rect) {
    let [modal] = Layout::horizontal([Constraint::Length(46)])
        .flex(Flex::Center)
        .areas(area);
    let [modal] = Layout::vertical([Constraint::Length(9)])
        .flex(Flex::Center)
        .areas(modal);

    frame.render_widget(Clear, modal);
    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let [message_area, buttons_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(alert.message.as_str()).wrap(Wrap { trim: true }),
        message_area,
    );

    let mut spans = Vec::new();
    for (i, button) in alert.buttons.iter().enumerate() {
        let style = if i == alert.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red)
        };
        spans.push(Span::styled(format!("[ {button} ]"), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).centered(),
        buttons_area,
    );
}
