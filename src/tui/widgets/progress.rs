//! Page progress header.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Gauge, Paragraph};

use crate::model::Page;

/// Returns the progress caption, e.g. `3 of 7 - Knowledge Sharing`.
pub fn progress_label(page: Page) -> String {
    format!("{} of {} - {}", page.index() + 1, Page::all().len(), page.title())
}

/// Returns the filled fraction of the progress gauge.
pub fn progress_ratio(page: Page) -> f64 {
    (page.index() + 1) as f64 / Page::all().len() as f64
}

/// Renders the progress gauge and caption.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_progress(page: Page, frame: &mut Frame, area: Rect) {
    let [gauge_area, label_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(progress_ratio(page))
        .label("");
    frame.render_widget(gauge, gauge_area);

    let label = Paragraph::new(Line::from(progress_label(page)).centered())
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(label, label_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_counts_from_one() {
        assert_eq!(progress_label(Page::RouteLogistics), "1 of 7 - Route & Logistics");
        assert_eq!(progress_label(Page::SocialMedia), "7 of 7 - Social Media");
    }

    #[test]
    fn ratio_is_monotonic_and_complete() {
        let mut last = 0.0;
        for page in Page::all() {
            let ratio = progress_ratio(*page);
            assert!(ratio > last);
            last = ratio;
        }
        assert!((last - 1.0).abs() < f64::EPSILON);
    }
}
