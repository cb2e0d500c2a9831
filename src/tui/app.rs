use std::sync::mpsc;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;

use crate::location::{GeoError, GeolocationService, LocationProvider, PermissionState};
use crate::model::{FieldKey, FieldValue, Fix, Pager, RecapRecord, missing_required};
use crate::submit::{SubmissionClient, SubmitError};
use crate::tui::action::Action;
use crate::tui::alert::{Alert, draw_alert};
use crate::tui::error::AppError;
use crate::tui::screens::{DatePickerState, RecapEntryState, draw_recap_entry};
use crate::tui::widgets::{LocationDisplay, draw_calendar, draw_progress};

/// How long one loop iteration waits for a key event before checking for
/// async completions again.
const TICK: Duration = Duration::from_millis(50);

/// Completions of the two asynchronous operations, delivered back to the UI
/// thread over a channel and drained once per loop tick.
#[derive(Debug)]
enum AppEvent {
    PermissionChecked(PermissionState),
    FixResolved(Result<Fix, GeoError>),
    SubmissionFinished(Result<(), SubmitError>),
}

/// Top-level application state.
///
/// Owns the record and passes it by reference to the input handlers and
/// draw code; there is no global state. At most one location fetch and one
/// submission are in flight at a time, guarded by the `fetching` and
/// `submitting` flags that also disable the triggering controls.
pub struct App<S> {
    record: RecapRecord,
    pager: Pager,
    entry: RecapEntryState,
    date_picker: DatePickerState,
    provider: LocationProvider<S>,
    submitter: SubmissionClient,
    alert: Option<Alert>,
    permission: PermissionState,
    last_fix: Option<Fix>,
    fetching: bool,
    submitting: bool,
    should_quit: bool,
    runtime: Handle,
    events_tx: mpsc::Sender<AppEvent>,
    events_rx: mpsc::Receiver<AppEvent>,
}

impl<S: GeolocationService + 'static> App<S> {
    /// Creates an app on the first page with a fresh record, and kicks off
    /// the startup permission check.
    pub fn new(
        provider: LocationProvider<S>,
        submitter: SubmissionClient,
        runtime: Handle,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let app = Self {
            record: RecapRecord::new(),
            pager: Pager::new(),
            entry: RecapEntryState::new(),
            date_picker: DatePickerState::new(Utc::now().date_naive()),
            provider,
            submitter,
            alert: None,
            permission: PermissionState::Undetermined,
            last_fix: None,
            fetching: false,
            submitting: false,
            should_quit: false,
            runtime,
            events_tx,
            events_rx,
        };

        let provider = app.provider.clone();
        let tx = app.events_tx.clone();
        app.runtime.spawn(async move {
            let _ = tx.send(AppEvent::PermissionChecked(provider.check_permission().await));
        });
        app
    }

    /// Main event loop: drain completions, draw, read a key, dispatch.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            self.drain_events();
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handles a key event: the topmost surface (alert, then calendar, then
    /// the form) gets it first.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = if let Some(alert) = &mut self.alert {
            alert.handle_key(key)
        } else if self.date_picker.is_open() {
            self.date_picker.handle_key(key)
        } else {
            self.entry
                .handle_key(key, self.pager.current(), &mut self.record)
        };
        self.apply(action);
    }

    /// Applies an action returned by an input handler.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::NextPage => {
                if self.pager.next() {
                    self.entry.page_changed();
                }
            }
            Action::PrevPage => {
                if self.pager.prev() {
                    self.entry.page_changed();
                }
            }
            Action::OpenCalendar => self.date_picker.open(),
            Action::SelectDate(date) => self.record.set(
                FieldKey::Date,
                FieldValue::Date(date.format("%Y-%m-%d").to_string()),
            ),
            Action::FetchLocation => {
                self.alert = None;
                self.trigger_fetch();
            }
            Action::Submit => self.trigger_submit(),
            Action::DismissAlert => self.alert = None,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Starts a location fetch unless one is already in flight.
    fn trigger_fetch(&mut self) {
        if self.fetching {
            return;
        }
        self.fetching = true;
        let provider = self.provider.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(AppEvent::FixResolved(provider.request_and_fetch().await));
        });
    }

    /// Starts a submission: only on the final page, only one at a time, and
    /// only once the required fields are all set.
    fn trigger_submit(&mut self) {
        if !self.pager.can_submit() || self.submitting {
            return;
        }
        let missing = missing_required(&self.record);
        if !missing.is_empty() {
            self.alert = Some(Alert::missing_required(&missing));
            return;
        }
        self.submitting = true;
        let record = self.record.snapshot();
        let submitter = self.submitter.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(AppEvent::SubmissionFinished(submitter.submit(&record).await));
        });
    }

    /// Drains async completions delivered since the last tick.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::PermissionChecked(state) => self.permission = state,
                AppEvent::FixResolved(Ok(fix)) => {
                    self.record.apply_fix(&fix);
                    self.last_fix = Some(fix);
                    self.permission = PermissionState::Granted;
                    self.fetching = false;
                    tracing::info!(
                        latitude = fix.latitude,
                        longitude = fix.longitude,
                        "location fix applied"
                    );
                }
                AppEvent::FixResolved(Err(GeoError::PermissionDenied)) => {
                    self.permission = PermissionState::Denied;
                    self.alert = Some(Alert::permission_denied());
                    self.fetching = false;
                }
                AppEvent::FixResolved(Err(error)) => {
                    tracing::warn!(%error, "location fetch failed");
                    self.alert = Some(Alert::location_error());
                    self.fetching = false;
                }
                AppEvent::SubmissionFinished(Ok(())) => {
                    self.submitting = false;
                    tracing::info!("daily recap submitted");
                }
                AppEvent::SubmissionFinished(Err(error)) => {
                    // Logged only: submission failures are never surfaced.
                    self.submitting = false;
                    tracing::warn!(%error, "recap submission failed");
                }
            }
        }
    }

    /// Renders the full screen: header, progress, page, modals on top.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let [header_area, progress_area, content_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Cycle COP30 Daily Recap",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                "Data Collection Tool",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ]);
        frame.render_widget(header, header_area);

        draw_progress(self.pager.current(), frame, progress_area);

        let location = LocationDisplay {
            fetching: self.fetching,
            permission: self.permission,
            fix: self.last_fix,
        };
        draw_recap_entry(
            &self.entry,
            self.pager.current(),
            &self.record,
            &location,
            frame,
            content_area,
        );

        if self.date_picker.is_open() {
            draw_calendar(&self.date_picker, frame, area);
        }
        if let Some(alert) = &self.alert {
            draw_alert(alert, frame, area);
        }
    }

    /// Returns the form record.
    pub fn record(&self) -> &RecapRecord {
        &self.record
    }

    /// Returns the form record for direct edits.
    pub fn record_mut(&mut self) -> &mut RecapRecord {
        &mut self.record
    }

    /// Returns the page navigator.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Returns the calendar modal state.
    pub fn date_picker(&self) -> &DatePickerState {
        &self.date_picker
    }

    /// Returns the active alert, if any.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Returns the last known permission state.
    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    /// Returns `true` while a location fetch is in flight.
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Returns `true` while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
