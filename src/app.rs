//! Application controller: turns key events into form edits and submits

use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, FieldInput, FieldName, FormFocus, QueryType, Toast};
use crate::submit::{SessionLog, Submission, SubmissionSink};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
///
/// Owns the form state and is the only writer to it. Generic over the
/// submission sink so tests can swap in a mock.
pub struct App<S: SubmissionSink> {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Receiver for validated submissions
    sink: S,
    /// Submissions accepted this session
    sent_count: usize,
    /// Whether the app should quit
    quit: bool,
}

impl App<SessionLog> {
    /// Create the app with the on-disk config and the in-memory session sink
    pub fn new() -> Self {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load config, using defaults: {err}");
            TuiConfig::default()
        });
        Self::with_sink(config, SessionLog::new())
    }
}

impl<S: SubmissionSink> App<S> {
    pub fn with_sink(config: TuiConfig, sink: S) -> Self {
        Self {
            state: AppState::default(),
            config,
            sink,
            sent_count: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// How many submissions went through this session
    pub fn sent_count(&self) -> usize {
        self.sent_count
    }

    /// Per-frame housekeeping (toast animation and expiry)
    pub fn tick(&mut self) {
        self.state.expire_toast();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let focus = self.state.focus;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Char('v') if key.modifiers.contains(platform::PASTE_MODIFIER) => {
                self.paste_into_focused();
            }
            KeyCode::Tab | KeyCode::Down => self.state.focus = focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus = focus.prev(),
            KeyCode::Left | KeyCode::Right if focus == FormFocus::Query => self.cycle_query(),
            KeyCode::Char('1') if focus == FormFocus::Query => {
                self.select_query(QueryType::GeneralEnquiry);
            }
            KeyCode::Char('2') if focus == FormFocus::Query => {
                self.select_query(QueryType::SupportRequest);
            }
            KeyCode::Char(' ') if focus == FormFocus::Query => self.cycle_query(),
            KeyCode::Char(' ') if focus == FormFocus::Consent => self.toggle_consent(),
            KeyCode::Char(' ') | KeyCode::Enter if focus == FormFocus::Submit => self.submit(),
            KeyCode::Enter if focus == FormFocus::Message => {
                self.edit_focused_text(|text| text.push('\n'));
            }
            KeyCode::Enter => self.state.focus = focus.next(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_focused_text(|text| text.push(c));
            }
            KeyCode::Backspace => {
                self.edit_focused_text(|text| {
                    text.pop();
                });
            }
            KeyCode::Esc => {
                // Esc dismisses an active toast first, then clears the form
                if let Some(ref mut toast) = self.state.toast {
                    toast.dismiss();
                } else {
                    self.state.form.reset();
                    self.state.focus = FormFocus::default();
                }
            }
            _ => {}
        }
    }

    /// Apply an edit to the focused text field, if there is one
    fn edit_focused_text(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(name) = self.state.focus.text_field() else {
            return;
        };
        let mut text = self.state.form.values().text(name).to_string();
        edit(&mut text);
        self.state.form.set_field(name, FieldInput::Text(text));
    }

    fn select_query(&mut self, query: QueryType) {
        self.state
            .form
            .set_field(FieldName::Query, FieldInput::text(query.label()));
    }

    /// Step to the other query option (or the first if none is picked)
    fn cycle_query(&mut self) {
        let next = match QueryType::from_label(&self.state.form.values().query) {
            Some(QueryType::GeneralEnquiry) => QueryType::SupportRequest,
            Some(QueryType::SupportRequest) => QueryType::GeneralEnquiry,
            None => QueryType::GeneralEnquiry,
        };
        self.select_query(next);
    }

    fn toggle_consent(&mut self) {
        let checked = self.state.form.values().consent;
        self.state
            .form
            .set_field(FieldName::Consent, FieldInput::Flag(!checked));
    }

    /// Paste clipboard text into the focused text field as one edit
    fn paste_into_focused(&mut self) {
        let Some(name) = self.state.focus.text_field() else {
            return;
        };
        let pasted = match arboard::Clipboard::new().and_then(|mut cb| cb.get_text()) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                return;
            }
        };

        let multiline = name == FieldName::Message;
        self.edit_focused_text(|text| {
            for ch in pasted.chars() {
                match ch {
                    '\n' if multiline => text.push('\n'),
                    // Single-line fields flatten pasted newlines to spaces
                    '\n' => text.push(' '),
                    c if c.is_control() => {}
                    c => text.push(c),
                }
            }
        });
    }

    /// Run validation and, when clean, hand the snapshot to the sink
    fn submit(&mut self) {
        let sink = &mut self.sink;
        let mut reference = None;
        let submitted = self.state.form.submit(|values| {
            let submission = Submission::new(values);
            reference = Some(submission.short_reference());
            sink.deliver(submission);
        });

        if submitted {
            self.sent_count += 1;
            self.state.toast = Some(Toast::new(reference.unwrap_or_default()));
            self.state.focus = FormFocus::default();
        } else {
            tracing::debug!(
                error_count = self.state.form.errors().len(),
                "submit rejected by validation"
            );
        }
    }
}
