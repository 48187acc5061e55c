//! Application state and core logic
//!
//! Owns the submission workflow: presence validation, payload construction,
//! the network call, and mapping the outcome back onto UI state.

use crate::api::{LeadApi, LeadClient, LeadPayload};
use crate::config::TuiConfig;
use crate::state::{AppState, Form, SUBMIT_FAILED_MSG, VALIDATION_ERROR_MSG};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error};

/// Result of one submission attempt, delivered back to the event loop
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The server acknowledged the lead
    Accepted,
    /// Anything else; carries diagnostic detail for the log only
    Failed(String),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the lead-capture endpoint
    api: Arc<dyn LeadApi>,
    /// Delivers submission outcomes from the spawned request task
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let base_url = LeadClient::resolve_base_url(config.api_base_url.as_deref());
        let client = LeadClient::new(base_url)?;
        Ok(Self::with_api(Arc::new(client)))
    }

    /// Create an App with an explicit API implementation
    fn with_api(api: Arc<dyn LeadApi>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-iteration housekeeping: apply any finished submission and expire
    /// the success banner
    pub fn tick(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_submit_outcome(outcome);
        }
        self.state.update_submitted_banner();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Send shortcuts work from any field
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit();
            return Ok(());
        }
        if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
            && key.code == KeyCode::Enter
        {
            self.submit();
            return Ok(());
        }

        let on_buttons = self.state.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Esc => self.quit = true,
            // Button row navigation
            KeyCode::Up | KeyCode::Left if on_buttons => self.state.form.prev_button(),
            KeyCode::Down | KeyCode::Right if on_buttons => self.state.form.next_button(),
            // Enter on the buttons row triggers the selected button
            // Button order: 0=Send, 1=Clear
            KeyCode::Enter if on_buttons => match self.state.form.selected_button {
                0 => self.submit(),
                _ => {
                    self.state.form.clear();
                    self.state.clear_feedback();
                }
            },
            // Enter in the message field adds a newline; elsewhere it advances
            KeyCode::Enter => {
                if self.state.form.is_active_field_multiline() {
                    self.state.form.get_active_field_mut().push_char('\n');
                } else {
                    self.state.form.next_field();
                }
            }
            // Form field input (only when not on the buttons row)
            KeyCode::Char(c) if !on_buttons => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                self.state.form.get_active_field_mut().push_char(ch);
            }
            KeyCode::Backspace if !on_buttons => {
                self.state.form.get_active_field_mut().pop_char();
            }
            _ => {}
        }
        Ok(())
    }

    /// Run one submission attempt.
    ///
    /// Validation failures stop here without a network call. A passing draft
    /// is snapshotted into a payload and posted from a spawned task so the
    /// event loop stays responsive; the loading flag disables the Send
    /// control until the outcome lands.
    pub fn submit(&mut self) {
        // The Send control is the sole trigger; while a request is in
        // flight it is disabled rather than queued
        if self.state.loading {
            return;
        }

        self.state.clear_feedback();

        let draft = self.state.form.to_draft();
        if !draft.has_required() {
            self.state.set_error(VALIDATION_ERROR_MSG);
            return;
        }

        let payload = LeadPayload::from_draft(&draft);
        self.state.loading = true;

        let api = Arc::clone(&self.api);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = match api.save_lead(payload).await {
                Ok(()) => SubmitOutcome::Accepted,
                Err(e) => SubmitOutcome::Failed(e.to_string()),
            };
            // Receiver gone means the app is shutting down
            let _ = tx.send(outcome);
        });
    }

    /// Map a finished submission onto UI state
    fn apply_submit_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted => {
                debug!("lead accepted");
                self.state.form.clear();
                self.state.error_message = None;
                self.state.mark_submitted();
            }
            SubmitOutcome::Failed(detail) => {
                // Diagnostic detail stays in the log; the user sees one
                // generic message and keeps their entered data
                error!(%detail, "lead submission failed");
                self.state.set_error(SUBMIT_FAILED_MSG);
            }
        }
        // Cleared last on every path
        self.state.loading = false;
    }
}
