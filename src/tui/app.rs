//! TUI application state and event handling.
//!
//! The `App` wraps a [`Session`] and runs the main loop via `run()`:
//!
//! - **Fetch settlement**: the pending fetch is polled once per tick and applied
//!   as soon as it arrives
//! - **Search input**: every keystroke edits the persisted term; the visible list
//!   is recomputed from the session on each draw
//! - **Removal**: Delete removes the selected story from the collection
//! - **Dirty state tracking**: redraw only when something changed (or every 100ms
//!   to pick up terminal resizes)

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::models::Story;
use crate::session::Session;
use crate::storage::KeyValueStore;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App<S: KeyValueStore> {
    session: Session<S>,
    selected_idx: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<S: KeyValueStore> App<S> {
    /// Wrap an (already activated) session
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            selected_idx: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Apply the fetch result if it has arrived
    fn process_fetch(&mut self) {
        if self.session.poll_fetch() {
            if self.session.state().is_error {
                self.set_status("✗ Failed to load stories", MessageType::Error, STATUS_ERROR_DURATION_MS);
            }
            self.clamp_selection();
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.process_fetch();

            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let visible = self.session.visible_stories();
                let state = self.session.state();
                terminal.draw(|f| {
                    let render_state = RenderState {
                        search_term: self.session.search_term(),
                        stories: &visible,
                        selected_idx: self.selected_idx,
                        total_count: state.data.len(),
                        is_loading: state.is_loading,
                        is_error: state.is_error,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &render_state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.session.search_term().is_empty() {
                    self.should_quit = true;
                } else {
                    self.session.clear_search_term();
                    self.selected_idx = 0;
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::RemoveSelected => self.remove_selected(),
            Action::UpdateSearch(c) => {
                if self.session.push_char(c) {
                    self.selected_idx = 0;
                    self.needs_redraw = true;
                }
            }
            Action::DeleteChar => {
                if self.session.pop_char() {
                    self.selected_idx = 0;
                    self.needs_redraw = true;
                }
            }
            Action::None => {}
        }
    }

    fn visible_count(&self) -> usize {
        self.session.visible_stories().len()
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.visible_count();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn clamp_selection(&mut self) {
        let total = self.visible_count();
        self.selected_idx = if total == 0 { 0 } else { self.selected_idx.min(total - 1) };
    }

    fn selected_story(&self) -> Option<Story> {
        self.session.visible_stories().get(self.selected_idx).map(|story| (*story).clone())
    }

    fn remove_selected(&mut self) {
        if self.session.state().is_loading {
            return;
        }

        match self.selected_story() {
            Some(story) => {
                self.session.remove_story(story.object_id);
                self.clamp_selection();
                self.set_status(
                    format!("✓ Removed \"{}\"", story.title),
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            None => {
                self.set_status("✗ No story to remove", MessageType::Error, STATUS_ERROR_DURATION_MS);
            }
        }
    }
}
