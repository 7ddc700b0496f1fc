//! Edit Sessions
//!
//! Per-item editing state and the "add item" form. Both hold an uncommitted
//! draft; neither touches the store. The controller commits them.

use crate::models::{Item, ItemDraft};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Viewing,
    Editing,
    /// Save pressed, waiting for the server
    Saving,
}

/// Editing state of one item
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditSession {
    state: SessionState,
    draft: ItemDraft,
    error: Option<String>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != SessionState::Viewing
    }

    pub fn is_saving(&self) -> bool {
        self.state == SessionState::Saving
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start editing from the committed fields
    pub fn begin_edit(&mut self, committed: &Item) {
        if self.state == SessionState::Viewing {
            self.state = SessionState::Editing;
            self.draft = committed.draft();
            self.error = None;
        }
    }

    /// Drop the draft and any error. Ignored while a save is in flight.
    pub fn cancel(&mut self) {
        if self.state == SessionState::Editing {
            *self = Self::default();
        }
    }

    pub fn set_title(&mut self, title: String) {
        if self.state == SessionState::Editing {
            self.draft.title = title;
        }
    }

    pub fn set_body(&mut self, body: String) {
        if self.state == SessionState::Editing {
            self.draft.body = body;
        }
    }

    /// Save is offered only when the draft differs from `committed`
    pub fn can_save(&self, committed: &Item) -> bool {
        self.state == SessionState::Editing && !self.draft.matches(committed)
    }

    /// Enter `Saving` and hand out the draft to send, if saving is allowed
    pub fn begin_save(&mut self, committed: &Item) -> Option<ItemDraft> {
        if !self.can_save(committed) {
            return None;
        }
        self.state = SessionState::Saving;
        self.error = None;
        Some(self.draft.clone())
    }

    /// Close on success; on failure go back to editing with the draft intact
    pub fn finish_save(&mut self, outcome: Result<(), String>) {
        if self.state != SessionState::Saving {
            return;
        }
        match outcome {
            Ok(()) => *self = Self::default(),
            Err(message) => {
                self.state = SessionState::Editing;
                self.error = Some(message);
            }
        }
    }
}

/// State of the "add item" form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateForm {
    draft: ItemDraft,
    submitting: bool,
    error: Option<String>,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_body(&mut self, body: String) {
        self.draft.body = body;
    }

    /// Both fields are required
    pub fn can_submit(&self) -> bool {
        !self.submitting
            && !self.draft.title.trim().is_empty()
            && !self.draft.body.trim().is_empty()
    }

    pub fn begin_submit(&mut self) -> Option<ItemDraft> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.draft.clone())
    }

    /// Clear on success; keep the draft and show the error on failure
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => *self = Self::default(),
            Err(message) => {
                self.submitting = false;
                self.error = Some(message);
            }
        }
    }
}
