use std::collections::BTreeSet;

use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// Bot text shown when a remote exchange fails for any reason.
pub const EXCHANGE_FAILED_TEXT: &str = "An error occurred while fetching the response.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// One rendered chat entry. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNode {
    pub text: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please enter a message.")]
    EmptyInput,
}

/// Trims raw input and rejects blank submissions.
pub fn prepare_question(raw: &str) -> Result<&str, SubmitError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(SubmitError::EmptyInput)
    } else {
        Ok(trimmed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    messages: Vec<MessageNode>,
    pending: BTreeSet<RequestId>,
    next_request_id: RequestId,
    notice: Option<SubmitError>,
    scroll_back: u16,
    scroll_limit: u16,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            messages: Vec::new(),
            pending: BTreeSet::new(),
            next_request_id: 1,
            notice: None,
            scroll_back: 0,
            // Unknown until the first frame is measured.
            scroll_limit: u16::MAX,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            messages: self.messages.clone(),
            notice: self.notice.map(|err| err.to_string()),
            scroll_back: self.scroll_back,
            in_flight: self.pending.len(),
            dirty: self.dirty,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.notice.is_some()
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    /// Validates the input field and, on success, echoes it locally and
    /// opens a pending request for it.
    pub(crate) fn submit(&mut self) -> Result<(RequestId, String), SubmitError> {
        let question = match prepare_question(&self.input) {
            Ok(question) => question.to_owned(),
            Err(err) => {
                self.notice = Some(err);
                self.mark_dirty();
                return Err(err);
            }
        };

        self.append(question.clone(), Role::User);
        self.input.clear();

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending.insert(request_id);
        Ok((request_id, question))
    }

    /// Completes a pending request with the bot text to show. Returns false
    /// when the id is not pending.
    pub(crate) fn complete(&mut self, request_id: RequestId, text: String) -> bool {
        if !self.pending.remove(&request_id) {
            return false;
        }
        self.append(text, Role::Bot);
        true
    }

    pub(crate) fn clear_messages(&mut self) {
        if !self.messages.is_empty() || self.scroll_back != 0 {
            self.messages.clear();
            self.scroll_back = 0;
            self.mark_dirty();
        }
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn scroll_up(&mut self, rows: u16) {
        let next = self.scroll_back.saturating_add(rows).min(self.scroll_limit);
        if next != self.scroll_back {
            self.scroll_back = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn scroll_down(&mut self, rows: u16) {
        let next = self.scroll_back.saturating_sub(rows);
        if next != self.scroll_back {
            self.scroll_back = next;
            self.mark_dirty();
        }
    }

    /// Records the furthest back-scroll the current frame allows and pulls
    /// the position back inside it.
    pub(crate) fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        if self.scroll_back > limit {
            self.scroll_back = limit;
            self.mark_dirty();
        }
    }

    fn append(&mut self, text: String, role: Role) {
        debug_assert!(!text.is_empty());
        self.messages.push(MessageNode { text, role });
        // Newest entry always lands in view.
        self.scroll_back = 0;
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
