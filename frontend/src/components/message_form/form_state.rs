//! Form state for the message editor.
//!
//! Gathers the field signals into one `Copy` struct that can be passed
//! between components, and converts to and from `MessageDraft`.

use leptos::prelude::*;
use msgdesk::Message;
use msgdesk::forms::{FieldErrors, MessageDraft};

#[derive(Clone, Copy)]
pub struct FormState {
    pub title: RwSignal<String>,
    pub body: RwSignal<String>,
    pub author: RwSignal<String>,
    pub status: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            body: RwSignal::new(String::new()),
            author: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    /// Pre-fill from a loaded record.
    pub fn fill(&self, message: &Message) {
        let draft = MessageDraft::from_message(message);
        self.title.set(draft.title);
        self.body.set(draft.body);
        self.author.set(draft.author);
        self.status.set(draft.status);
        self.errors.set(FieldErrors::new());
    }

    pub fn to_draft(&self) -> MessageDraft {
        MessageDraft {
            title: self.title.get_untracked(),
            body: self.body.get_untracked(),
            author: self.author.get_untracked(),
            status: self.status.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
