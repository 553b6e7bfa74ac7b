// src/widget/transcript.rs
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::message::{HealthForm, Message};

use super::view::{ChatView, RiskBadge};

#[derive(Debug)]
struct Inner {
    messages: Vec<Message>,
    /// Number of bubbles above the viewport bottom after the last scroll.
    scrolled_to: usize,
    input: String,
    input_enabled: bool,
    form: HealthForm,
    badge: Option<RiskBadge>,
    alerts: Vec<String>,
}

/// In-memory render target. Holds everything a page would show.
#[derive(Debug)]
pub struct Transcript {
    inner: Mutex<Inner>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self::with_form(HealthForm::default())
    }

    pub fn with_form(form: HealthForm) -> Self {
        Self {
            inner: Mutex::new(Inner {
                messages: Vec::new(),
                scrolled_to: 0,
                input: String::new(),
                input_enabled: true,
                form,
                badge: None,
                alerts: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the contents of the text input.
    pub fn type_text(&self, text: &str) {
        self.lock().input = text.to_string();
    }

    pub fn messages(&self) -> Vec<Message> {
        self.lock().messages.clone()
    }

    pub fn badge(&self) -> Option<RiskBadge> {
        self.lock().badge.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    pub fn input(&self) -> String {
        self.lock().input.clone()
    }

    pub fn input_enabled(&self) -> bool {
        self.lock().input_enabled
    }

    pub fn is_scrolled_to_end(&self) -> bool {
        let inner = self.lock();
        inner.scrolled_to == inner.messages.len()
    }
}

impl ChatView for Transcript {
    fn append_message(&self, message: &Message) {
        self.lock().messages.push(message.clone());
    }

    fn remove_message(&self, id: &str) -> bool {
        let mut inner = self.lock();
        let Some(pos) = inner.messages.iter().position(|m| m.id.as_deref() == Some(id)) else {
            return false;
        };
        inner.messages.remove(pos);
        inner.scrolled_to = inner.scrolled_to.min(inner.messages.len());
        true
    }

    fn scroll_to_end(&self) {
        let mut inner = self.lock();
        inner.scrolled_to = inner.messages.len();
    }

    fn alert(&self, text: &str) {
        self.lock().alerts.push(text.to_string());
    }

    fn input_text(&self) -> String {
        self.input()
    }

    fn clear_input(&self) {
        self.lock().input.clear();
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.lock().input_enabled = enabled;
    }

    fn form_values(&self) -> HealthForm {
        self.lock().form.clone()
    }

    fn set_badge(&self, badge: &RiskBadge) {
        self.lock().badge = Some(badge.clone());
    }
}
