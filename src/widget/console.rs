// src/widget/console.rs
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use tracing::warn;

use crate::message::{HealthForm, Message, Sender};

use super::transcript::Transcript;
use super::view::{ChatView, RiskBadge};

/// Renders bubbles as lines on a terminal. State lives in a [`Transcript`].
pub struct ConsoleView<W = Stdout> {
    transcript: Transcript,
    out: Mutex<W>,
}

impl ConsoleView<Stdout> {
    pub fn stdout(transcript: Transcript) -> Self {
        Self::new(transcript, io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(transcript: Transcript, out: W) -> Self {
        Self { transcript, out: Mutex::new(out) }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn print(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            warn!(error = %e, "failed to write to console");
        }
    }
}

impl<W: Write> ChatView for ConsoleView<W> {
    fn append_message(&self, message: &Message) {
        let who = match message.sender {
            Sender::User => "You",
            Sender::Bot => "MindCare",
        };
        self.print(&format!("{who}: {}", message.text));
        self.transcript.append_message(message);
    }

    // A printed line can't be taken back.
    fn remove_message(&self, id: &str) -> bool {
        self.transcript.remove_message(id)
    }

    fn scroll_to_end(&self) {
        self.transcript.scroll_to_end();
    }

    fn alert(&self, text: &str) {
        eprintln!("! {text}");
        self.transcript.alert(text);
    }

    fn input_text(&self) -> String {
        self.transcript.input_text()
    }

    fn clear_input(&self) {
        self.transcript.clear_input();
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.transcript.set_input_enabled(enabled);
    }

    fn form_values(&self) -> HealthForm {
        self.transcript.form_values()
    }

    fn set_badge(&self, badge: &RiskBadge) {
        self.print(&format!("[{}] {}", badge.class_name(), badge.text));
        self.transcript.set_badge(badge);
    }
}
