// src/widget/mod.rs
//! Chat widget controller: renders bubbles, gathers the health form, sends
//! one prediction request per submission and reflects the answer.

pub mod console;
pub mod transcript;
pub mod view;

use tracing::{debug, error};

use crate::message::{HealthData, Message, PredictionResult, Sender};
use crate::services::prediction_client::PredictionClient;
use crate::state::InFlight;

use view::{ChatView, RiskBadge};

/// Id of the transient "analyzing" bubble.
pub const LOADING_ID: &str = "loading-bubble";
pub const LOADING_TEXT: &str = "Analyzing...";
pub const EMPTY_INPUT_ALERT: &str = "Please type how you are feeling first.";
pub const CONNECTION_ERROR: &str =
    "⚠️ Error connecting to server. Is the prediction service running?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// Which branch a submission took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Nothing typed; the user was alerted and no request went out.
    EmptyInput,
    /// A request was already outstanding; nothing happened.
    Busy,
    Answered(PredictionResult),
    /// The request failed; the error bubble is showing.
    Failed,
}

pub struct ChatWidget<V, C> {
    view: V,
    client: C,
    in_flight: InFlight,
}

impl<V: ChatView, C: PredictionClient> ChatWidget<V, C> {
    pub fn new(view: V, client: C) -> Self {
        Self { view, client, in_flight: InFlight::new() }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Appends a bubble, optionally tagged with `id`, and scrolls to it.
    pub fn render_message(&self, text: impl Into<String>, sender: Sender, id: Option<&str>) {
        let mut message = Message::new(text, sender);
        if let Some(id) = id {
            message = message.with_id(id);
        }
        self.view.append_message(&message);
        self.view.scroll_to_end();
    }

    pub async fn submit_health_check(&self) -> Submission {
        let Some(_request) = self.in_flight.try_begin() else {
            debug!("submission ignored, a request is in flight");
            return Submission::Busy;
        };

        let raw = self.view.input_text();
        let user_text = raw.trim();
        if user_text.is_empty() {
            debug!("submission rejected, empty input");
            self.view.alert(EMPTY_INPUT_ALERT);
            return Submission::EmptyInput;
        }
        let user_text = user_text.to_string();

        let _input = InputLock::new(&self.view);

        self.render_message(user_text.as_str(), Sender::User, None);
        self.view.clear_input();
        self.render_message(LOADING_TEXT, Sender::Bot, Some(LOADING_ID));

        let data = HealthData::new(self.view.form_values(), user_text);
        let outcome = self.client.predict(&data).await;

        self.view.remove_message(LOADING_ID);

        match outcome {
            Ok(result) => {
                self.render_message(result.advice.as_str(), Sender::Bot, None);
                self.view.set_badge(&RiskBadge::from_risk(&result.risk));
                Submission::Answered(result)
            }
            Err(e) => {
                error!(error = %e, "prediction request failed");
                self.render_message(CONNECTION_ERROR, Sender::Bot, None);
                Submission::Failed
            }
        }
    }

    /// Keyboard binding of the text input. Only Enter does anything.
    pub async fn handle_key(&self, key: Key) -> Option<Submission> {
        match key {
            Key::Enter => Some(self.submit_health_check().await),
            _ => None,
        }
    }
}

/// Disables the text input until dropped.
struct InputLock<'a, V: ChatView> {
    view: &'a V,
}

impl<'a, V: ChatView> InputLock<'a, V> {
    fn new(view: &'a V) -> Self {
        view.set_input_enabled(false);
        Self { view }
    }
}

impl<V: ChatView> Drop for InputLock<'_, V> {
    fn drop(&mut self) {
        self.view.set_input_enabled(true);
    }
}
