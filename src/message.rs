// src/message.rs
use serde::{Deserialize, Serialize};

/// Who a chat message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub id: Option<String>,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self { text: text.into(), sender, id: None }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Raw values of the six health form fields. Free-form, never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthForm {
    pub age: String,
    pub sleep: String,
    pub physical: String,
    pub screen: String,
    pub stress: String,
    pub smoking: String,
}

/// Body of `POST predict`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthData {
    #[serde(flatten)]
    pub form: HealthForm,
    #[serde(rename = "userText")]
    pub user_text: String,
}

impl HealthData {
    pub fn new(form: HealthForm, user_text: impl Into<String>) -> Self {
        Self { form, user_text: user_text.into() }
    }
}

/// Response of `POST predict`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub advice: String,
    pub risk: String,
}
