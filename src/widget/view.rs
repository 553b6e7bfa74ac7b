// src/widget/view.rs
use crate::message::{HealthForm, Message};

/// Render targets the widget writes to and reads from.
///
/// Methods take `&self`: a view is a handle onto UI state, the way a DOM
/// element reference is.
pub trait ChatView {
    /// Appends a bubble to the chat container.
    fn append_message(&self, message: &Message);

    /// Removes the first bubble tagged `id`. Returns whether one was found.
    fn remove_message(&self, id: &str) -> bool;

    fn scroll_to_end(&self);

    /// Blocking, user-facing notice.
    fn alert(&self, text: &str);

    fn input_text(&self) -> String;

    fn clear_input(&self);

    fn set_input_enabled(&self, enabled: bool);

    fn form_values(&self) -> HealthForm;

    fn set_badge(&self, badge: &RiskBadge);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::High => "high-risk",
            RiskLevel::Low => "low-risk",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskBadge {
    pub text: String,
    pub level: RiskLevel,
}

impl RiskBadge {
    /// Anything mentioning "High" is high risk, everything else is low.
    pub fn from_risk(risk: &str) -> Self {
        let level = if risk.contains("High") { RiskLevel::High } else { RiskLevel::Low };
        Self { text: risk.to_string(), level }
    }

    pub fn class_name(&self) -> String {
        format!("badge {}", self.level.css_class())
    }
}
