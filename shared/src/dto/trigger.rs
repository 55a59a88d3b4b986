use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body posted by the scheduling form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleMessageRequest {
    /// Recipient phone number, trimmed
    pub phone: String,
    /// Message body, trimmed
    pub body: String,
    /// Absolute instant in `toISOString` form, e.g. `2030-01-01T15:00:00.000Z`
    pub scheduled_time: String,
}

/// Body posted by the minimal trigger button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestTriggerRequest {
    pub action: String,
}

impl TestTriggerRequest {
    pub fn test() -> Self {
        Self {
            action: "test".to_string(),
        }
    }
}

/// Response of `POST /trigger/`.
///
/// The server answers with one of three shapes:
/// `{success: true, queued_id, scheduled_time}` for a queued message,
/// `{success: true, result}` for the test action and
/// `{success: false, error?}` on failure. A missing `success` counts as failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TriggerResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queued_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl TriggerResponse {
    /// Queued identifier as it should be shown to the user.
    pub fn queued_id_text(&self) -> String {
        self.queued_id.as_ref().map(render_opaque).unwrap_or_default()
    }

    /// Free-text result of the test action, if the server sent a non-empty one.
    pub fn result_text(&self) -> Option<String> {
        self.result
            .as_ref()
            .filter(|value| !is_falsy(value))
            .map(render_opaque)
    }

    /// Server error message, if one was sent and is non-empty. Non-string
    /// errors are rendered as their JSON text.
    pub fn error_text(&self) -> Option<String> {
        self.error
            .as_ref()
            .filter(|value| !is_falsy(value))
            .map(render_opaque)
    }
}

/// Response of `GET /status/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerStatusDto {
    pub status: String,
    pub time: String,
}

impl ServerStatusDto {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

fn render_opaque(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
