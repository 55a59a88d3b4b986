use serde::{Deserialize, Serialize};

use crate::error::SharedError;

/// Style applied to the result element.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusClass {
    #[default]
    None,
    Success,
    Error,
}

impl StatusClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusClass::None => "",
            StatusClass::Success => "success",
            StatusClass::Error => "error",
        }
    }
}

/// Text and style of the result element. Every attempt overwrites it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusDisplay {
    pub text: String,
    pub class: StatusClass,
}

impl StatusDisplay {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn scheduling() -> Self {
        Self::plain("Scheduling message...")
    }

    pub fn triggering() -> Self {
        Self::plain("Triggering...")
    }

    /// Shown when the page rejects the input before any request is made.
    pub fn invalid_input(error: &SharedError) -> Self {
        Self::error(format!("Error: {}", error))
    }

    pub fn scheduled(queued_id: &str, local_time: &str, zone_name: &str) -> Self {
        Self::success(format!(
            "Success! Message scheduled (ID: {}). Will be sent at {} ({})",
            queued_id, local_time, zone_name
        ))
    }

    pub fn triggered(result: Option<&str>) -> Self {
        Self::success(format!("Success: {}", result.unwrap_or("triggered")))
    }

    pub fn server_failure(error: Option<&str>) -> Self {
        Self::error(format!("Error: {}", error.unwrap_or("unknown")))
    }

    pub fn network_failure(description: &str) -> Self {
        Self::error(format!("Network error: {}", description))
    }

    pub fn is_error(&self) -> bool {
        self.class == StatusClass::Error
    }

    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: StatusClass::None,
        }
    }

    fn success(text: String) -> Self {
        Self {
            text,
            class: StatusClass::Success,
        }
    }

    fn error(text: String) -> Self {
        Self {
            text,
            class: StatusClass::Error,
        }
    }
}
