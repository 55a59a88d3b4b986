use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, SharedError};

/// Raw values read from the scheduling form at submit time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormInput {
    pub phone: String,
    pub body: String,
    /// `datetime-local` value, wall clock without a zone designator
    pub scheduled_local_time: String,
}

/// Form input after trimming, with every field known to be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ValidatedInput {
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Message body is required"))]
    pub body: String,
    #[validate(length(min = 1, message = "Scheduled time is required"))]
    pub scheduled_local_time: String,
}

impl FormInput {
    pub fn new(
        phone: impl Into<String>,
        body: impl Into<String>,
        scheduled_local_time: impl Into<String>,
    ) -> Self {
        Self {
            phone: phone.into(),
            body: body.into(),
            scheduled_local_time: scheduled_local_time.into(),
        }
    }

    /// Trims phone and body, then requires all three values to be present.
    ///
    /// The time value is taken verbatim: the widget yields either a complete
    /// value or an empty string.
    pub fn validate_required(&self) -> Result<ValidatedInput> {
        let input = ValidatedInput {
            phone: self.phone.trim().to_string(),
            body: self.body.trim().to_string(),
            scheduled_local_time: self.scheduled_local_time.clone(),
        };

        input.validate().map_err(|errors| {
            log::debug!("Form input rejected: {}", errors);
            SharedError::RequiredFields
        })?;

        Ok(input)
    }
}
