pub mod models {
    pub mod form;
    pub mod status;
}

pub mod dto {
    pub mod trigger;
}

pub mod cookie;
pub mod error;
pub mod submitter;
pub mod timezone;

// Re-export commonly used items
pub use error::{SharedError, Result};

pub use models::{
    form::{FormInput, ValidatedInput},
    status::{StatusClass, StatusDisplay},
};

pub use dto::trigger::{ScheduleMessageRequest, ServerStatusDto, TestTriggerRequest, TriggerResponse};

pub use cookie::{csrf_token, read_cookie, CookieJar};
pub use submitter::{
    Clock, FormSubmitter, FormSurface, LocalZone, SubmitterSettings, SubmitterVariant,
    TriggerTransport,
};
pub use timezone::{DateStyle, DisplayStyle, TimeStyle};
