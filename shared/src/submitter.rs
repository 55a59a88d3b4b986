//! Request/response cycle behind the scheduling form and the trigger button.
//!
//! Everything the cycle touches on the page is reached through the capability
//! traits below, so the same code runs against the DOM in the browser and
//! against in-memory fakes in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cookie::{csrf_token, CookieJar};
use crate::dto::trigger::{ScheduleMessageRequest, TestTriggerRequest, TriggerResponse};
use crate::error::{Result, SharedError};
use crate::models::form::FormInput;
use crate::models::status::StatusDisplay;
use crate::timezone::{
    format_in_local_zone, min_datetime_bound, timezone_display, to_absolute_instant, DisplayStyle,
};

/// Shown in place of the local time when the server echoes an unreadable instant.
const INVALID_DATE: &str = "Invalid Date";

/// Page elements the submitter reads and writes.
pub trait FormSurface {
    fn read_input(&self) -> FormInput;
    fn show_status(&self, status: &StatusDisplay);
    fn set_control_disabled(&self, disabled: bool);
    fn reset_fields(&self);
    fn set_min_datetime(&self, bound: &str);
    fn set_timezone_display(&self, text: &str);
}

/// Sends a JSON body to the trigger endpoint and parses the JSON answer.
///
/// Transport and body-parsing failures are reported as `SharedError::Network`.
#[async_trait(?Send)]
pub trait TriggerTransport {
    async fn post_json(&self, url: &str, csrf_token: &str, body: Value) -> Result<TriggerResponse>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The viewer's timezone.
pub trait LocalZone {
    fn zone(&self) -> Tz;
}

/// Which of the two page configurations is active.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmitterVariant {
    /// Phone, body and scheduled time posted as a queued message
    #[default]
    Schedule,
    /// A single button posting `{"action": "test"}`
    Trigger,
}

impl SubmitterVariant {
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("trigger") => SubmitterVariant::Trigger,
            _ => SubmitterVariant::Schedule,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterSettings {
    pub endpoint: String,
    pub csrf_cookie_name: String,
    pub variant: SubmitterVariant,
}

impl Default for SubmitterSettings {
    fn default() -> Self {
        Self {
            endpoint: "/trigger/".to_string(),
            csrf_cookie_name: "csrftoken".to_string(),
            variant: SubmitterVariant::Schedule,
        }
    }
}

/// Disables the submit control for its lifetime.
///
/// Dropping the guard re-enables the control, whichever way the cycle ends.
struct ControlGuard<'a> {
    surface: &'a dyn FormSurface,
}

impl<'a> ControlGuard<'a> {
    fn engage(surface: &'a dyn FormSurface) -> Self {
        surface.set_control_disabled(true);
        Self { surface }
    }
}

impl Drop for ControlGuard<'_> {
    fn drop(&mut self) {
        self.surface.set_control_disabled(false);
    }
}

pub struct FormSubmitter<'a> {
    settings: SubmitterSettings,
    surface: &'a dyn FormSurface,
    transport: &'a dyn TriggerTransport,
    cookies: &'a dyn CookieJar,
    clock: &'a dyn Clock,
    zone: &'a dyn LocalZone,
}

impl<'a> FormSubmitter<'a> {
    pub fn new(
        settings: SubmitterSettings,
        surface: &'a dyn FormSurface,
        transport: &'a dyn TriggerTransport,
        cookies: &'a dyn CookieJar,
        clock: &'a dyn Clock,
        zone: &'a dyn LocalZone,
    ) -> Self {
        Self {
            settings,
            surface,
            transport,
            cookies,
            clock,
            zone,
        }
    }

    pub fn variant(&self) -> SubmitterVariant {
        self.settings.variant
    }

    /// Writes the timezone label and the lower bound of the time widget.
    pub fn initialize(&self) {
        if self.settings.variant == SubmitterVariant::Trigger {
            log::debug!("Trigger variant has no time widget to initialize");
            return;
        }
        let zone = self.zone.zone();
        let display = timezone_display(self.clock.now(), &zone);
        log::info!("Viewer timezone: {}", display);
        self.surface.set_timezone_display(&display);
        self.refresh_min_bound();
    }

    /// Rewrites the earliest accepted time as the current local minute.
    pub fn refresh_min_bound(&self) {
        let bound = min_datetime_bound(self.clock.now(), &self.zone.zone());
        self.surface.set_min_datetime(&bound);
    }

    /// Runs one scheduling cycle and returns the status it left on the page.
    pub async fn on_submit(&self) -> StatusDisplay {
        let _guard = ControlGuard::engage(self.surface);
        self.surface.show_status(&StatusDisplay::scheduling());

        let input = self.surface.read_input();
        let validated = match input.validate_required() {
            Ok(validated) => validated,
            Err(e) => return self.finish(StatusDisplay::invalid_input(&e)),
        };

        let zone = self.zone.zone();
        let scheduled_time = match to_absolute_instant(&validated.scheduled_local_time, &zone) {
            Ok(instant) => instant,
            Err(e) => {
                log::warn!("Rejected scheduled time {:?}: {}", validated.scheduled_local_time, e);
                return self.finish(StatusDisplay::invalid_input(&e));
            }
        };

        let request = ScheduleMessageRequest {
            phone: validated.phone,
            body: validated.body,
            scheduled_time,
        };
        log::debug!("Scheduling message for {}", request.scheduled_time);

        let response = match self.post(&request).await {
            Ok(response) => response,
            Err(e) => return self.finish(transport_failure(&e)),
        };

        if !response.success {
            log::warn!("Server rejected scheduled message: {:?}", response.error);
            return self.finish(StatusDisplay::server_failure(response.error_text().as_deref()));
        }

        let echoed = response.scheduled_time.as_deref().unwrap_or_default();
        let local_time = format_in_local_zone(echoed, &zone, DisplayStyle::FULL_LONG)
            .unwrap_or_else(|e| {
                log::warn!("Server echoed an unreadable scheduled_time: {}", e);
                INVALID_DATE.to_string()
            });
        let queued_id = response.queued_id_text();
        log::info!("Message queued with id {}", queued_id);

        let status = self.finish(StatusDisplay::scheduled(&queued_id, &local_time, zone.name()));
        self.surface.reset_fields();
        self.refresh_min_bound();
        status
    }

    /// Runs one cycle of the minimal trigger button.
    pub async fn on_click(&self) -> StatusDisplay {
        let _guard = ControlGuard::engage(self.surface);
        self.surface.show_status(&StatusDisplay::triggering());

        let response = match self.post(&TestTriggerRequest::test()).await {
            Ok(response) => response,
            Err(e) => return self.finish(transport_failure(&e)),
        };

        if response.success {
            let result = response.result_text();
            log::info!("Test action triggered: {:?}", result);
            self.finish(StatusDisplay::triggered(result.as_deref()))
        } else {
            log::warn!("Test action failed: {:?}", response.error);
            self.finish(StatusDisplay::server_failure(response.error_text().as_deref()))
        }
    }

    async fn post<T: Serialize>(&self, payload: &T) -> Result<TriggerResponse> {
        let body = serde_json::to_value(payload)?;
        let token = csrf_token(self.cookies, &self.settings.csrf_cookie_name);
        if token.is_empty() {
            log::debug!("No {} cookie, sending an empty CSRF header", self.settings.csrf_cookie_name);
        }
        self.transport
            .post_json(&self.settings.endpoint, &token, body)
            .await
    }

    fn finish(&self, status: StatusDisplay) -> StatusDisplay {
        self.surface.show_status(&status);
        status
    }
}

fn transport_failure(error: &SharedError) -> StatusDisplay {
    log::error!("Request to trigger endpoint failed: {}", error);
    match error {
        SharedError::Network(description) => StatusDisplay::network_failure(description),
        other => StatusDisplay::network_failure(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSurface {
        disabled: RefCell<Vec<bool>>,
    }

    impl FormSurface for RecordingSurface {
        fn read_input(&self) -> FormInput {
            FormInput::default()
        }
        fn show_status(&self, _status: &StatusDisplay) {}
        fn set_control_disabled(&self, disabled: bool) {
            self.disabled.borrow_mut().push(disabled);
        }
        fn reset_fields(&self) {}
        fn set_min_datetime(&self, _bound: &str) {}
        fn set_timezone_display(&self, _text: &str) {}
    }

    #[test]
    fn test_guard_restores_control_on_drop() {
        let surface = RecordingSurface::default();
        {
            let _guard = ControlGuard::engage(&surface);
            assert_eq!(*surface.disabled.borrow(), vec![true]);
        }
        assert_eq!(*surface.disabled.borrow(), vec![true, false]);
    }

    #[test]
    fn test_variant_from_attribute() {
        assert_eq!(SubmitterVariant::from_attribute(Some("trigger")), SubmitterVariant::Trigger);
        assert_eq!(SubmitterVariant::from_attribute(Some(" Trigger ")), SubmitterVariant::Trigger);
        assert_eq!(SubmitterVariant::from_attribute(Some("schedule")), SubmitterVariant::Schedule);
        assert_eq!(SubmitterVariant::from_attribute(None), SubmitterVariant::Schedule);
    }

    #[test]
    fn test_transport_failure_keeps_description() {
        let status = transport_failure(&SharedError::Network("timeout".to_string()));
        assert_eq!(status.text, "Network error: timeout");
        assert!(status.is_error());
    }
}
