use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use js_sys::{Array, Intl, Object, Reflect};
use shared::timezone::parse_timezone;
use shared::{
    Clock, CookieJar, FormSubmitter, FormSurface, LocalZone, SubmitterSettings, TriggerTransport,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

use crate::api::trigger::GlooTransport;

/// IANA name the browser resolves for the viewer, e.g. "Europe/Berlin".
pub fn browser_timezone_name() -> Option<String> {
    let options = Intl::DateTimeFormat::new(&Array::new(), &Object::new()).resolved_options();
    Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|value| value.as_string())
}

/// The viewer's timezone as reported by `Intl`, UTC when it cannot be resolved.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserZone;

impl LocalZone for BrowserZone {
    fn zone(&self) -> Tz {
        match browser_timezone_name() {
            Some(name) => parse_timezone(&name).unwrap_or_else(|e| {
                log::warn!("{}, falling back to UTC", e);
                Tz::UTC
            }),
            None => {
                log::warn!("Browser did not report a timezone, falling back to UTC");
                Tz::UTC
            }
        }
    }
}

/// `document.cookie`
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentCookies;

impl CookieJar for DocumentCookies {
    fn cookie_string(&self) -> String {
        gloo_utils::document()
            .dyn_into::<HtmlDocument>()
            .ok()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Shared handle to the transport a component posts through.
///
/// Defaults to fetch via `gloo-net`; two handles are equal when they point at
/// the same transport, which keeps yew from re-rendering on every parent render.
#[derive(Clone)]
pub struct TransportHandle(Rc<dyn TriggerTransport>);

impl TransportHandle {
    pub fn new(transport: impl TriggerTransport + 'static) -> Self {
        Self(Rc::new(transport))
    }
}

impl Default for TransportHandle {
    fn default() -> Self {
        Self::new(GlooTransport)
    }
}

impl PartialEq for TransportHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TransportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TransportHandle")
    }
}

/// Browser implementations of every capability the submitter needs.
#[derive(Debug, Default, Clone)]
pub struct BrowserHost {
    transport: TransportHandle,
    cookies: DocumentCookies,
    clock: SystemClock,
    zone: BrowserZone,
}

impl BrowserHost {
    pub fn with_transport(transport: TransportHandle) -> Self {
        Self {
            transport,
            ..Self::default()
        }
    }

    pub fn submitter<'a>(
        &'a self,
        settings: SubmitterSettings,
        surface: &'a dyn FormSurface,
    ) -> FormSubmitter<'a> {
        FormSubmitter::new(
            settings,
            surface,
            self.transport.0.as_ref(),
            &self.cookies,
            &self.clock,
            &self.zone,
        )
    }
}
