use shared::{SubmitterSettings, SubmitterVariant};

use crate::api::api_url;

pub struct Config;

impl Config {
    pub const TRIGGER_PATH: &'static str = "/trigger/";
    pub const STATUS_PATH: &'static str = "/status/";
    pub const CSRF_COOKIE_NAME: &'static str = "csrftoken";
    /// Attribute on `<body>` selecting the page configuration.
    pub const VARIANT_ATTRIBUTE: &'static str = "data-variant";

    pub fn api_base_url() -> String {
        // The page is served by the same origin that exposes /trigger/ and
        // /status/, so relative URLs work in development and production alike.
        "".to_string()
    }

    /// Reads the variant from `<body data-variant="...">`; anything other than
    /// `trigger` selects the scheduling form.
    pub fn variant() -> SubmitterVariant {
        let attribute = gloo_utils::document()
            .body()
            .and_then(|body| body.get_attribute(Self::VARIANT_ATTRIBUTE));
        SubmitterVariant::from_attribute(attribute.as_deref())
    }

    pub fn submitter_settings(variant: SubmitterVariant) -> SubmitterSettings {
        SubmitterSettings {
            endpoint: api_url(Self::TRIGGER_PATH),
            csrf_cookie_name: Self::CSRF_COOKIE_NAME.to_string(),
            variant,
        }
    }
}
