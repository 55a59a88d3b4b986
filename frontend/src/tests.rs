#[cfg(test)]
mod tests {
    use crate::api::api_url;
    use crate::api::trigger::parse_trigger_body;
    use crate::config::Config;
    use pretty_assertions::assert_eq;
    use shared::{SharedError, SubmitterVariant};

    #[test]
    fn test_api_url_is_relative() {
        assert_eq!(api_url("/trigger/"), "/trigger/");
        assert_eq!(api_url(Config::STATUS_PATH), "/status/");
    }

    #[test]
    fn test_submitter_settings() {
        let settings = Config::submitter_settings(SubmitterVariant::Trigger);
        assert_eq!(settings.endpoint, "/trigger/");
        assert_eq!(settings.csrf_cookie_name, "csrftoken");
        assert_eq!(settings.variant, SubmitterVariant::Trigger);
    }

    #[test]
    fn test_parse_success_body() {
        let response = parse_trigger_body(
            r#"{"success": true, "queued_id": "abc123", "scheduled_time": "2030-01-01T15:00:00.000Z"}"#,
        )
        .unwrap();
        assert!(response.success);
        assert_eq!(response.queued_id_text(), "abc123");
    }

    #[test]
    fn test_parse_error_body_from_500() {
        let response = parse_trigger_body(r#"{"success": false, "error": "worker offline"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error_text().as_deref(), Some("worker offline"));
    }

    #[test]
    fn test_html_body_is_network_error() {
        let err = parse_trigger_body("<!DOCTYPE html><title>Forbidden</title>").unwrap_err();
        assert!(matches!(err, SharedError::Network(ref d) if d.starts_with("Parse error: ")));
    }
}
