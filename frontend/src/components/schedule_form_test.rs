use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use gloo_utils::document;
use serde_json::{json, Value};
use shared::{Result, SharedError, TriggerResponse, TriggerTransport};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::platform::time::sleep;

use super::schedule_form::{ScheduleForm, ScheduleFormProps};
use crate::browser::TransportHandle;

wasm_bindgen_test_configure!(run_in_browser);

/// Answers every post with the same JSON after `delay`, recording the bodies.
struct ScriptedTransport {
    reply: Value,
    delay: Duration,
    bodies: Rc<RefCell<Vec<Value>>>,
}

#[async_trait(?Send)]
impl TriggerTransport for ScriptedTransport {
    async fn post_json(&self, _url: &str, _csrf_token: &str, body: Value) -> Result<TriggerResponse> {
        self.bodies.borrow_mut().push(body);
        sleep(self.delay).await;
        serde_json::from_value(self.reply.clone()).map_err(|e| SharedError::Network(e.to_string()))
    }
}

pub(super) fn scripted(reply: Value, delay: Duration) -> (TransportHandle, Rc<RefCell<Vec<Value>>>) {
    let bodies = Rc::new(RefCell::new(Vec::new()));
    let transport = ScriptedTransport {
        reply,
        delay,
        bodies: bodies.clone(),
    };
    (TransportHandle::new(transport), bodies)
}

pub(super) fn mount_point() -> Element {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

pub(super) fn find<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{} not rendered", selector))
        .dyn_into::<T>()
        .unwrap_or_else(|_| panic!("{} has the wrong element type", selector))
}

pub(super) fn has_class(element: &Element, class: &str) -> bool {
    element.class_name().split_whitespace().any(|c| c == class)
}

async fn render_form(transport: TransportHandle) -> Element {
    let root = mount_point();
    yew::Renderer::<ScheduleForm>::with_root_and_props(root.clone(), ScheduleFormProps { transport })
        .render();
    sleep(Duration::from_millis(20)).await;
    root
}

fn fill(root: &Element, phone: &str, body: &str, scheduled_time: &str) {
    find::<HtmlInputElement>(root, "#phone").set_value(phone);
    find::<HtmlTextAreaElement>(root, "#body").set_value(body);
    find::<HtmlInputElement>(root, "#scheduled_time").set_value(scheduled_time);
}

#[wasm_bindgen_test]
async fn test_form_renders_page_ids() {
    let (transport, _) = scripted(json!({"success": true}), Duration::ZERO);
    let root = render_form(transport).await;

    find::<HtmlFormElement>(&root, "#scheduleForm");
    assert_eq!(find::<HtmlInputElement>(&root, "#phone").type_(), "tel");
    find::<HtmlTextAreaElement>(&root, "#body");
    assert_eq!(find::<HtmlInputElement>(&root, "#scheduled_time").type_(), "datetime-local");
    find::<Element>(&root, "#timezone-display");
    assert_eq!(find::<HtmlButtonElement>(&root, "#scheduleBtn").type_(), "submit");
    assert_eq!(find::<Element>(&root, "#result").text_content().unwrap_or_default(), "");
}

#[wasm_bindgen_test]
async fn test_mount_writes_min_bound_and_timezone() {
    let (transport, _) = scripted(json!({"success": true}), Duration::ZERO);
    let root = render_form(transport).await;

    let min = find::<Element>(&root, "#scheduled_time")
        .get_attribute("min")
        .unwrap_or_default();
    assert_eq!(min.len(), "2030-01-01T10:00".len());
    assert_eq!(&min[10..11], "T");

    let display = find::<Element>(&root, "#timezone-display")
        .text_content()
        .unwrap_or_default();
    assert!(display.contains(" (UTC"), "unexpected timezone label {:?}", display);
}

#[wasm_bindgen_test]
async fn test_successful_submit_resets_form() {
    let (transport, bodies) = scripted(
        json!({"success": true, "queued_id": "q1", "scheduled_time": "2099-01-01T15:00:00.000Z"}),
        Duration::ZERO,
    );
    let root = render_form(transport).await;
    fill(&root, " +15551234567 ", " hello ", "2099-01-01T10:00");

    find::<HtmlFormElement>(&root, "#scheduleForm").request_submit().unwrap();
    sleep(Duration::from_millis(50)).await;

    let bodies = bodies.borrow();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["phone"], json!("+15551234567"));
    assert_eq!(bodies[0]["body"], json!("hello"));
    assert!(bodies[0]["scheduled_time"].as_str().unwrap_or_default().ends_with(".000Z"));

    let result = find::<Element>(&root, "#result");
    let text = result.text_content().unwrap_or_default();
    assert!(text.starts_with("Success! Message scheduled (ID: q1)."), "{}", text);
    assert!(has_class(&result, "success"));

    assert_eq!(find::<HtmlInputElement>(&root, "#phone").value(), "");
    assert_eq!(find::<HtmlTextAreaElement>(&root, "#body").value(), "");
    assert_eq!(find::<HtmlInputElement>(&root, "#scheduled_time").value(), "");
    assert!(!find::<HtmlButtonElement>(&root, "#scheduleBtn").disabled());
}

#[wasm_bindgen_test]
async fn test_failed_submit_keeps_fields() {
    let (transport, _) = scripted(json!({"success": false, "error": 123}), Duration::ZERO);
    let root = render_form(transport).await;
    fill(&root, "+15551234567", "hello", "2099-01-01T10:00");

    find::<HtmlFormElement>(&root, "#scheduleForm").request_submit().unwrap();
    sleep(Duration::from_millis(50)).await;

    let result = find::<Element>(&root, "#result");
    assert_eq!(result.text_content().unwrap_or_default(), "Error: 123");
    assert!(has_class(&result, "error"));
    assert_eq!(find::<HtmlInputElement>(&root, "#phone").value(), "+15551234567");
    assert!(!find::<HtmlButtonElement>(&root, "#scheduleBtn").disabled());
}

#[wasm_bindgen_test]
async fn test_second_submit_while_in_flight_is_ignored() {
    let (transport, bodies) = scripted(
        json!({"success": true, "queued_id": "q1", "scheduled_time": "2099-01-01T15:00:00.000Z"}),
        Duration::from_millis(100),
    );
    let root = render_form(transport).await;
    fill(&root, "+15551234567", "hello", "2099-01-01T10:00");
    let form = find::<HtmlFormElement>(&root, "#scheduleForm");
    let button = find::<HtmlButtonElement>(&root, "#scheduleBtn");

    form.request_submit().unwrap();
    assert!(button.disabled());
    form.request_submit().unwrap();

    sleep(Duration::from_millis(250)).await;

    assert_eq!(bodies.borrow().len(), 1);
    assert!(!button.disabled());
}
