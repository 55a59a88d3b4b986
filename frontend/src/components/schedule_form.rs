use shared::{FormInput, FormSurface, StatusDisplay, SubmitterVariant};
use web_sys::{HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser::{BrowserHost, TransportHandle};
use crate::components::status_banner::StatusBanner;
use crate::config::Config;

/// Current value of an `<input>` or `<textarea>`, empty if the node is not mounted.
pub(crate) fn field_value(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        return input.value();
    }
    node.cast::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

/// Sets the button's `disabled` property right away; the state keeps the
/// rendered attribute in agreement on the next render.
pub(crate) fn set_button_disabled(button: &NodeRef, state: &UseStateHandle<bool>, disabled: bool) {
    if let Some(button) = button.cast::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    }
    state.set(disabled);
}

pub(crate) fn button_is_disabled(button: &NodeRef) -> bool {
    button
        .cast::<HtmlButtonElement>()
        .map(|button| button.disabled())
        .unwrap_or(false)
}

#[derive(Clone)]
struct ScheduleFormSurface {
    form: NodeRef,
    phone: NodeRef,
    body: NodeRef,
    scheduled_time: NodeRef,
    button: NodeRef,
    disabled: UseStateHandle<bool>,
    status: UseStateHandle<StatusDisplay>,
    min_time: UseStateHandle<String>,
    timezone_label: UseStateHandle<String>,
}

impl FormSurface for ScheduleFormSurface {
    fn read_input(&self) -> FormInput {
        FormInput::new(
            field_value(&self.phone),
            field_value(&self.body),
            field_value(&self.scheduled_time),
        )
    }

    fn show_status(&self, status: &StatusDisplay) {
        self.status.set(status.clone());
    }

    fn set_control_disabled(&self, disabled: bool) {
        set_button_disabled(&self.button, &self.disabled, disabled);
    }

    fn reset_fields(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn set_min_datetime(&self, bound: &str) {
        if let Some(input) = self.scheduled_time.cast::<HtmlInputElement>() {
            input.set_min(bound);
        }
        self.min_time.set(bound.to_string());
    }

    fn set_timezone_display(&self, text: &str) {
        self.timezone_label.set(text.to_string());
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct ScheduleFormProps {
    /// Where submissions are posted; fetch unless overridden.
    #[prop_or_default]
    pub transport: TransportHandle,
}

#[function_component(ScheduleForm)]
pub fn schedule_form(props: &ScheduleFormProps) -> Html {
    let surface = ScheduleFormSurface {
        form: use_node_ref(),
        phone: use_node_ref(),
        body: use_node_ref(),
        scheduled_time: use_node_ref(),
        button: use_node_ref(),
        disabled: use_state(|| false),
        status: use_state(StatusDisplay::idle),
        min_time: use_state(String::new),
        timezone_label: use_state(String::new),
    };

    {
        let surface = surface.clone();
        let transport = props.transport.clone();
        use_effect_with((), move |_| {
            let host = BrowserHost::with_transport(transport);
            host.submitter(Config::submitter_settings(SubmitterVariant::Schedule), &surface)
                .initialize();
            || ()
        });
    }

    let onsubmit = {
        let surface = surface.clone();
        let transport = props.transport.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if button_is_disabled(&surface.button) {
                log::debug!("Submit ignored, a request is already in flight");
                return;
            }
            surface.set_control_disabled(true);

            let surface = surface.clone();
            let host = BrowserHost::with_transport(transport.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let submitter =
                    host.submitter(Config::submitter_settings(SubmitterVariant::Schedule), &surface);
                submitter.on_submit().await;
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto mt-10 bg-white shadow rounded-lg p-6">
            <h1 class="text-2xl font-bold text-gray-900 mb-4">{"Schedule a WhatsApp message"}</h1>
            <form id="scheduleForm" ref={surface.form.clone()} class="space-y-4" onsubmit={onsubmit}>
                <div>
                    <label for="phone" class="block text-sm font-medium text-gray-700">{"Phone number"}</label>
                    <input
                        id="phone"
                        name="phone"
                        type="tel"
                        placeholder="+15551234567"
                        ref={surface.phone.clone()}
                        class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                    />
                </div>
                <div>
                    <label for="body" class="block text-sm font-medium text-gray-700">{"Message"}</label>
                    <textarea
                        id="body"
                        name="body"
                        rows="4"
                        ref={surface.body.clone()}
                        class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                    />
                </div>
                <div>
                    <label for="scheduled_time" class="block text-sm font-medium text-gray-700">{"Send at"}</label>
                    <input
                        id="scheduled_time"
                        name="scheduled_time"
                        type="datetime-local"
                        min={(*surface.min_time).clone()}
                        ref={surface.scheduled_time.clone()}
                        class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                    />
                    <p class="mt-1 text-xs text-gray-500">
                        {"Your timezone: "}
                        <span id="timezone-display">{(*surface.timezone_label).clone()}</span>
                    </p>
                </div>
                <button
                    id="scheduleBtn"
                    type="submit"
                    ref={surface.button.clone()}
                    disabled={*surface.disabled}
                    class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50"
                >
                    {"Schedule message"}
                </button>
            </form>
            <StatusBanner status={(*surface.status).clone()} />
        </div>
    }
}
