use shared::{FormInput, FormSurface, StatusDisplay, SubmitterVariant};
use yew::prelude::*;

use crate::browser::{BrowserHost, TransportHandle};
use crate::components::schedule_form::{button_is_disabled, set_button_disabled};
use crate::components::status_banner::StatusBanner;
use crate::config::Config;

/// The trigger page has no fields; only the button and the result are live.
#[derive(Clone)]
struct TriggerSurface {
    button: NodeRef,
    disabled: UseStateHandle<bool>,
    status: UseStateHandle<StatusDisplay>,
}

impl FormSurface for TriggerSurface {
    fn read_input(&self) -> FormInput {
        FormInput::default()
    }

    fn show_status(&self, status: &StatusDisplay) {
        self.status.set(status.clone());
    }

    fn set_control_disabled(&self, disabled: bool) {
        set_button_disabled(&self.button, &self.disabled, disabled);
    }

    fn reset_fields(&self) {}

    fn set_min_datetime(&self, _bound: &str) {}

    fn set_timezone_display(&self, _text: &str) {}
}

#[derive(Properties, PartialEq, Default)]
pub struct TriggerButtonProps {
    #[prop_or_default]
    pub transport: TransportHandle,
}

#[function_component(TriggerButton)]
pub fn trigger_button(props: &TriggerButtonProps) -> Html {
    let surface = TriggerSurface {
        button: use_node_ref(),
        disabled: use_state(|| false),
        status: use_state(StatusDisplay::idle),
    };

    let onclick = {
        let surface = surface.clone();
        let transport = props.transport.clone();
        Callback::from(move |_: MouseEvent| {
            if button_is_disabled(&surface.button) {
                return;
            }
            surface.set_control_disabled(true);

            let surface = surface.clone();
            let host = BrowserHost::with_transport(transport.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let submitter =
                    host.submitter(Config::submitter_settings(SubmitterVariant::Trigger), &surface);
                submitter.on_click().await;
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto mt-10 bg-white shadow rounded-lg p-6 text-center">
            <h1 class="text-2xl font-bold text-gray-900 mb-4">{"Scheduler test trigger"}</h1>
            <button
                id="triggerBtn"
                type="button"
                ref={surface.button.clone()}
                disabled={*surface.disabled}
                onclick={onclick}
                class="py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50"
            >
                {"Trigger"}
            </button>
            <StatusBanner status={(*surface.status).clone()} />
        </div>
    }
}
