use log::{debug, info};
use shared::SubmitterVariant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::components::schedule_form::ScheduleForm;
use crate::components::server_status::ServerStatusBadge;
use crate::components::trigger_button::TriggerButton;
use crate::config::Config;

pub mod api;
pub mod browser;
pub mod components;
pub mod config;

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub variant: SubmitterVariant,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    debug!("App component rendering {:?} variant", props.variant);
    html! {
        <div class="app-container min-h-screen bg-gray-50 py-6 px-4">
            <header class="flex justify-end max-w-md mx-auto">
                <ServerStatusBadge />
            </header>
            <main>
                {
                    match props.variant {
                        SubmitterVariant::Schedule => html! { <ScheduleForm /> },
                        SubmitterVariant::Trigger => html! { <TriggerButton /> },
                    }
                }
            </main>
        </div>
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    let variant = Config::variant();
    info!("Mounting {:?} page", variant);
    yew::Renderer::<App>::with_props(AppProps { variant }).render();
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
