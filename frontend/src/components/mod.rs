pub mod schedule_form;
pub mod server_status;
pub mod status_banner;
pub mod trigger_button;

#[cfg(all(test, target_arch = "wasm32"))]
mod schedule_form_test;
