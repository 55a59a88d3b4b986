use crate::api::status::get_server_status;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum ServerState {
    Checking,
    Up(String),
    Down(String),
}

/// Small badge showing whether the scheduler server answers `/status/`.
#[function_component(ServerStatusBadge)]
pub fn server_status_badge() -> Html {
    let state = use_state(|| ServerState::Checking);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_server_status().await {
                    Ok(status) if status.is_ok() => {
                        log::debug!("Server status ok at {}", status.time);
                        state.set(ServerState::Up(status.time));
                    }
                    Ok(status) => {
                        log::warn!("Server reported status {}", status.status);
                        state.set(ServerState::Down(status.status));
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        state.set(ServerState::Down(e));
                    }
                }
            });
            || ()
        });
    }

    let (label, title, tone) = match &*state {
        ServerState::Checking => ("Checking server…", String::new(), "bg-gray-100 text-gray-600"),
        ServerState::Up(time) => ("Server online", format!("Server time: {}", time), "bg-green-100 text-green-800"),
        ServerState::Down(reason) => ("Server unreachable", reason.clone(), "bg-red-100 text-red-800"),
    };

    html! {
        <span
            id="server-status"
            title={title}
            class={classes!("inline-flex", "items-center", "px-2", "py-1", "rounded", "text-xs", "font-medium", tone)}
        >
            {label}
        </span>
    }
}
