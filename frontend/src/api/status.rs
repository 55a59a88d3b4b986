use crate::api::api_url;
use crate::config::Config;
use gloo_net::http::Request;
use shared::ServerStatusDto;

/// Get the health status of the scheduler server
pub async fn get_server_status() -> Result<ServerStatusDto, String> {
    let response = Request::get(&api_url(Config::STATUS_PATH))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch server status: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to get server status: HTTP {}",
            response.status()
        ));
    }

    response
        .json::<ServerStatusDto>()
        .await
        .map_err(|e| format!("Failed to parse server status: {}", e))
}
