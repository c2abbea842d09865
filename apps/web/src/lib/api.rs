//! HTTP helper for fetching published documents with a timeout. Bodies are
//! returned as text so parsing stays in the shared core.

use super::errors::AppError;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::AbortController;

/// Fetches a document body, aborting after `timeout_ms`.
pub async fn get_text(url: &str, timeout_ms: u32) -> Result<String, AppError> {
    let response = send_with_timeout(timeout_ms, |signal| {
        Request::get(url)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build request: {err}")))
    })
    .await?;

    if !response.ok() {
        return Err(AppError::Http {
            status: response.status(),
        });
    }

    response
        .text()
        .await
        .map_err(|err| AppError::Parse(err.to_string()))
}

/// Maps network errors into `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Tiempo de espera agotado. Inténtalo de nuevo.".to_string())
    } else {
        AppError::Network(message)
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    timeout_ms: u32,
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}
