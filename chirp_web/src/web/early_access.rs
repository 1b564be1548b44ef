//! The one real network call in the app: early-access registration.
//!
//! Validation happens in the core crate; this module only ships the POST
//! and folds the response (or the lack of one) into the shape the form
//! renders. No retry, no backoff; the backend's `retryAfter` hint is
//! surfaced to the user instead.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use chirp::early_access::{validate_registration, RegistrationResponse};

const REGISTER_ENDPOINT: &str = "https://api.chirp-widget.com/v1/early-access/register";

pub(crate) async fn register_for_early_access(name: &str, email: &str) -> RegistrationResponse {
    let request = match validate_registration(name, email) {
        Ok(request) => request,
        Err(e) => return RegistrationResponse::failure(e.to_string()),
    };

    let body = match serde_json::to_string(&request) {
        Ok(body) => body,
        Err(e) => return RegistrationResponse::failure(format!("request encoding failed: {e}")),
    };

    match post_json(REGISTER_ENDPOINT, &body).await {
        Ok((ok, text)) => fold_response(ok, &text),
        Err(message) => RegistrationResponse::failure(message),
    }
}

/// POSTs `body` and returns (status ok, response text).
async fn post_json(url: &str, body: &str) -> Result<(bool, String), String> {
    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web_sys::RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|_| "request: failed to build".to_string())?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| "request: failed to set headers".to_string())?;

    let window = web_sys::window().ok_or("no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "Network error. Please try again.".to_string())?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch: expected Response".to_string())?;

    let text_promise = response
        .text()
        .map_err(|_| "response: text() threw".to_string())?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| "response: body read failed".to_string())?;

    Ok((response.ok(), text.as_string().unwrap_or_default()))
}

fn fold_response(ok: bool, text: &str) -> RegistrationResponse {
    let data: RegistrationResponse = serde_json::from_str(text).unwrap_or_default();

    if !ok {
        return RegistrationResponse {
            success: false,
            error: data.error.or_else(|| Some("Registration failed".to_string())),
            retry_after: data.retry_after,
            ..RegistrationResponse::default()
        };
    }

    RegistrationResponse {
        success: true,
        ..data
    }
}
