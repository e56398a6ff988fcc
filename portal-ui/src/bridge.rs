use js_sys::Promise;
use portal_core::actions::PostMode;
use portal_core::dto::PortalSnapshot;
use portal_core::envelope::{parse_ack, parse_envelope};
use portal_core::error::{ActionError, FetchError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

fn js_error(e: JsValue) -> String {
    if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

pub fn encode_component(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

async fn send(url: &str, init: &RequestInit) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let request = Request::new_with_str_and_init(url, init).map_err(js_error)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    value
        .dyn_into::<Response>()
        .map_err(|_| "fetch resolved to a non-Response value".to_string())
}

async fn body_text(response: &Response) -> Result<String, String> {
    let promise: Promise = response.text().map_err(js_error)?;
    let text = JsFuture::from(promise).await.map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| "response body is not text".to_string())
}

pub async fn fetch_snapshot(url: &str) -> Result<PortalSnapshot, FetchError> {
    log::debug!("fetching portal snapshot");
    let init = RequestInit::new();
    init.set_method("GET");
    let response = send(url, &init).await.map_err(FetchError::Network)?;
    let body = body_text(&response).await.map_err(FetchError::Network)?;
    parse_envelope(&body)
}

/// One POST per action. `text/plain` keeps the request simple so no
/// preflight is issued against the script endpoint.
pub async fn post_action(url: &str, body: &str, mode: PostMode) -> Result<(), ActionError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));
    let headers = Headers::new().map_err(|e| ActionError::Network(js_error(e)))?;
    headers
        .set("Content-Type", "text/plain;charset=utf-8")
        .map_err(|e| ActionError::Network(js_error(e)))?;
    init.set_headers(&headers);
    match mode {
        PostMode::Opaque => {
            init.set_mode(RequestMode::NoCors);
            send(url, &init).await.map_err(ActionError::Network)?;
            Ok(())
        }
        PostMode::Acknowledged => {
            init.set_mode(RequestMode::Cors);
            let response = send(url, &init).await.map_err(ActionError::Network)?;
            if !response.ok() {
                return Err(ActionError::Rejected(format!("HTTP {}", response.status())));
            }
            let text = body_text(&response).await.map_err(ActionError::Network)?;
            parse_ack(&text)
        }
    }
}
