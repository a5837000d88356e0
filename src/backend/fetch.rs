use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::Transport;
use crate::protocol::HttpReply;
use crate::utils::errors::ControllerError;

/// A `Transport` over `window.fetch`.  Requests are issued once, with no
/// timeout, retry, or abort signal.
#[derive(Debug, Clone, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }

    async fn send(&self, url: &str, init: &RequestInit) -> Result<HttpReply, ControllerError> {
        let request = Request::new_with_str_and_init(url, init)
            .map_err(|error| transport_error(url, &error))?;
        let window = web_sys::window().ok_or(ControllerError::MissingGlobal("window"))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|error| transport_error(url, &error))?
            .dyn_into()
            .map_err(|error| transport_error(url, &error))?;
        let body = read_text(url, response.text()).await?;
        Ok(HttpReply::new(response.status(), body))
    }
}

impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, ControllerError> {
        let init = RequestInit::new();
        init.set_method("GET");
        self.send(url, &init).await
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, ControllerError> {
        let headers = Headers::new().map_err(|error| transport_error(url, &error))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|error| transport_error(url, &error))?;
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
        self.send(url, &init).await
    }
}

async fn read_text(url: &str, text: Result<Promise, JsValue>) -> Result<String, ControllerError> {
    let unreadable = || ControllerError::UnreadableBody {
        url: url.to_string(),
    };
    let promise = text.map_err(|_| unreadable())?;
    JsFuture::from(promise)
        .await
        .map_err(|_| unreadable())?
        .as_string()
        .ok_or_else(unreadable)
}

fn transport_error(url: &str, error: &JsValue) -> ControllerError {
    ControllerError::Transport {
        url: url.to_string(),
        reason: js_reason(error),
    }
}

/// Best-effort text of a thrown JS value, e.g. `TypeError: Failed to fetch`.
pub(crate) fn js_reason(error: &JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.to_string()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
