//! The backend module provides the two exchanges with the DoseWizard
//! server: listing trained models and requesting a prediction.  The
//! `Transport` trait isolates raw HTTP, so `HttpBackend` can be driven by
//! the browser Fetch API (`FetchTransport`) or by an in-memory transport in
//! tests.
//!
//! All futures here are single-threaded; none of them are `Send`.

use log::debug;

use crate::config::Endpoints;
use crate::protocol::{
    parse_listing, parse_prediction, HttpReply, PredictionOutcome, PredictionRequest,
};
use crate::utils::errors::ControllerError;

pub mod fetch;

pub use self::fetch::FetchTransport;

/// Raw HTTP access.  Implementations return any reply the server produced,
/// whatever its status; only failures to obtain a reply are errors.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpReply, ControllerError>;
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, ControllerError>;
}

/// The operations the page flows need from the server.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn list_models(&self) -> Result<Vec<String>, ControllerError>;
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionOutcome, ControllerError>;
}

/// `HttpBackend` speaks the DoseWizard JSON protocol over a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpBackend<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> HttpBackend<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Backend for HttpBackend<T> {
    async fn list_models(&self) -> Result<Vec<String>, ControllerError> {
        let url = self.endpoints.models_url();
        let reply = self.transport.get(&url).await?;
        debug!("GET {} -> {}", url, reply.status);
        parse_listing(&url, &reply)
    }

    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionOutcome, ControllerError> {
        let url = self.endpoints.predict_url();
        let body = serde_json::to_string(request)?;
        let reply = self.transport.post_json(&url, body).await?;
        debug!("POST {} -> {}", url, reply.status);
        parse_prediction(&url, &reply)
    }
}
