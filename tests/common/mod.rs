#![allow(dead_code)]

use std::cell::RefCell;

use dosewizard::backend::Transport;
use dosewizard::page::{ModelOption, PageView};
use dosewizard::protocol::HttpReply;
use dosewizard::utils::errors::ControllerError;

/// An in-memory page, recording every option appended and every result
/// rendered.
#[derive(Debug, Default)]
pub struct MemoryPage {
    pub options: RefCell<Vec<ModelOption>>,
    pub selected: RefCell<String>,
    pub blood_glucose: RefCell<String>,
    pub meal: RefCell<String>,
    pub results: RefCell<Vec<String>>,
}

impl MemoryPage {
    pub fn with_form(blood_glucose: &str, meal: &str, selected: &str) -> Self {
        let page = Self::default();
        *page.blood_glucose.borrow_mut() = blood_glucose.to_string();
        *page.meal.borrow_mut() = meal.to_string();
        *page.selected.borrow_mut() = selected.to_string();
        page
    }

    pub fn result(&self) -> Option<String> {
        self.results.borrow().last().cloned()
    }

    pub fn option_values(&self) -> Vec<String> {
        self.options
            .borrow()
            .iter()
            .map(|option| option.value.clone())
            .collect()
    }
}

impl PageView for MemoryPage {
    fn append_option(&self, option: &ModelOption) -> Result<(), ControllerError> {
        self.options.borrow_mut().push(option.clone());
        Ok(())
    }

    fn selected_model(&self) -> String {
        self.selected.borrow().clone()
    }

    fn blood_glucose(&self) -> String {
        self.blood_glucose.borrow().clone()
    }

    fn meal(&self) -> String {
        self.meal.borrow().clone()
    }

    fn set_result(&self, text: &str) {
        self.results.borrow_mut().push(text.to_string());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

/// A transport answering from canned replies.  A `None` reply simulates a
/// network failure.
#[derive(Debug, Default)]
pub struct CannedTransport {
    pub listing: Option<HttpReply>,
    pub prediction: Option<HttpReply>,
    pub requests: RefCell<Vec<RecordedRequest>>,
}

impl CannedTransport {
    pub fn listing(reply: Option<HttpReply>) -> Self {
        Self {
            listing: reply,
            ..Self::default()
        }
    }

    pub fn prediction(reply: Option<HttpReply>) -> Self {
        Self {
            prediction: reply,
            ..Self::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

fn network_failure(url: &str) -> ControllerError {
    ControllerError::Transport {
        url: url.to_string(),
        reason: String::from("TypeError: Failed to fetch"),
    }
}

impl Transport for CannedTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, ControllerError> {
        self.requests.borrow_mut().push(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            body: None,
        });
        self.listing.clone().ok_or_else(|| network_failure(url))
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, ControllerError> {
        self.requests.borrow_mut().push(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            body: Some(body),
        });
        self.prediction.clone().ok_or_else(|| network_failure(url))
    }
}
