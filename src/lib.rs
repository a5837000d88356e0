//! # Overview
//! DoseWizard is the browser-side controller of the insulin dosage
//! prediction page, compiled to WebAssembly.  It fills the model dropdown
//! from the backend's model listing, and turns each form submission into a
//! prediction request, rendering the predicted dosage or an error.
//!
//! This repository contains:
//!
//! * Protocol types, for the JSON exchanged with the DoseWizard backend.
//! * Backend access, over the browser Fetch API or any other `Transport`.
//! * Page flows, the model lister and the prediction submitter, written
//! against a `PageView` so they run without a browser.
//! * A JS/WASM interface, for mounting the controller on a page.
//!
//! The backend owns all computation; the controller never interprets the
//! form values it sends.
pub mod backend;
pub mod config;
pub mod page;
pub mod protocol;
pub mod utils;

// Use `wee_alloc` as the global allocator when the feature is enabled.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;
