use std::rc::Rc;

use log::{error, info, LevelFilter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

use super::{load_models, submit_prediction, DomPage};
use crate::backend::fetch::js_reason;
use crate::backend::{FetchTransport, HttpBackend};
use crate::config::ControllerConfig;
use crate::utils::errors::ControllerError;
use crate::utils::logging::init_console_logger;
use crate::utils::set_panic_hook;

type PageBackend = HttpBackend<FetchTransport>;

/// The web `DoseWizard` provides the JS/WASM interface to the controller.
/// Hosts either rely on the `autostart` feature, or construct one from a
/// JSON or YAML configuration and call `mount`.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct DoseWizard {
    config: ControllerConfig,
}

#[wasm_bindgen]
impl DoseWizard {
    /// A controller with the default endpoints and element identifiers.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        set_panic_hook();
        Self::default()
    }

    /// Creates a controller from a JSON configuration.
    pub fn post_json(config: &str) -> Result<DoseWizard, JsValue> {
        set_panic_hook();
        Ok(Self {
            config: ControllerConfig::from_json(config)?,
        })
    }

    /// Creates a controller from a YAML configuration.
    pub fn post_yaml(config: &str) -> Result<DoseWizard, JsValue> {
        set_panic_hook();
        Ok(Self {
            config: ControllerConfig::from_yaml(config)?,
        })
    }

    /// Get a JSON representation of the full configuration.
    pub fn get_json(&self) -> Result<String, JsValue> {
        Ok(self.config.to_json()?)
    }

    /// Get a YAML representation of the full configuration.
    pub fn get_yaml(&self) -> Result<String, JsValue> {
        Ok(self.config.to_yaml()?)
    }

    /// Loads the model listing and handles form submissions, once the
    /// document is ready.  Mount a page once; the listing appends to the
    /// dropdown without clearing it.
    pub fn mount(&self) -> Result<(), JsValue> {
        set_panic_hook();
        init_console_logger(LevelFilter::Info);
        let document = document()?;
        let config = self.config.clone();
        if document.ready_state() == "loading" {
            let ready_document = document.clone();
            let on_ready = Closure::once(move |_event: Event| {
                if let Err(err) = mount_page(&ready_document, &config) {
                    error!("Failed to mount DoseWizard: {}", err);
                }
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                on_ready.as_ref().unchecked_ref(),
            )?;
            on_ready.forget();
            Ok(())
        } else {
            Ok(mount_page(&document, &config)?)
        }
    }
}

/// Mounts with the default configuration when the module is instantiated.
/// A page without the expected elements is left untouched.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = DoseWizard::new().mount() {
        error!("DoseWizard did not mount: {:?}", err);
    }
}

fn document() -> Result<Document, ControllerError> {
    web_sys::window()
        .ok_or(ControllerError::MissingGlobal("window"))?
        .document()
        .ok_or(ControllerError::MissingGlobal("document"))
}

fn mount_page(document: &Document, config: &ControllerConfig) -> Result<(), ControllerError> {
    let page = Rc::new(DomPage::from_document(document, &config.elements)?);
    let backend = Rc::new(HttpBackend::new(
        FetchTransport::new(),
        config.endpoints.clone(),
    ));

    listen_for_submissions(&page, &backend)?;

    let listing_page = page.clone();
    let listing_backend = backend.clone();
    spawn_local(async move {
        let outcome = load_models(&*listing_page, &*listing_backend).await;
        info!("Model listing rendered: {:?}", outcome);
    });
    Ok(())
}

fn listen_for_submissions(
    page: &Rc<DomPage>,
    backend: &Rc<PageBackend>,
) -> Result<(), ControllerError> {
    let submit_page = page.clone();
    let submit_backend = backend.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let page = submit_page.clone();
        let backend = submit_backend.clone();
        spawn_local(async move {
            let outcome = submit_prediction(&*page, &*backend).await;
            info!("Prediction submission rendered: {:?}", outcome);
        });
    });
    page.form()
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|error| ControllerError::Dom(js_reason(&error)))?;
    // The listener lives as long as the page.
    on_submit.forget();
    Ok(())
}
