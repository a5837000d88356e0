use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
};

use super::{ModelOption, PageView};
use crate::backend::fetch::js_reason;
use crate::config::ElementIds;
use crate::utils::errors::ControllerError;

/// `DomPage` is the `PageView` over the live document.  Element handles are
/// resolved once, at construction.
#[derive(Debug, Clone)]
pub struct DomPage {
    form: HtmlFormElement,
    model_select: HtmlSelectElement,
    blood_glucose: HtmlInputElement,
    meal: HtmlInputElement,
    result: Element,
}

impl DomPage {
    pub fn from_document(document: &Document, ids: &ElementIds) -> Result<Self, ControllerError> {
        Ok(Self {
            form: element_by_id(document, &ids.form)?,
            model_select: element_by_id(document, &ids.model_select)?,
            blood_glucose: element_by_id(document, &ids.blood_glucose)?,
            meal: element_by_id(document, &ids.meal)?,
            result: element_by_id(document, &ids.result)?,
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// The result area's current text.
    pub fn result_text(&self) -> String {
        self.result.text_content().unwrap_or_default()
    }
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, ControllerError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or_else(|| ControllerError::MissingElement(id.to_string()))
}

impl PageView for DomPage {
    fn append_option(&self, option: &ModelOption) -> Result<(), ControllerError> {
        let element = HtmlOptionElement::new_with_text_and_value(&option.label, &option.value)
            .map_err(|error| ControllerError::Dom(js_reason(&error)))?;
        element.set_disabled(option.placeholder);
        self.model_select
            .append_child(&element)
            .map_err(|error| ControllerError::Dom(js_reason(&error)))?;
        Ok(())
    }

    fn selected_model(&self) -> String {
        self.model_select.value()
    }

    fn blood_glucose(&self) -> String {
        self.blood_glucose.value()
    }

    fn meal(&self) -> String {
        self.meal.value()
    }

    fn set_result(&self, text: &str) {
        self.result.set_text_content(Some(text));
    }
}
