//! The page module drives the DoseWizard page: the model lister fills the
//! model dropdown once per page load, and the prediction submitter handles
//! each form submission.  Both flows take the page and backend as explicit
//! parameters, so they run the same against the real DOM (`DomPage`) and
//! against in-memory doubles.
//!
//! Every user-visible message is a constant of this module.

pub mod dom;
pub mod lister;
pub mod submitter;
pub mod web;

pub use self::dom::DomPage;
pub use self::lister::{load_models, ListingOutcome};
pub use self::submitter::{dosage_message, submit_prediction, SubmissionOutcome};
pub use self::web::DoseWizard;

use crate::utils::errors::ControllerError;

pub const NO_MODELS_FOUND: &str = "No models found";
pub const ERROR_LOADING_MODELS: &str = "Error loading models";
pub const SELECT_A_MODEL: &str = "Please select a model.";
pub const PREDICTING: &str = "Predicting...";
pub const PREDICTION_FAILED: &str = "An error occurred during prediction.";

/// An entry of the model dropdown.  Placeholders carry an empty value and
/// are rendered disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOption {
    pub value: String,
    pub label: String,
    pub placeholder: bool,
}

impl ModelOption {
    pub fn model(id: String) -> Self {
        Self {
            label: id.clone(),
            value: id,
            placeholder: false,
        }
    }

    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            placeholder: true,
        }
    }
}

/// The page surface the flows read from and render to.
pub trait PageView {
    /// Appends to the model dropdown, after any existing options.
    fn append_option(&self, option: &ModelOption) -> Result<(), ControllerError>;
    /// The value of the selected model option, empty when none is selected.
    fn selected_model(&self) -> String;
    fn blood_glucose(&self) -> String;
    fn meal(&self) -> String;
    /// Replaces the whole content of the result area with plain text.
    fn set_result(&self, text: &str);
}
