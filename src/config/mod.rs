//! The config module describes where the controller finds its backend and
//! which page elements it drives.  Every field has a default matching the
//! DoseWizard page, so an empty document (`{}`) is a complete configuration.

use serde::{Deserialize, Serialize};

use crate::utils::errors::ControllerError;

/// `ControllerConfig` bundles the backend endpoints and the page element
/// identifiers.  It can be posted as JSON or YAML from the JS side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfig {
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub elements: ElementIds,
}

impl ControllerConfig {
    pub fn from_json(config: &str) -> Result<Self, ControllerError> {
        Ok(serde_json::from_str(config)?)
    }

    pub fn from_yaml(config: &str) -> Result<Self, ControllerError> {
        Ok(serde_yaml::from_str(config)?)
    }

    pub fn to_json(&self) -> Result<String, ControllerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String, ControllerError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Backend endpoints.  An empty `base_url` keeps requests relative to the
/// page origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_models_path")]
    pub models_path: String,
    #[serde(default = "default_predict_path")]
    pub predict_path: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            models_path: default_models_path(),
            predict_path: default_predict_path(),
        }
    }
}

impl Endpoints {
    pub fn models_url(&self) -> String {
        join_url(&self.base_url, &self.models_path)
    }

    pub fn predict_url(&self) -> String {
        join_url(&self.base_url, &self.predict_path)
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn default_models_path() -> String {
    String::from("/models")
}

fn default_predict_path() -> String {
    String::from("/predict")
}

/// Element identifiers of the page the controller is mounted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementIds {
    #[serde(default = "default_model_select")]
    pub model_select: String,
    #[serde(default = "default_form")]
    pub form: String,
    #[serde(default = "default_blood_glucose")]
    pub blood_glucose: String,
    #[serde(default = "default_meal")]
    pub meal: String,
    #[serde(default = "default_result")]
    pub result: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            model_select: default_model_select(),
            form: default_form(),
            blood_glucose: default_blood_glucose(),
            meal: default_meal(),
            result: default_result(),
        }
    }
}

fn default_model_select() -> String {
    String::from("model")
}

fn default_form() -> String {
    String::from("prediction-form")
}

fn default_blood_glucose() -> String {
    String::from("blood-glucose")
}

fn default_meal() -> String {
    String::from("meal")
}

fn default_result() -> String {
    String::from("result")
}
