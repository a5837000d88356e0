use thiserror::Error;
use wasm_bindgen::JsValue;

/// `ControllerError` enumerates all possible errors returned by dosewizard
#[derive(Error, Debug)]
pub enum ControllerError {
    /// Represents a request that never produced a response (network failure,
    /// blocked request, or a rejected fetch promise)
    #[error("The request to {url} failed before a response was received: {reason}")]
    Transport { url: String, reason: String },

    /// Represents a non-2xx response that carried no application error
    #[error("The request to {url} returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Represents a response body that could not be read or was not JSON
    #[error("The response body from {url} could not be read as JSON")]
    UnreadableBody { url: String },

    /// Represents a prediction response with neither a prediction nor an error
    #[error("The prediction response had neither a prediction nor an error field")]
    UnrecognizedResponse,

    /// Represents a prediction response with an empty prediction sequence
    #[error("The prediction response contained an empty prediction sequence")]
    EmptyPrediction,

    /// Represents a prediction value that is not a finite number
    #[error("The prediction value {0:?} is not a finite number")]
    InvalidPrediction(String),

    /// Represents a browser global (window or document) that is unavailable
    #[error("The browser {0} is unavailable")]
    MissingGlobal(&'static str),

    /// Represents a required page element that is missing or has the wrong type
    #[error("The page element #{0} is missing or has an unexpected type")]
    MissingElement(String),

    /// Represents a DOM operation that threw
    #[error("A DOM operation failed: {0}")]
    Dom(String),

    /// Transparent serde_json errors
    #[error(transparent)]
    JSONError(#[from] serde_json::error::Error),

    /// Transparent serde_yaml errors
    #[error(transparent)]
    YAMLError(#[from] serde_yaml::Error),
}

/// Errors cross into JS as `Error` objects carrying the display message.
impl From<ControllerError> for JsValue {
    fn from(error: ControllerError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
