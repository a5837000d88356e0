//! The protocol module defines the JSON exchanged with the DoseWizard
//! backend, and the classification of raw HTTP replies into listing and
//! prediction outcomes.  Nothing here touches the browser, so the wire
//! handling is testable on any target.

use serde::{Deserialize, Serialize};

use crate::utils::errors::ControllerError;
use crate::utils::parse_float;

/// A status code and body, as received from the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The prediction request body.  Form input text is carried as-is; the
/// backend owns numeric interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub blood_glucose: String,
    pub meal: String,
    pub model_name: String,
}

/// The prediction response body, either `{"prediction": [...]}` or
/// `{"error": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub prediction: Option<Vec<PredictionValue>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A single prediction entry.  The DoseWizard backend emits one action
/// vector per sample (`[[x]]`), while simpler backends emit bare numbers;
/// numeric strings are accepted as well.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PredictionValue {
    Number(f64),
    Text(String),
    Nested(Vec<PredictionValue>),
}

impl PredictionValue {
    /// The dosage this entry stands for.  A nested vector yields its first
    /// scalar, and text is read up to the end of its leading number, so
    /// `"5.678 units"` is `5.678`.
    pub fn as_f64(&self) -> Result<f64, ControllerError> {
        let value = match self {
            PredictionValue::Number(value) => *value,
            PredictionValue::Text(text) => parse_float(text)
                .ok_or_else(|| ControllerError::InvalidPrediction(text.clone()))?,
            PredictionValue::Nested(values) => {
                return values
                    .first()
                    .ok_or(ControllerError::EmptyPrediction)?
                    .as_f64()
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ControllerError::InvalidPrediction(value.to_string()))
        }
    }
}

/// What a successfully classified prediction exchange produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    /// The first predicted insulin dosage
    Dosage(f64),
    /// The backend's own error message, passed through verbatim
    Rejected(String),
}

impl PredictionResponse {
    /// A non-empty `error` takes precedence over `prediction`.  Only the
    /// first element of `prediction` is used.
    pub fn into_outcome(self) -> Result<PredictionOutcome, ControllerError> {
        if let Some(error) = self.error.filter(|error| !error.is_empty()) {
            return Ok(PredictionOutcome::Rejected(error));
        }
        match self.prediction {
            Some(values) => {
                let first = values.first().ok_or(ControllerError::EmptyPrediction)?;
                Ok(PredictionOutcome::Dosage(first.as_f64()?))
            }
            None => Err(ControllerError::UnrecognizedResponse),
        }
    }
}

/// Classifies a reply from the models listing endpoint.  The listing is an
/// ordered JSON array of model identifiers; an empty array is a valid
/// listing, distinct from failure.
pub fn parse_listing(url: &str, reply: &HttpReply) -> Result<Vec<String>, ControllerError> {
    if !reply.ok() {
        return Err(ControllerError::HttpStatus {
            url: url.to_string(),
            status: reply.status,
        });
    }
    Ok(serde_json::from_str(&reply.body)?)
}

/// Classifies a reply from the prediction endpoint.  Backends report
/// application errors with non-2xx statuses, so an `error` field is honored
/// whatever the status.  Any other non-2xx reply is a status error.
pub fn parse_prediction(
    url: &str,
    reply: &HttpReply,
) -> Result<PredictionOutcome, ControllerError> {
    let status_error = || ControllerError::HttpStatus {
        url: url.to_string(),
        status: reply.status,
    };
    let response = match serde_json::from_str::<PredictionResponse>(&reply.body) {
        Ok(response) => response,
        Err(_) if !reply.ok() => return Err(status_error()),
        Err(error) => return Err(error.into()),
    };
    match response.into_outcome() {
        Ok(PredictionOutcome::Dosage(_)) | Err(_) if !reply.ok() => Err(status_error()),
        outcome => outcome,
    }
}
