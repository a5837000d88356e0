use log::error;

use super::{PageView, PREDICTING, PREDICTION_FAILED, SELECT_A_MODEL};
use crate::backend::Backend;
use crate::protocol::{PredictionOutcome, PredictionRequest};
use crate::utils::to_fixed;

/// What a form submission rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// No model was selected, and no request was sent
    MissingModel,
    /// The predicted dosage was rendered
    Predicted(f64),
    /// The backend's error message was rendered
    Rejected(String),
    /// The generic failure message was rendered
    Failed,
}

/// The result text for a predicted dosage, with two decimal places.
pub fn dosage_message(dosage: f64) -> String {
    format!("Predicted Insulin Dosage: {} Unit", to_fixed(dosage, 2))
}

/// Handles one form submission.  The interim status is rendered before the
/// request is issued, and every path replaces the result area.  Concurrent
/// submissions are not coordinated; whichever response resolves last is
/// what the page shows.
pub async fn submit_prediction<P: PageView, B: Backend>(
    page: &P,
    backend: &B,
) -> SubmissionOutcome {
    let request = PredictionRequest {
        blood_glucose: page.blood_glucose(),
        meal: page.meal(),
        model_name: page.selected_model(),
    };
    if request.model_name.is_empty() {
        page.set_result(SELECT_A_MODEL);
        return SubmissionOutcome::MissingModel;
    }

    page.set_result(PREDICTING);
    match backend.predict(&request).await {
        Ok(PredictionOutcome::Dosage(dosage)) => {
            page.set_result(&dosage_message(dosage));
            SubmissionOutcome::Predicted(dosage)
        }
        Ok(PredictionOutcome::Rejected(message)) => {
            page.set_result(&format!("Error: {}", message));
            SubmissionOutcome::Rejected(message)
        }
        Err(err) => {
            error!("Error: {}", err);
            page.set_result(PREDICTION_FAILED);
            SubmissionOutcome::Failed
        }
    }
}
