use log::error;

use super::{ModelOption, PageView, ERROR_LOADING_MODELS, NO_MODELS_FOUND};
use crate::backend::Backend;

/// What the model lister rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome {
    /// One option per listed model, in listing order
    Models(usize),
    /// The "No models found" placeholder
    Empty,
    /// The "Error loading models" placeholder
    Failed,
}

/// Fetches the model listing and appends it to the dropdown.  Existing
/// options are left in place, so this runs once per page load.
pub async fn load_models<P: PageView, B: Backend>(page: &P, backend: &B) -> ListingOutcome {
    let (outcome, options) = match backend.list_models().await {
        Ok(models) if models.is_empty() => (
            ListingOutcome::Empty,
            vec![ModelOption::placeholder(NO_MODELS_FOUND)],
        ),
        Ok(models) => (
            ListingOutcome::Models(models.len()),
            models.into_iter().map(ModelOption::model).collect(),
        ),
        Err(err) => {
            error!("Error fetching models: {}", err);
            (
                ListingOutcome::Failed,
                vec![ModelOption::placeholder(ERROR_LOADING_MODELS)],
            )
        }
    };
    for option in options.iter() {
        if let Err(err) = page.append_option(option) {
            error!("Failed to render model option {:?}: {}", option.label, err);
        }
    }
    outcome
}
