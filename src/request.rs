use crate::core::{Algorithm, Percentage, SummaryRequest};
use crate::error::{Result, YtSumError};
use crate::selection::Selection;
use crate::youtube::resolve;

/// Turn a ready selection into a request.
///
/// Rejects with [`YtSumError::InvalidUrl`] when no video reference can be
/// resolved; the caller is expected to alert and clear the URL field.
pub fn build(selection: &Selection) -> Result<SummaryRequest> {
    if !selection.is_ready() {
        return Err(YtSumError::SelectionIncomplete);
    }

    let video = resolve(&selection.url).ok_or_else(|| {
        YtSumError::InvalidUrl(format!("Cannot extract video ID from: {}", selection.url))
    })?;

    let label = selection
        .percentage_label()
        .ok_or_else(|| YtSumError::InvalidPercentage(selection.percentage_index.to_string()))?;
    let percentage = Percentage::from_label(&label)?;

    let algorithm = Algorithm::from_position(selection.algorithm_index)
        .ok_or(YtSumError::InvalidAlgorithm(selection.algorithm_index))?;

    Ok(SummaryRequest::new(video, percentage, algorithm))
}
