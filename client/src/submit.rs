//! Posts validated submissions to the configured endpoint.

use gloo_net::http::Request;

use site::error::SubmitError;
use site::form::Submission;

/// `POST` the submission as JSON. Any 2xx counts as accepted.
///
/// # Errors
///
/// [`SubmitError::Transport`] when the request cannot be built or sent,
/// [`SubmitError::Rejected`] for a non-success status.
pub async fn post_submission(url: &str, submission: &Submission) -> Result<(), SubmitError> {
    let response = Request::post(url)
        .json(submission)
        .map_err(|e| SubmitError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    if response.ok() {
        log::debug!("{} submission accepted ({})", submission.kind, response.status());
        Ok(())
    } else {
        Err(SubmitError::Rejected { status: response.status() })
    }
}
