use crate::config::Affordances;
use crate::core::{DownloadRecord, SummaryOutcome, SummaryPayload, SummaryRequest};
use serde::Serialize;

/// Body shown when there is no summary to render
pub const FAILED_BODY: &str = "We failed due to above reason.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Justified,
    Centered,
}

/// What the result view should show after one outcome. Download visibility
/// depends on the whole session, not on one outcome, see `Session::view`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInstruction {
    /// Diagnostic shown in the status region, whatever the outcome
    pub status: String,
    pub body: String,
    pub alignment: Alignment,
    pub retry_visible: bool,
}

/// Render an outcome. Depends on nothing but its inputs.
pub fn render(outcome: &SummaryOutcome, affordances: Affordances) -> RenderInstruction {
    match outcome {
        SummaryOutcome::Success { message, payload } => RenderInstruction {
            status: message.clone(),
            body: summary_body(payload),
            alignment: Alignment::Justified,
            retry_visible: affordances.try_again,
        },
        SummaryOutcome::Failure { message } | SummaryOutcome::TransportError { message } => {
            RenderInstruction {
                status: message.clone(),
                body: FAILED_BODY.to_string(),
                alignment: Alignment::Centered,
                retry_visible: affordances.try_again,
            }
        }
    }
}

/// Render an outcome and record it for download when it succeeded.
/// Failures leave the record untouched.
pub fn present(
    outcome: &SummaryOutcome,
    request: &SummaryRequest,
    record: &mut DownloadRecord,
    affordances: Affordances,
) -> RenderInstruction {
    if let SummaryOutcome::Success { payload, .. } = outcome {
        record.update(request, payload);
    }
    render(outcome, affordances)
}

fn summary_body(payload: &SummaryPayload) -> String {
    let mut body = format!("Processed Summary: {}\n\n", payload.summary);

    match (payload.original_sentences, payload.summary_sentences) {
        (Some(original), Some(summary)) => {
            body.push_str(&format!(
                "In your video, there are {} characters in {} sentences.\n",
                payload.original_length, original
            ));
            body.push_str(&format!(
                "The processed summary has {} characters in {} sentences.",
                payload.summary_length, summary
            ));
        }
        _ => {
            body.push_str(&format!(
                "Characters in Original Transcript: {}\n",
                payload.original_length
            ));
            body.push_str(&format!("Characters in Summary: {}", payload.summary_length));
        }
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::NETWORK_ISSUE_MESSAGE;
    use crate::core::{Algorithm, Percentage, VideoReference};

    fn request() -> SummaryRequest {
        SummaryRequest::new(
            VideoReference::new("abc12345678").unwrap(),
            Percentage::new(20).unwrap(),
            Algorithm::SumyLsa,
        )
    }

    fn success() -> SummaryOutcome {
        SummaryOutcome::Success {
            message: "ok".to_string(),
            payload: SummaryPayload::new("Short text.".to_string(), 500, 100),
        }
    }

    #[test]
    fn test_render_success() {
        let render = render(&success(), Affordances::default());
        assert_eq!(render.status, "ok");
        assert!(render.body.contains("Short text."));
        assert!(render.body.contains("500"));
        assert!(render.body.contains("100"));
        assert_eq!(render.alignment, Alignment::Justified);
        assert!(render.retry_visible);
    }

    #[test]
    fn test_render_success_with_sentences() {
        let outcome = SummaryOutcome::Success {
            message: "ok".to_string(),
            payload: SummaryPayload::new("Short text.".to_string(), 500, 100).with_sentences(12, 3),
        };
        let render = render(&outcome, Affordances::default());
        assert!(render.body.contains("500 characters in 12 sentences"));
        assert!(render.body.contains("100 characters in 3 sentences"));
    }

    #[test]
    fn test_render_failure_and_transport_error() {
        let failure = render(
            &SummaryOutcome::Failure {
                message: "Transcript unavailable".to_string(),
            },
            Affordances::default(),
        );
        assert_eq!(failure.status, "Transcript unavailable");
        assert_eq!(failure.body, FAILED_BODY);
        assert_eq!(failure.alignment, Alignment::Centered);
        assert!(failure.retry_visible);

        let transport = render(
            &SummaryOutcome::TransportError {
                message: NETWORK_ISSUE_MESSAGE.to_string(),
            },
            Affordances::default(),
        );
        assert_eq!(transport.status, NETWORK_ISSUE_MESSAGE);
        assert_eq!(transport.body, FAILED_BODY);
    }

    #[test]
    fn test_render_respects_affordances() {
        let affordances = Affordances {
            download: false,
            try_again: false,
        };
        let render = render(&success(), affordances);
        assert!(!render.retry_visible);
    }

    #[test]
    fn test_present_is_idempotent() {
        let mut record = DownloadRecord::default();
        let first = present(&success(), &request(), &mut record, Affordances::default());
        let after_first = record.clone();
        let second = present(&success(), &request(), &mut record, Affordances::default());
        assert_eq!(first, second);
        assert_eq!(record, after_first);
    }

    #[test]
    fn test_present_updates_record_only_on_success() {
        let mut record = DownloadRecord::default();
        present(&success(), &request(), &mut record, Affordances::default());
        assert_eq!(record.video_algo, "sumy_lsa_sum");
        let before = record.clone();

        let failure = SummaryOutcome::Failure {
            message: "Transcript unavailable".to_string(),
        };
        present(&failure, &request(), &mut record, Affordances::default());
        assert_eq!(record, before);

        let transport = SummaryOutcome::TransportError {
            message: NETWORK_ISSUE_MESSAGE.to_string(),
        };
        present(&transport, &request(), &mut record, Affordances::default());
        assert_eq!(record, before);
    }
}
