use crate::artifact::Artifact;
use crate::client::Summarizer;
use crate::config::Affordances;
use crate::core::{DownloadRecord, SummaryOutcome, SummaryRequest};
use crate::error::{Result, YtSumError};
use crate::presenter::{Alignment, RenderInstruction, present};
use crate::request;
use crate::selection::Selection;
use tracing::debug;

/// Alert shown when the URL cannot be resolved to a video
pub const INVALID_URL_ALERT: &str = "Your YouTube video URL is invalid. Please retry.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Selecting,
    InFlight,
    Presented,
}

/// Snapshot of everything the front-end displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub selection_visible: bool,
    pub result_visible: bool,
    pub trigger_enabled: bool,
    pub retry_visible: bool,
    pub download_visible: bool,
    pub status: Option<String>,
    pub body: Option<String>,
    pub alignment: Option<Alignment>,
}

/// Owns the selection, the in-flight flag, the view state and the download
/// record. A submission is split into [`Session::begin`] and
/// [`Session::finish`] so the in-flight state is observable between them.
#[derive(Debug, Clone)]
pub struct Session {
    affordances: Affordances,
    selection: Selection,
    phase: Phase,
    pending: Option<SummaryRequest>,
    last_render: Option<RenderInstruction>,
    record: DownloadRecord,
}

impl Session {
    pub fn new(affordances: Affordances) -> Self {
        Self {
            affordances,
            selection: Selection::default(),
            phase: Phase::Selecting,
            pending: None,
            last_render: None,
            record: DownloadRecord::default(),
        }
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.selection.url = url.into();
    }

    pub fn set_percentage(&mut self, index: usize) {
        self.selection.percentage_index = index;
    }

    pub fn set_algorithm(&mut self, index: usize) {
        self.selection.algorithm_index = index;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn record(&self) -> &DownloadRecord {
        &self.record
    }

    /// The trigger is enabled when the selection is ready and nothing is in flight
    pub fn trigger_enabled(&self) -> bool {
        self.phase != Phase::InFlight && self.selection.is_ready()
    }

    pub fn view(&self) -> ViewState {
        let selection_visible = self.phase == Phase::Selecting;
        let render = self.last_render.as_ref().filter(|_| !selection_visible);

        ViewState {
            selection_visible,
            result_visible: !selection_visible,
            trigger_enabled: self.trigger_enabled(),
            retry_visible: render.is_some_and(|r| r.retry_visible),
            download_visible: self.affordances.download && !self.record.is_empty(),
            status: render.map(|r| r.status.clone()),
            body: render.map(|r| r.body.clone()),
            alignment: render.map(|r| r.alignment),
        }
    }

    /// Validate, build the request and switch to the result view.
    ///
    /// On an unresolvable URL the URL field is cleared and
    /// [`YtSumError::InvalidUrl`] is returned; the view does not change.
    pub fn begin(&mut self) -> Result<SummaryRequest> {
        if self.phase == Phase::InFlight {
            return Err(YtSumError::RequestInFlight);
        }

        let request = match request::build(&self.selection) {
            Ok(request) => request,
            Err(e @ YtSumError::InvalidUrl(_)) => {
                debug!(url = %self.selection.url, "rejected unresolvable URL");
                self.selection.url.clear();
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        debug!(video = %request.video(), "switching to result view");
        self.phase = Phase::InFlight;
        self.last_render = None;
        self.pending = Some(request.clone());
        Ok(request)
    }

    /// Present the outcome of the pending request and re-enable the trigger
    pub fn finish(&mut self, outcome: SummaryOutcome) -> Result<RenderInstruction> {
        let request = self.pending.take().ok_or(YtSumError::NoPendingRequest)?;

        let render = present(&outcome, &request, &mut self.record, self.affordances);
        self.phase = Phase::Presented;
        self.last_render = Some(render.clone());
        Ok(render)
    }

    /// Run one full submission against `summarizer`
    pub async fn submit<S>(&mut self, summarizer: &S) -> Result<RenderInstruction>
    where
        S: Summarizer + ?Sized,
    {
        let request = self.begin()?;
        let outcome = summarizer.submit(&request).await;
        self.finish(outcome)
    }

    /// Go back to the selection view, keeping the current selection
    pub fn try_again(&mut self) -> Result<()> {
        if self.phase == Phase::InFlight {
            return Err(YtSumError::RequestInFlight);
        }
        self.phase = Phase::Selecting;
        Ok(())
    }

    /// Build the download artifact from the last successful result
    pub fn download(&self) -> Result<Artifact> {
        if !self.affordances.download {
            return Err(YtSumError::DownloadDisabled);
        }
        if self.record.is_empty() {
            return Err(YtSumError::NoDownloadAvailable);
        }
        Ok(Artifact::build(&self.record))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Affordances::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::NETWORK_ISSUE_MESSAGE;
    use crate::core::SummaryPayload;
    use crate::presenter::FAILED_BODY;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays canned outcomes and remembers what it was asked
    struct FakeSummarizer {
        outcome: SummaryOutcome,
        seen: Mutex<Vec<SummaryRequest>>,
    }

    impl FakeSummarizer {
        fn new(outcome: SummaryOutcome) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Summarizer for FakeSummarizer {
        async fn submit(&self, request: &SummaryRequest) -> SummaryOutcome {
            self.seen.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    fn success(summary: &str) -> SummaryOutcome {
        SummaryOutcome::Success {
            message: "ok".to_string(),
            payload: SummaryPayload::new(summary.to_string(), 500, 100),
        }
    }

    fn ready_session() -> Session {
        let mut session = Session::default();
        session.set_url("https://youtu.be/abc12345678");
        session.set_percentage(4);
        session.set_algorithm(4);
        session
    }

    #[test]
    fn test_trigger_gating() {
        let mut session = Session::default();
        assert!(!session.view().trigger_enabled);

        session.set_url("https://youtu.be/abc12345678");
        assert!(!session.view().trigger_enabled);
        session.set_percentage(4);
        assert!(!session.view().trigger_enabled);
        session.set_algorithm(2);
        assert!(session.view().trigger_enabled);

        session.set_percentage(0);
        assert!(!session.view().trigger_enabled);
    }

    #[test]
    fn test_begin_rejects_partial_selection() {
        // Regression guard: one valid input must not be enough at submission
        let mut session = Session::default();
        session.set_url("https://youtu.be/abc12345678");
        assert!(matches!(
            session.begin(),
            Err(YtSumError::SelectionIncomplete)
        ));
        assert_eq!(session.phase(), Phase::Selecting);
    }

    #[test]
    fn test_begin_invalid_url_clears_field() {
        let mut session = ready_session();
        session.set_url("https://example.com/video");
        assert!(matches!(session.begin(), Err(YtSumError::InvalidUrl(_))));
        assert_eq!(session.selection().url, "");
        assert!(session.view().selection_visible);
        assert!(!session.view().trigger_enabled);
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut session = ready_session();
        session.begin().unwrap();

        let view = session.view();
        assert!(!view.selection_visible);
        assert!(view.result_visible);
        assert!(!view.trigger_enabled);
        assert!(matches!(session.begin(), Err(YtSumError::RequestInFlight)));
        assert!(matches!(session.try_again(), Err(YtSumError::RequestInFlight)));

        session.finish(success("Short text.")).unwrap();
        assert_eq!(session.phase(), Phase::Presented);
        assert!(session.view().trigger_enabled);
    }

    #[test]
    fn test_finish_without_begin() {
        let mut session = ready_session();
        assert!(matches!(
            session.finish(success("x")),
            Err(YtSumError::NoPendingRequest)
        ));
    }

    #[tokio::test]
    async fn test_submit_success_updates_record() {
        let mut session = ready_session();
        let fake = FakeSummarizer::new(success("Short text."));

        let render = session.submit(&fake).await.unwrap();
        assert!(render.body.contains("Short text."));
        assert_eq!(fake.seen.lock().unwrap().len(), 1);

        let view = session.view();
        assert!(view.result_visible);
        assert!(view.retry_visible);
        assert!(view.download_visible);
        assert_eq!(view.status.as_deref(), Some("ok"));
        assert_eq!(view.alignment, Some(Alignment::Justified));

        assert_eq!(session.record().video_algo, "sumy_lsa_sum");
        let artifact = session.download().unwrap();
        assert_eq!(artifact.filename, "script_abc12345678_sumy_lsa_sum_20.txt");
    }

    #[tokio::test]
    async fn test_failure_keeps_last_known_good() {
        let mut session = ready_session();
        session
            .submit(&FakeSummarizer::new(success("First.")))
            .await
            .unwrap();
        let record = session.record().clone();

        session.try_again().unwrap();
        session.set_algorithm(1);
        let failure = FakeSummarizer::new(SummaryOutcome::Failure {
            message: "Transcript unavailable".to_string(),
        });
        let render = session.submit(&failure).await.unwrap();
        assert_eq!(render.status, "Transcript unavailable");
        assert_eq!(render.body, FAILED_BODY);
        assert_eq!(session.record(), &record);

        let transport = FakeSummarizer::new(SummaryOutcome::TransportError {
            message: NETWORK_ISSUE_MESSAGE.to_string(),
        });
        session.try_again().unwrap();
        let render = session.submit(&transport).await.unwrap();
        assert_eq!(render.status, NETWORK_ISSUE_MESSAGE);
        assert_eq!(session.record(), &record);

        assert!(session.view().download_visible);
        assert_eq!(session.download().unwrap().text(), "First.");
    }

    #[tokio::test]
    async fn test_download_stays_available_after_failure() {
        let mut session = ready_session();
        session
            .submit(&FakeSummarizer::new(success("First.")))
            .await
            .unwrap();
        session.try_again().unwrap();

        let failure = FakeSummarizer::new(SummaryOutcome::Failure {
            message: "Transcript unavailable".to_string(),
        });
        let render = session.submit(&failure).await.unwrap();
        assert_eq!(render.alignment, Alignment::Centered);

        let view = session.view();
        assert!(view.download_visible);
        assert_eq!(view.download_visible, session.download().is_ok());
        assert_eq!(session.download().unwrap().text(), "First.");
    }

    #[tokio::test]
    async fn test_try_again_returns_to_selection() {
        let mut session = ready_session();
        session
            .submit(&FakeSummarizer::new(success("x")))
            .await
            .unwrap();

        session.try_again().unwrap();
        let view = session.view();
        assert!(view.selection_visible);
        assert!(!view.result_visible);
        assert!(!view.retry_visible);
        assert_eq!(view.status, None);
        assert!(view.trigger_enabled);
        assert_eq!(session.selection().percentage_index, 4);
    }

    #[test]
    fn test_download_guards() {
        let session = Session::default();
        assert!(matches!(
            session.download(),
            Err(YtSumError::NoDownloadAvailable)
        ));

        let legacy = Session::new(Affordances {
            download: false,
            try_again: false,
        });
        assert!(matches!(
            legacy.download(),
            Err(YtSumError::DownloadDisabled)
        ));
    }

    #[tokio::test]
    async fn test_legacy_affordances_hide_retry_and_download() {
        let mut session = Session::new(Affordances {
            download: false,
            try_again: false,
        });
        session.set_url("https://youtu.be/abc12345678");
        session.set_percentage(4);
        session.set_algorithm(4);

        session
            .submit(&FakeSummarizer::new(success("x")))
            .await
            .unwrap();
        let view = session.view();
        assert!(!view.retry_visible);
        assert!(!view.download_visible);
        assert_eq!(session.record().script, "x");
    }
}
