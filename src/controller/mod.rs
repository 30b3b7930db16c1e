// ABOUTME: Job lifecycle controller driving submission and progress polling
// ABOUTME: Owns the single active job reference and the poll ticker

use std::time::Duration;

use crate::error::PanelError;
use crate::remote::models::{STATUS_DONE, STATUS_ERROR};
use crate::remote::{JobApi, JobRequest};
use crate::view::PanelView;

/// Default polling cadence, matching the panel page's 1-second timer.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Label shown while the creation request is in flight and no progress
/// has been reported yet.
const SUBMIT_LABEL: &str = "starting...";

const GENERIC_NETWORK_ERROR: &str = "A network error occurred while starting the job";
const UNKNOWN_JOB_ERROR: &str = "unknown";

/// Lifecycle states of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Confirming,
    Submitting,
    Polling,
    Done,
    Errored,
}

/// Result of a single poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Keep polling; the snapshot (if any) was pending-like or the
    /// response was ignored.
    Continue,
    /// Terminal: the job reported done or error, or no job is active.
    Finished,
}

/// Drives one job from confirmation through submission and polling to
/// completion.
///
/// Holds at most one active job reference; the poll ticker exists only
/// inside [`run_poll_loop`](Self::run_poll_loop) while the state is
/// [`State::Polling`], so a stale ticker can never outlive its job.
/// Starting a new job abandons any residual reference first. The
/// server-side job, if any, continues independently once polling stops;
/// there is no client-side cancellation.
pub struct JobController<A, V> {
    api: A,
    view: V,
    state: State,
    current_job: Option<String>,
    poll_interval: Duration,
}

impl<A: JobApi, V: PanelView> JobController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            state: State::Idle,
            current_job: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the poll cadence. The panel contract is one second;
    /// tests shorten it.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Identifier of the active job, if one exists.
    pub fn current_job(&self) -> Option<&str> {
        self.current_job.as_deref()
    }

    /// User asked to start a job: enter `Confirming` and reveal the
    /// prompt. Valid from any state; any residual job reference from a
    /// prior run is abandoned here (without cancelling server-side
    /// work), which also guarantees no second ticker can attach to it.
    pub fn start(&mut self) {
        self.current_job = None;
        self.state = State::Confirming;
        self.view.show_confirm();
    }

    /// User declined the confirmation prompt: back to `Idle`, no side
    /// effects.
    pub fn decline(&mut self) {
        if self.state == State::Confirming {
            self.view.hide_confirm();
            self.state = State::Idle;
        }
    }

    /// User confirmed: submit the creation request.
    ///
    /// On success the returned job identifier becomes the active
    /// reference and the state moves to `Polling`; drive it with
    /// [`run_poll_loop`](Self::run_poll_loop). On failure the
    /// progress display is hidden, the user is notified through the
    /// view, and the state reverts to `Idle`; the error is also
    /// returned for exit-code purposes, already surfaced to the user.
    pub async fn confirm(&mut self, request: JobRequest) -> Result<(), PanelError> {
        if self.state != State::Confirming {
            return Ok(());
        }

        self.view.hide_confirm();
        self.view.hide_done();
        self.view.show_progress(SUBMIT_LABEL);
        self.state = State::Submitting;

        let response = match self.api.create_job(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Job creation request failed");
                self.view.hide_progress();
                self.view.notify_error(GENERIC_NETWORK_ERROR);
                self.state = State::Idle;
                return Err(PanelError::Network(e.to_string()));
            }
        };

        // ok:true without a job identifier would leave nothing to poll;
        // treat it the same as an explicit rejection.
        let accepted = response.ok;
        match response.job_id {
            Some(job_id) if accepted => {
                tracing::info!(job_id = %job_id, "Job created, polling for progress");
                self.current_job = Some(job_id);
                self.state = State::Polling;
                Ok(())
            }
            _ => {
                let message = response
                    .error
                    .unwrap_or_else(|| UNKNOWN_JOB_ERROR.to_string());
                self.view.hide_progress();
                self.view
                    .notify_error(&format!("Failed to start job: {}", message));
                self.state = State::Idle;
                Err(PanelError::Submission(message))
            }
        }
    }

    /// Poll until the active job reaches `done` or `error`.
    ///
    /// The ticker lives on this stack frame, so it is dropped (and can
    /// never fire again) the moment a terminal transition happens.
    pub async fn run_poll_loop(&mut self) {
        if self.state != State::Polling {
            return;
        }

        let mut ticker = tokio::time::interval(self.poll_interval);
        loop {
            ticker.tick().await;
            if self.poll_once().await == PollOutcome::Finished {
                break;
            }
        }
    }

    /// One poll tick: query progress for the active job and update the
    /// view. Transport faults, unparseable bodies, and `ok:false`
    /// responses are suppressed so a transient blip never interrupts a
    /// healthy job.
    pub async fn poll_once(&mut self) -> PollOutcome {
        let job_id = match (&self.state, &self.current_job) {
            (State::Polling, Some(id)) => id.clone(),
            _ => return PollOutcome::Finished,
        };

        let response = match self.api.fetch_progress(&job_id).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(job_id = %job_id, error = %e, "Poll failed, retrying on next tick");
                return PollOutcome::Continue;
            }
        };
        if !response.ok {
            return PollOutcome::Continue;
        }
        let snapshot = match response.job {
            Some(snapshot) => snapshot,
            None => return PollOutcome::Continue,
        };

        // Render first; on a terminal status the bar and label keep
        // this last value.
        self.view.set_progress(snapshot.percent(), &snapshot.label());

        match snapshot.status() {
            STATUS_DONE => {
                tracing::info!(job_id = %job_id, "Job done");
                self.view.hide_progress();
                let url = self.api.download_url(&job_id);
                self.view.show_done(&url);
                self.state = State::Done;
                PollOutcome::Finished
            }
            STATUS_ERROR => {
                let message = snapshot.error.as_deref().unwrap_or(UNKNOWN_JOB_ERROR);
                tracing::warn!(job_id = %job_id, error = message, "Job failed");
                self.view.notify_error(&format!("Job failed: {}", message));
                self.view.hide_progress();
                self.current_job = None;
                self.state = State::Errored;
                PollOutcome::Finished
            }
            _ => PollOutcome::Continue,
        }
    }
}
