//! Interactive shortening flow.
//!
//! [`ShorteningFlow`] is the state owned by a front-end view: the current
//! input, the state machine from [`crate::domain::flow_state`], the single
//! result slot and the "copied" indicator. It adds two guarantees on top of
//! [`ShortenService`]:
//!
//! - only one submission is pending at a time; a second one gets
//!   [`FlowError::Busy`]
//! - a pending submission is abandoned when the input is edited or
//!   [`ShorteningFlow::cancel`] is called, and never writes a stale result
//!
//! All state lives behind a synchronous mutex that is never held across an
//! `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::application::services::ShortenService;
use crate::domain::entities::{Notification, ShortenRequest, ShortenResult};
use crate::domain::errors::ShortenError;
use crate::domain::flow_state::{FlowSnapshot, FlowState};
use crate::domain::ports::{Clipboard, ClipboardError, Notifier};

/// How long the "copied" indicator stays on after a successful copy.
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Errors returned by flow operations.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Rejected(#[from] ShortenError),

    #[error("A shortening request is already in progress")]
    Busy,

    #[error("The request was abandoned because the input changed")]
    Cancelled,

    #[error("There is no short URL to copy yet")]
    NothingToCopy,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

#[derive(Debug, Default)]
struct FlowInner {
    input: String,
    state: FlowState,
    last_result: Option<ShortenResult>,
    copied_until: Option<Instant>,
    /// Incremented on every accepted submission; a completion only lands if
    /// its ticket is still current.
    ticket: u64,
}

/// View-layer state machine around [`ShortenService`].
pub struct ShorteningFlow {
    service: Arc<ShortenService>,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
    copy_feedback: Duration,
    inner: Mutex<FlowInner>,
    edits: watch::Sender<u64>,
}

impl ShorteningFlow {
    /// Creates an idle flow with empty input.
    pub fn new(
        service: Arc<ShortenService>,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (edits, _) = watch::channel(0);

        Self {
            service,
            clipboard,
            notifier,
            copy_feedback: DEFAULT_COPY_FEEDBACK,
            inner: Mutex::new(FlowInner::default()),
            edits,
        }
    }

    /// Overrides how long [`Self::is_copied`] stays true after a copy.
    pub fn with_copy_feedback(mut self, copy_feedback: Duration) -> Self {
        self.copy_feedback = copy_feedback;
        self
    }

    fn lock(&self) -> MutexGuard<'_, FlowInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the input text.
    ///
    /// Returns the flow to `Idle`. A pending submission is abandoned; the
    /// previous result stays available until the next completion.
    pub fn set_input(&self, input: impl Into<String>) {
        let mut inner = self.lock();
        inner.input = input.into();

        if inner.state.is_submitting() {
            tracing::debug!(ticket = inner.ticket, "Pending shortening abandoned after edit");
        }
        inner.state = FlowState::Idle;

        self.edits.send_modify(|revision| *revision += 1);
    }

    /// Abandons the pending submission, if any.
    ///
    /// Returns true if a submission was pending.
    pub fn cancel(&self) -> bool {
        let mut inner = self.lock();
        if !inner.state.is_submitting() {
            return false;
        }

        inner.state = FlowState::Idle;
        self.edits.send_modify(|revision| *revision += 1);
        tracing::debug!(ticket = inner.ticket, "Pending shortening cancelled");

        true
    }

    /// Submits the current input.
    ///
    /// Validation failures move the flow to `Failed` immediately and emit a
    /// destructive notification. Accepted input moves it to `Submitting` until
    /// the service completes, then to `Success` with a success notification.
    ///
    /// # Errors
    ///
    /// - [`FlowError::Rejected`] if the input is empty or not a valid URL
    /// - [`FlowError::Busy`] if another submission is pending
    /// - [`FlowError::Cancelled`] if the input changed before completion
    pub async fn submit(&self) -> Result<ShortenResult, FlowError> {
        let (request, ticket, mut edits) = {
            let mut inner = self.lock();

            if inner.state.is_submitting() {
                return Err(FlowError::Busy);
            }

            let request = ShortenRequest::new(inner.input.clone());
            if let Err(err) = self.service.check(&request) {
                inner.state = FlowState::Failed(err.kind());
                drop(inner);
                return Err(self.reject(err));
            }

            inner.ticket += 1;
            inner.state = FlowState::Submitting;

            (request, inner.ticket, self.edits.subscribe())
        };

        let _pending = PendingGuard { flow: self, ticket };

        let outcome = tokio::select! {
            outcome = self.service.shorten(request) => outcome,
            _ = edits.changed() => return Err(FlowError::Cancelled),
        };

        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                let mut inner = self.lock();
                if inner.ticket == ticket {
                    inner.state = FlowState::Failed(err.kind());
                }
                drop(inner);
                return Err(self.reject(err));
            }
        };

        {
            let mut inner = self.lock();
            if inner.ticket != ticket || !inner.state.is_submitting() {
                return Err(FlowError::Cancelled);
            }

            inner.state = FlowState::Success(result.clone());
            inner.last_result = Some(result.clone());
            inner.copied_until = None;
        }

        tracing::info!(short_url = %result.short_url, "URL shortened");
        self.notifier.notify(Notification::shortened());

        Ok(result)
    }

    fn reject(&self, err: ShortenError) -> FlowError {
        tracing::info!(reason = %err, "Shortening request rejected");
        self.notifier.notify(Notification::rejected(&err));
        FlowError::Rejected(err)
    }

    /// Copies the most recent short URL through the clipboard port.
    ///
    /// # Errors
    ///
    /// - [`FlowError::NothingToCopy`] if no submission has completed yet
    /// - [`FlowError::Clipboard`] if the clipboard write fails; a destructive
    ///   notification is emitted as well
    ///
    /// The "copied" indicator only turns on if the copied link is still the
    /// current result once the write finishes.
    pub async fn copy_to_clipboard(&self) -> Result<(), FlowError> {
        let short_url = self
            .lock()
            .last_result
            .as_ref()
            .map(|result| result.short_url.clone())
            .ok_or(FlowError::NothingToCopy)?;

        match self.clipboard.write_text(&short_url).await {
            Ok(()) => {
                let mut inner = self.lock();
                let still_current = inner
                    .last_result
                    .as_ref()
                    .is_some_and(|result| result.short_url == short_url);

                if still_current {
                    inner.copied_until = Some(Instant::now() + self.copy_feedback);
                } else {
                    tracing::debug!(%short_url, "Result replaced during copy, indicator left off");
                }
                drop(inner);

                self.notifier.notify(Notification::copied());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to copy short URL");
                self.notifier.notify(Notification::copy_failed());
                Err(err.into())
            }
        }
    }

    pub fn input(&self) -> String {
        self.lock().input.clone()
    }

    pub fn state(&self) -> FlowState {
        self.lock().state.clone()
    }

    pub fn last_result(&self) -> Option<ShortenResult> {
        self.lock().last_result.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.lock().state.is_submitting()
    }

    /// Returns true while the "copied" indicator should be shown.
    pub fn is_copied(&self) -> bool {
        self.lock()
            .copied_until
            .is_some_and(|until| Instant::now() < until)
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        let inner = self.lock();
        let now = Instant::now();

        FlowSnapshot {
            input: inner.input.clone(),
            state: inner.state.clone(),
            last_result: inner.last_result.clone(),
            copied: inner.copied_until.is_some_and(|until| now < until),
            busy: inner.state.is_submitting(),
        }
    }
}

/// Returns the flow to `Idle` if a submission ends without settling its state,
/// e.g. when the `submit` future is dropped mid-flight.
struct PendingGuard<'a> {
    flow: &'a ShorteningFlow,
    ticket: u64,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.flow.lock();
        if inner.ticket == self.ticket && inner.state.is_submitting() {
            inner.state = FlowState::Idle;
        }
    }
}
