//! Worker-style request/response service
//!
//! Wraps the solve driver in a background thread behind a two-phase
//! protocol: `spawn` returns a `PendingWorker` that cannot accept
//! requests; once the dictionary has loaded and the worker signals
//! readiness, `wait_ready` consumes it into a `WorkerHandle` that can.
//! The type split replaces the original reassignable message callbacks —
//! a request simply cannot be sent before the ready signal.
//!
//! Each request runs one complete solve with its own constraint and
//! candidate set and yields exactly one reply; the dictionary is the only
//! state shared across requests.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::dictionary::{Dictionary, LoadError};
use crate::solver::{RejectReason, SolveConfig, SolveOutcome, solve};

/// One solve request from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub hard_mode: bool,
    pub be_cheaty: bool,
    pub target: String,
}

/// The single reply to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveReply {
    /// Ranked guess history, best-effort; `solved` is false when the guess
    /// budget ran out first
    Suggestions { words: Vec<String>, solved: bool },
    /// The documented falsy response: target not in the dictionary
    NotRecognized,
    /// Internal invariant violation, surfaced rather than swallowed
    Failed(String),
}

/// Failure of the service itself, as opposed to a solve outcome
#[derive(Debug)]
pub enum ServiceError {
    /// The dictionary failed to load; the worker never became ready
    Load(LoadError),
    /// The worker thread is gone
    Disconnected,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(err) => write!(f, "worker failed to initialize: {err}"),
            Self::Disconnected => write!(f, "worker disconnected"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            Self::Disconnected => None,
        }
    }
}

/// A spawned worker that has not signalled readiness yet
///
/// No request can be sent through this type; call
/// [`PendingWorker::wait_ready`] to obtain a [`WorkerHandle`].
pub struct PendingWorker {
    ready_rx: Receiver<Result<(), LoadError>>,
    requests: Sender<SolveRequest>,
    replies: Receiver<SolveReply>,
    handle: JoinHandle<()>,
}

/// A ready worker accepting solve requests
pub struct WorkerHandle {
    requests: Sender<SolveRequest>,
    replies: Receiver<SolveReply>,
    handle: JoinHandle<()>,
}

/// Spawn a worker that loads the embedded dictionary
#[must_use]
pub fn spawn() -> PendingWorker {
    spawn_with(Dictionary::embedded)
}

/// Spawn a worker with a custom dictionary loader
///
/// The loader runs on the worker thread; its result decides the ready
/// signal.
pub fn spawn_with<F>(load: F) -> PendingWorker
where
    F: FnOnce() -> Result<Dictionary, LoadError> + Send + 'static,
{
    let (ready_tx, ready_rx) = mpsc::channel();
    let (request_tx, request_rx) = mpsc::channel::<SolveRequest>();
    let (reply_tx, reply_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        let dict = match load() {
            Ok(dict) => {
                let _ = ready_tx.send(Ok(()));
                dict
            }
            Err(err) => {
                let _ = ready_tx.send(Err(err));
                return;
            }
        };

        while let Ok(request) = request_rx.recv() {
            if reply_tx.send(handle_request(&dict, &request)).is_err() {
                break;
            }
        }
    });

    PendingWorker {
        ready_rx,
        requests: request_tx,
        replies: reply_rx,
        handle,
    }
}

impl PendingWorker {
    /// Block until the worker signals readiness
    ///
    /// # Errors
    /// Returns `ServiceError::Load` if the dictionary failed to load, or
    /// `ServiceError::Disconnected` if the worker died before signalling.
    pub fn wait_ready(self) -> Result<WorkerHandle, ServiceError> {
        match self.ready_rx.recv() {
            Ok(Ok(())) => Ok(WorkerHandle {
                requests: self.requests,
                replies: self.replies,
                handle: self.handle,
            }),
            Ok(Err(err)) => {
                let _ = self.handle.join();
                Err(ServiceError::Load(err))
            }
            Err(_) => Err(ServiceError::Disconnected),
        }
    }
}

impl WorkerHandle {
    /// Run one solve on the worker and wait for its single reply
    ///
    /// Requests on one handle are serialized: one request, one reply, in
    /// order.
    ///
    /// # Errors
    /// Returns `ServiceError::Disconnected` if the worker thread is gone.
    pub fn solve(&self, request: SolveRequest) -> Result<SolveReply, ServiceError> {
        self.requests
            .send(request)
            .map_err(|_| ServiceError::Disconnected)?;
        self.replies.recv().map_err(|_| ServiceError::Disconnected)
    }

    /// Stop the worker and wait for it to exit
    pub fn shutdown(self) {
        drop(self.requests);
        let _ = self.handle.join();
    }
}

fn handle_request(dict: &Dictionary, request: &SolveRequest) -> SolveReply {
    let config = SolveConfig {
        hard_mode: request.hard_mode,
        be_cheaty: request.be_cheaty,
        ..SolveConfig::default()
    };

    match solve(dict, &config, &request.target) {
        outcome @ SolveOutcome::Solved { .. } => SolveReply::Suggestions {
            words: outcome.guessed_words(),
            solved: true,
        },
        outcome @ SolveOutcome::Exhausted { .. } => SolveReply::Suggestions {
            words: outcome.guessed_words(),
            solved: false,
        },
        SolveOutcome::Rejected {
            reason: RejectReason::NotRecognized,
            ..
        } => SolveReply::NotRecognized,
        SolveOutcome::Rejected { reason, .. } => SolveReply::Failed(reason.to_string()),
    }
}
