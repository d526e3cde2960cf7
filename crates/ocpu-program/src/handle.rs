//! Future-style handle for computations running on a worker thread.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use crate::error::ProgramError;
use crate::solution::Solution;

pub const CANCELLED_MESSAGE: &str = "The computation was cancelled.";

enum State {
    Running(JoinHandle<Result<Solution, ProgramError>>),
    Failed(ProgramError),
    /// The output has been handed out.
    Taken,
}

/// Resolves to the result of [`RpcProgram::compute_async`](crate::RpcProgram::compute_async).
///
/// A blocking HTTP call already on the wire cannot be interrupted; after
/// [`cancel`](Self::cancel) its result is discarded and the handle resolves to
/// a cancellation error. Like any future, it must not be polled again once it
/// has resolved.
pub struct ComputeHandle {
    state: State,
}

impl ComputeHandle {
    pub(crate) fn spawned(task: JoinHandle<Result<Solution, ProgramError>>) -> Self {
        Self {
            state: State::Running(task),
        }
    }

    pub(crate) fn failed(err: ProgramError) -> Self {
        Self {
            state: State::Failed(err),
        }
    }

    /// Abandon the computation. Prevents it from starting if it is still
    /// queued.
    pub fn cancel(&mut self) {
        if let State::Running(task) = &self.state {
            task.abort();
            self.state = State::Failed(ProgramError::new(CANCELLED_MESSAGE));
        }
    }

    /// `true` once awaiting the handle would not block.
    pub fn is_finished(&self) -> bool {
        match &self.state {
            State::Running(task) => task.is_finished(),
            State::Failed(_) | State::Taken => true,
        }
    }
}

impl Future for ComputeHandle {
    type Output = Result<Solution, ProgramError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match std::mem::replace(&mut self.state, State::Taken) {
            State::Running(mut task) => match Pin::new(&mut task).poll(cx) {
                Poll::Pending => {
                    self.state = State::Running(task);
                    Poll::Pending
                }
                Poll::Ready(Ok(result)) => Poll::Ready(result),
                Poll::Ready(Err(e)) if e.is_cancelled() => {
                    Poll::Ready(Err(ProgramError::new(CANCELLED_MESSAGE)))
                }
                Poll::Ready(Err(e)) => Poll::Ready(Err(ProgramError::new(format!(
                    "The computation panicked: {e}"
                )))),
            },
            State::Failed(err) => Poll::Ready(Err(err)),
            State::Taken => panic!("ComputeHandle polled after completion"),
        }
    }
}

impl std::fmt::Debug for ComputeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputeHandle")
            .field("finished", &self.is_finished())
            .finish()
    }
}
