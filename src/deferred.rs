//! Deferred delivery of distance results.
//!
//! The distance itself is always computed synchronously. This module only
//! decides *when* a caller sees the result: work is submitted to a host
//! scheduler and the completion handler runs after the submitting call has
//! returned, exactly once, with the same value the synchronous call would
//! have produced.
//!
//! Every scheduled task is held behind a release gate that the scheduling
//! call opens only once [`Scheduler::submit`] has returned, so even a
//! scheduler backed by other threads cannot start the handler early.

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use log::debug;
use tokio::runtime::Handle;

use crate::distance::{DistanceEngine, Weight};
use crate::error::{EditDistanceError, Result};

/// A zero-argument unit of work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run tasks later.
///
/// `submit` must never run the task on the caller's stack, and must return an
/// error when it cannot promise the task will run.
pub trait Scheduler {
    fn submit(&self, task: Task) -> Result<()>;
}

/// An explicit ready queue drained by the host, one turn at a time.
///
/// Tasks run in submission order when [`ReadyQueue::run_pending`] is called.
pub struct ReadyQueue {
    sender: Sender<Task>,
    receiver: Receiver<Task>,
}

impl Default for ReadyQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadyQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        ReadyQueue { sender, receiver }
    }

    /// Number of tasks waiting for the next turn.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Run one turn: every task queued before this call, in FIFO order.
    ///
    /// Tasks submitted while the turn is running wait for the next turn.
    /// Returns the number of tasks run.
    pub fn run_pending(&self) -> usize {
        let queued = self.receiver.len();
        let mut ran = 0;
        for _ in 0..queued {
            match self.receiver.try_recv() {
                Ok(task) => {
                    task();
                    ran += 1;
                }
                Err(_) => break,
            }
        }
        ran
    }
}

impl Scheduler for ReadyQueue {
    fn submit(&self, task: Task) -> Result<()> {
        self.sender
            .send(task)
            .map_err(|e| EditDistanceError::other(format!("Ready queue closed: {e}")))
    }
}

/// Runs tasks on a Tokio runtime's blocking pool.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        TokioScheduler { handle }
    }

    /// Use the runtime the caller is running on.
    pub fn current() -> Result<Self> {
        let handle = Handle::try_current()
            .map_err(|e| EditDistanceError::other(format!("No Tokio runtime: {e}")))?;
        Ok(Self::new(handle))
    }
}

impl Scheduler for TokioScheduler {
    fn submit(&self, task: Task) -> Result<()> {
        let (start, started) = bounded::<()>(1);
        let join = self.handle.spawn_blocking(move || {
            if started.recv().is_ok() {
                task();
            }
        });

        // The task cannot finish before `start` fires unless the runtime
        // cancelled it on spawn.
        if join.is_finished() {
            return Err(EditDistanceError::other(
                "Tokio runtime is shut down; task was not scheduled",
            ));
        }
        start.send(()).map_err(|_| {
            EditDistanceError::other("Tokio runtime dropped the task before it started")
        })
    }
}

/// Submit `work` so that it cannot start before this function has seen
/// `submit` return.
fn submit_gated<S, F>(scheduler: &S, work: F) -> Result<()>
where
    S: Scheduler + ?Sized,
    F: FnOnce() + Send + 'static,
{
    let (release, gate) = bounded::<()>(1);
    scheduler.submit(Box::new(move || {
        if gate.recv().is_ok() {
            work();
        }
    }))?;

    // A closed gate means the scheduler dropped the task unrun.
    release.send(()).map_err(|_| {
        EditDistanceError::other("Deferred task was dropped before it could run")
    })
}

/// Schedule the distance between two symbol sequences.
///
/// `on_complete(result, source, target)` is invoked once the scheduler runs
/// the task, never before `submit` has returned. An error means the handler
/// will not be called.
pub fn schedule_distance<S, T, W, F>(
    scheduler: &S,
    engine: &DistanceEngine<W>,
    source: Vec<T>,
    target: Vec<T>,
    on_complete: F,
) -> Result<()>
where
    S: Scheduler + ?Sized,
    T: PartialEq + Send + 'static,
    W: Weight,
    F: FnOnce(W, Vec<T>, Vec<T>) + Send + 'static,
{
    let engine = engine.clone();
    debug!(
        "Scheduling distance: source_len={} target_len={}",
        source.len(),
        target.len()
    );
    submit_gated(scheduler, move || {
        let result = engine.distance(&source, &target);
        on_complete(result, source, target);
    })
}

/// Schedule the distance between two strings, segmented per the engine's
/// symbol mode.
pub fn schedule_str_distance<S, W, F>(
    scheduler: &S,
    engine: &DistanceEngine<W>,
    source: String,
    target: String,
    on_complete: F,
) -> Result<()>
where
    S: Scheduler + ?Sized,
    W: Weight,
    F: FnOnce(W, String, String) + Send + 'static,
{
    let engine = engine.clone();
    submit_gated(scheduler, move || {
        let result = engine.distance_str(&source, &target);
        on_complete(result, source, target);
    })
}

/// Compute a string distance on Tokio's blocking pool.
pub async fn distance_async<W: Weight>(
    engine: &DistanceEngine<W>,
    source: String,
    target: String,
) -> Result<W> {
    let engine = engine.clone();
    tokio::task::spawn_blocking(move || engine.distance_str(&source, &target))
        .await
        .map_err(|e| EditDistanceError::task_join(e.to_string()))
}
