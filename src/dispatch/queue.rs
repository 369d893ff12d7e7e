//! Paced dispatch queue — releases at most one job per interval.
//!
//! A single pacing cycle runs while the queue is armed. It is started lazily
//! by the first enqueue into an idle queue, and after every fire that sent
//! something it waits one more full interval before looking again. A fire
//! that finds nothing pending disarms the queue and ends the cycle, so the
//! next enqueue again waits a whole interval before its send.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use super::job::DispatchJob;
use super::sender::OutboundSender;

/// Pending jobs plus the armed flag; always mutated together under one lock.
#[derive(Default)]
struct QueueState {
    pending: VecDeque<DispatchJob>,
    armed: bool,
}

/// Point-in-time view of the queue, served by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueStatus {
    pub pending: usize,
    pub armed: bool,
    pub interval_ms: u64,
}

/// FIFO of outbound jobs drained by a self-rearming timer.
pub struct DispatchQueue {
    state: Arc<Mutex<QueueState>>,
    sender: Arc<dyn OutboundSender>,
    interval: Duration,
}

impl DispatchQueue {
    /// Create an idle queue that delivers through `sender`.
    pub fn new(sender: Arc<dyn OutboundSender>, interval: Duration) -> Arc<Self> {
        Arc::new(Self {
            state: Arc::new(Mutex::new(QueueState::default())),
            sender,
            interval,
        })
    }

    /// Append a job. Arms the pacing cycle if the queue was idle.
    ///
    /// Returns as soon as the job is queued; delivery happens later.
    pub async fn enqueue(&self, job: DispatchJob) {
        let mut state = self.state.lock().await;

        debug!(
            job_id = %job.id,
            item = %job.payload.value1,
            tags = %job.payload.value2,
            "Adding item to the delay queue"
        );
        state.pending.push_back(job);

        if !state.armed {
            state.armed = true;
            self.spawn_pacing_cycle();
            debug!(interval_ms = self.interval_ms(), "Pacing cycle armed");
        }

        debug!(pending = state.pending.len(), "Item enqueued");
    }

    /// Number of jobs waiting to be sent.
    pub async fn pending_len(&self) -> usize {
        self.state.lock().await.pending.len()
    }

    /// Whether a pacing cycle is currently running.
    pub async fn is_armed(&self) -> bool {
        self.state.lock().await.armed
    }

    /// Snapshot of pending count, armed flag and interval.
    pub async fn status(&self) -> QueueStatus {
        let state = self.state.lock().await;
        QueueStatus {
            pending: state.pending.len(),
            armed: state.armed,
            interval_ms: self.interval_ms(),
        }
    }

    fn interval_ms(&self) -> u64 {
        u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX)
    }

    /// Only called with the state lock held and `armed` just set.
    fn spawn_pacing_cycle(&self) {
        let state = Arc::clone(&self.state);
        let sender = Arc::clone(&self.sender);
        let interval = self.interval;

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;

                let (job, remaining) = {
                    let mut state = state.lock().await;
                    match state.pending.pop_front() {
                        Some(job) => (job, state.pending.len()),
                        None => {
                            state.armed = false;
                            info!("Queue is empty, pacing cycle stopped");
                            return;
                        }
                    }
                };

                info!(
                    job_id = %job.id,
                    item = %job.payload.value1,
                    remaining,
                    "Sending queued item"
                );
                tokio::spawn(deliver(Arc::clone(&sender), job));
            }
        });
    }
}

/// Fire-and-forget delivery; the outcome is only logged.
async fn deliver(sender: Arc<dyn OutboundSender>, job: DispatchJob) {
    let job_id = job.id;
    let item = job.payload.value1.clone();
    let waited_secs = (chrono::Utc::now() - job.enqueued_at).num_seconds();

    match sender.send(job).await {
        Ok(status) => {
            info!(job_id = %job_id, item = %item, status, waited_secs, "Item delivered");
        }
        Err(e) => {
            error!(job_id = %job_id, item = %item, error = %e, "Failed to deliver item");
        }
    }
}
