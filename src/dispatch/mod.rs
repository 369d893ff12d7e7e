//! Outbound dispatch: job model, paced queue, and webhook sender.
//!
//! Items are never sent the moment they arrive. The queue holds them in
//! arrival order and hands one to the sender per interval; delivery failures
//! are logged and dropped.

pub mod job;
pub mod queue;
pub mod sender;

pub use job::{DestinationKey, DispatchJob, WebhookPayload};
pub use queue::{DispatchQueue, QueueStatus};
pub use sender::{OutboundSender, WebhookSender};
