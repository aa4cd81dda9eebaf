use broker_pool::PublishAckFuture;
use std::time::Duration;
use tracing::Span;

/// Default wait for a publish ack before giving up and recording a timeout.
pub const DEFAULT_ACK_TIMEOUT: Duration = Duration::from_secs(5);

/// A single in-flight publish ack to be waited on and recorded.
///
/// Carries its own [`Span`] rather than a cancellable request context: the
/// worker that processes this task runs detached from the HTTP request that
/// created it, so there is no parent future to inherit cancellation from in
/// the first place.
pub struct AckTask {
    pub id: String,
    pub span: Span,
    pub ack_future: PublishAckFuture,
    pub timeout: Duration,
}

impl AckTask {
    pub fn new(id: String, ack_future: PublishAckFuture, timeout: Duration) -> Self {
        Self { id, span: Span::current(), ack_future, timeout }
    }
}
