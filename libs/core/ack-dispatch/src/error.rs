use thiserror::Error;

#[derive(Debug, Error)]
pub enum AckDispatchError {
    #[error("dispatcher queue is closed")]
    QueueClosed,
}
