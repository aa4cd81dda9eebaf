use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnsError {
    #[error("missing required fields")]
    MissingFields,

    #[error("not found")]
    NotFound,

    #[error("unknown status")]
    UnknownStatus,

    #[error(transparent)]
    Broker(#[from] broker_pool::BrokerError),

    #[error(transparent)]
    Kv(#[from] kv_store::DatabaseError),

    #[error(transparent)]
    Dispatch(#[from] ack_dispatch::AckDispatchError),
}
