//! Topic and publish domain logic for the broker facade.
//!
//! Two services sit on top of [`broker_pool::BrokerPool`]:
//! - [`topic`]: create/delete/list streams, surfaced externally as SRNs.
//! - [`publish`]: fire-and-track-async publish, plus ack-status lookup.

mod config;
mod error;
mod srn;

pub mod publish;
pub mod topic;

pub use config::SnsConfig;
pub use error::SnsError;
pub use srn::format as format_srn;
