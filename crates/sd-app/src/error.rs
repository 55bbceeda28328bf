use sd_core::ports::TransportError;
use thiserror::Error;

/// Failure of a projector operation.
///
/// Transport failures are passed through unchanged. The two local variants
/// never reach the network: a save without a loaded spider, and any call
/// made or still pending after the owning context was torn down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectorError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("no spider is loaded")]
    NoActiveSpider,

    #[error("projector was torn down")]
    Cancelled,
}

pub type ProjectorResult<T> = Result<T, ProjectorError>;
