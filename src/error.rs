use thiserror::Error;

use crate::cost::Algorithm;

pub type Result<T> = std::result::Result<T, Error>;

/// All inputs are deterministic and local, so nothing here is retryable;
/// every kind surfaces straight to the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no hardware profile carries a {0} benchmark")]
    UnknownAlgorithm(Algorithm),

    #[error("a rate-limited service needs a nonzero lifetime")]
    MissingLifetime,

    #[error("acceptance probability must be in (0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("invalid hardware catalog: {0}")]
    InvalidCatalog(String),
}
