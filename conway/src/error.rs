use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while allocating generation buffers.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroSized { width: usize, height: usize },

    #[error("grid of {width}x{height} cells does not fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("failed to allocate {cells} cells: {source}")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type GridResult<T> = Result<T, GridError>;
