//! Error types for the drain path
//!
//! The producer side has exactly one failure condition - queue full - and it
//! is deliberately not an error type: the interrupt context has nobody to
//! report to, so overflow surfaces only as `push` returning `false` and a
//! drop counter. Errors here belong to the cooperative side, where the
//! drain renders and forwards records and has a caller to answer to.
//!
//! Variants are kept small and `Copy`-able; no heap, no allocation, in line
//! with the rest of the crate.

use thiserror_no_std::Error;

/// Result alias for drain operations.
pub type DrainResult<T, E> = Result<T, DrainError<E>>;

/// Failure while draining the queue to the sink.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainError<E> {
    /// A rendered record did not fit the wire line buffer
    #[error("rendered record exceeds the line buffer")]
    LineOverflow,

    /// The sink rejected a write; carries the transport's own error
    #[error("sink write failed")]
    Sink(E),
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for DrainError<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DrainError::LineOverflow => defmt::write!(fmt, "line overflow"),
            DrainError::Sink(_) => defmt::write!(fmt, "sink write failed"),
        }
    }
}
