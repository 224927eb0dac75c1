//! Core traits for the hardware seams
//!
//! These traits are the only surface the library shares with peripherals.
//! Keep them simple - the collaborators behind them are synchronous,
//! bounded-latency services, not async machinery.

use crate::sample::RawReading;

/// The sensing device behind the producer.
///
/// One call returns both channel readings. The contract is bounded latency
/// and no failure mode: conversion errors, if the hardware has any, are the
/// implementation's problem to absorb. Implementations are called from the
/// interrupt context and must not block.
pub trait SampleSource {
    /// Acquire one raw reading pair.
    fn read(&mut self) -> RawReading;
}

/// The transmission path behind the drain consumer.
///
/// `write` may block until the bytes are accepted; it runs only in the
/// cooperative context. The associated error type is whatever the transport
/// can report - the drain propagates it without interpreting it.
pub trait RecordSink {
    /// Transport-level error
    type Error;

    /// Send one formatted record line, blocking until accepted.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

#[cfg(feature = "std")]
impl RecordSink for Vec<u8> {
    type Error = core::convert::Infallible;

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}
