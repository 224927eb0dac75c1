//! Sample producer - the interrupt-side half
//!
//! Fired once per sampling period by a periodic hardware trigger. Each
//! firing stamps the current tick, acquires one reading pair, converts
//! channel A to engineering units and enqueues the record. Everything on
//! this path is non-blocking and bounded: the trigger preempts the
//! cooperative loop at any instruction boundary, and a stall here starves
//! the consumer and the tick clock both.

use crate::clock::TickClock;
use crate::queue::SampleQueue;
use crate::sample::{SampleRecord, ValueScale};
use crate::traits::SampleSource;

/// Owns the sensing device and the channel-A conversion.
///
/// The embedding registers [`SampleProducer::sample`] as the body of its
/// periodic interrupt handler and hands it the shared clock and queue.
#[derive(Debug)]
pub struct SampleProducer<S: SampleSource> {
    source: S,
    scale: ValueScale,
}

impl<S: SampleSource> SampleProducer<S> {
    /// Producer with the default 12-bit-to-engineering-units conversion.
    pub fn new(source: S) -> Self {
        Self::with_scale(source, ValueScale::default())
    }

    /// Producer with an explicit conversion.
    pub fn with_scale(source: S, scale: ValueScale) -> Self {
        Self { source, scale }
    }

    /// One producer firing: stamp, read, convert, enqueue.
    ///
    /// Runs in the preemptive interrupt context. A full queue drops the new
    /// record; the result is deliberately not surfaced because this context
    /// has no one to report to - loss is an accepted trade-off, visible only
    /// in the queue's drop counter.
    pub fn sample<const N: usize>(&mut self, clock: &TickClock, queue: &SampleQueue<N>) {
        let timestamp = clock.now();
        let raw = self.source.read();

        let record = SampleRecord {
            timestamp,
            value: self.scale.convert(raw.value),
            intensity: raw.intensity,
        };

        let _ = queue.push(record);
    }

    /// Access the sensing device, e.g. to reconfigure it between firings.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
