//! Drain consumer - the cooperative-side half
//!
//! Runs inside the main loop. Each [`DrainScheduler::poll`] checks the tick
//! cadence; once `drain_interval` ticks have elapsed since the last flush it
//! empties the queue completely, forwarding every record to the sink as one
//! wire line, in FIFO order. Between flushes the loop is free to idle in
//! whatever low-power wait the embedding provides - there is no state to
//! carry across the wait.
//!
//! The flush anchor is resynced to the current tick rather than stepped by
//! the interval, so variable processing time cannot accumulate into
//! unbounded drift; the trade-off is that flushes are not phase-locked to
//! the tick the schedule started on.

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

use crate::clock::{ticks_since, Tick, TickClock};
use crate::errors::{DrainError, DrainResult};
use crate::queue::SampleQueue;
use crate::traits::RecordSink;
use crate::wire::{render_line, LineBuf};

/// What one [`DrainScheduler::poll`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// Cadence not yet due; the queue was not touched
    Idle,
    /// A drain cycle ran and forwarded `records` records
    Flushed {
        /// Records forwarded during this cycle (0 if nothing was queued)
        records: usize,
    },
}

/// Owns the sink and the drain cadence.
#[derive(Debug)]
pub struct DrainScheduler<K: RecordSink> {
    sink: K,
    interval: Tick,
    last_flush: Tick,
}

impl<K: RecordSink> DrainScheduler<K> {
    /// Scheduler that flushes every `interval` ticks, anchored at tick 0.
    pub fn new(sink: K, interval: Tick) -> Self {
        Self::anchored_at(sink, interval, 0)
    }

    /// Scheduler with an explicit first anchor.
    ///
    /// Use when the system starts with the clock already running, so the
    /// first flush happens one full interval after start rather than
    /// immediately.
    pub fn anchored_at(sink: K, interval: Tick, now: Tick) -> Self {
        Self {
            sink,
            interval,
            last_flush: now,
        }
    }

    /// One main-loop iteration: check the cadence, drain if due.
    ///
    /// Not due: returns [`DrainOutcome::Idle`] without touching the queue.
    /// Due: resyncs the anchor to the current tick, then pops until empty,
    /// rendering and forwarding each record in FIFO order. The sink may
    /// block; this is the only place in the crate allowed to.
    ///
    /// A sink or render failure aborts the cycle; records popped before the
    /// failure have already left the queue. The next due poll continues with
    /// whatever is queued then.
    pub fn poll<const N: usize>(
        &mut self,
        clock: &TickClock,
        queue: &SampleQueue<N>,
    ) -> DrainResult<DrainOutcome, K::Error> {
        let now = clock.now();

        if ticks_since(now, self.last_flush) < self.interval {
            return Ok(DrainOutcome::Idle);
        }

        // Resync to now, not last_flush + interval
        self.last_flush = now;

        let mut records = 0;
        let mut line = LineBuf::new();

        for record in queue.drain() {
            render_line(&record, &mut line).map_err(|_| DrainError::LineOverflow)?;
            self.sink.write(line.as_bytes()).map_err(DrainError::Sink)?;
            records += 1;
        }

        log_trace!("drain cycle at tick {now}: {records} records");
        Ok(DrainOutcome::Flushed { records })
    }

    /// Tick of the most recent flush (or the starting anchor).
    pub fn last_flush(&self) -> Tick {
        self.last_flush
    }

    /// Access the sink, e.g. to inspect what a test captured.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    /// Consume the scheduler and hand the sink back.
    pub fn into_sink(self) -> K {
        self.sink
    }
}
