//! Acquisition core for driplog
//!
//! Buffers periodic two-channel analog readings for a slower, batched
//! transmission path. One interrupt-driven producer stamps and enqueues
//! samples; one cooperatively scheduled consumer drains the queue to a byte
//! sink on a fixed tick cadence.
//!
//! Key constraints:
//! - Exactly one producer context and one consumer context
//! - No heap allocation anywhere
//! - The producer path never blocks and runs in bounded time
//!
//! Peripheral programming (ADC, UART, timers) stays outside the crate; the
//! [`traits::SampleSource`] and [`traits::RecordSink`] seams are all the
//! hardware surface this library knows about.
//!
//! ```
//! use driplog_core::{
//!     DrainScheduler, RawReading, SampleProducer, SampleQueue, SampleSource, TickClock,
//! };
//! use driplog_core::sink::MemorySink;
//!
//! struct Adc;
//!
//! impl SampleSource for Adc {
//!     fn read(&mut self) -> RawReading {
//!         RawReading { value: 2048, intensity: 512 }
//!     }
//! }
//!
//! let clock = TickClock::new();
//! let queue = SampleQueue::<32>::new();
//! let mut producer = SampleProducer::new(Adc);
//! let mut drain = DrainScheduler::new(MemorySink::<256>::new(), 10);
//!
//! producer.sample(&clock, &queue); // interrupt context
//! clock.advance_by(10);
//! drain.poll(&clock, &queue).unwrap(); // cooperative loop
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod drain;
pub mod errors;
pub mod producer;
pub mod queue;
pub mod sample;
pub mod sink;
pub mod traits;
pub mod wire;

// Public API
pub use clock::{ticks_since, Tick, TickClock};
pub use config::SamplingConfig;
pub use drain::{DrainOutcome, DrainScheduler};
pub use errors::{DrainError, DrainResult};
pub use producer::SampleProducer;
pub use queue::SampleQueue;
pub use sample::{RawReading, SampleRecord, ValueScale};
pub use traits::{RecordSink, SampleSource};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
