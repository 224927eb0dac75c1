//! Build-time configuration
//!
//! All cadences and sizes are fixed when the system is constructed; nothing
//! here changes at runtime. Defaults follow the reference deployment: a 1 ms
//! tick, a sample every 100 ms, a drain every second, a 12-bit converter.

use crate::clock::Tick;

/// Default number of queue slots (usable capacity is one less).
pub const DEFAULT_QUEUE_SLOTS: usize = 32;

/// Default ticks between producer firings.
pub const DEFAULT_SAMPLE_INTERVAL: Tick = 100;

/// Default ticks between drain cycles.
pub const DEFAULT_DRAIN_INTERVAL: Tick = 1000;

/// Default converter full-scale count (12-bit).
pub const DEFAULT_RAW_FULL_SCALE: u16 = 4095;

/// Default engineering-unit full scale for channel A.
pub const DEFAULT_FULL_SCALE: f32 = 100.0;

/// Cadence configuration for one acquisition instance.
///
/// The sample interval is consumed by whatever arms the producer's hardware
/// trigger; the drain interval is consumed by [`crate::DrainScheduler`].
/// Both are measured in ticks of the same [`crate::TickClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Ticks between producer firings
    pub sample_interval: Tick,
    /// Ticks between drain cycles
    pub drain_interval: Tick,
}

impl SamplingConfig {
    /// Configuration with explicit cadences.
    pub const fn new(sample_interval: Tick, drain_interval: Tick) -> Self {
        Self {
            sample_interval,
            drain_interval,
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_INTERVAL, DEFAULT_DRAIN_INTERVAL)
    }
}
