//! Sample records and raw-value conversion
//!
//! A [`SampleRecord`] is the unit that crosses from the interrupt context to
//! the cooperative context: one timestamped reading pair, copied by value
//! into and out of the queue. Records are kept `Copy` and small (12 bytes)
//! so the hand-off never touches the heap and never needs a destructor.

use crate::clock::Tick;
use crate::config::{DEFAULT_FULL_SCALE, DEFAULT_RAW_FULL_SCALE};

/// One buffered sample: a tick stamp plus both channel readings.
///
/// Immutable once constructed. The first channel is already converted to
/// engineering units; the second is carried raw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    /// Tick count at the moment the sample was taken
    pub timestamp: Tick,
    /// Channel A, scaled to engineering units
    pub value: f32,
    /// Channel B, raw intensity counts
    pub intensity: u16,
}

impl SampleRecord {
    /// The all-zero record used for cleared queue storage.
    pub const ZERO: Self = Self {
        timestamp: 0,
        value: 0.0,
        intensity: 0,
    };
}

#[cfg(feature = "defmt")]
impl defmt::Format for SampleRecord {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "t={} value={} intensity={}",
            self.timestamp,
            self.value,
            self.intensity
        );
    }
}

/// Raw reading pair as delivered by the sensing device.
///
/// Both fields are bounded-width counts, 12-bit range with the default
/// converter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawReading {
    /// Channel A counts, converted by [`ValueScale`] before buffering
    pub value: u16,
    /// Channel B counts, buffered as-is
    pub intensity: u16,
}

/// Fixed linear conversion from converter counts to engineering units.
///
/// `raw * full_scale / raw_full_scale`, e.g. `[0, 4095] -> [0.0, 100.0]`
/// with the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    raw_full_scale: u16,
    full_scale: f32,
}

impl ValueScale {
    /// Conversion mapping `[0, raw_full_scale]` onto `[0.0, full_scale]`.
    pub const fn new(raw_full_scale: u16, full_scale: f32) -> Self {
        Self {
            raw_full_scale,
            full_scale,
        }
    }

    /// Convert one raw count into engineering units.
    pub fn convert(&self, raw: u16) -> f32 {
        raw as f32 * self.full_scale / self.raw_full_scale as f32
    }
}

impl Default for ValueScale {
    fn default() -> Self {
        Self::new(DEFAULT_RAW_FULL_SCALE, DEFAULT_FULL_SCALE)
    }
}
