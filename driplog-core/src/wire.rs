//! Wire format for drained records
//!
//! One ASCII line per sample, CRLF-terminated:
//!
//! ```text
//! timestamp,value,intensity\r\n
//! 1000,5.00,17\r\n
//! ```
//!
//! `value` is rendered with exactly two decimal digits using integer
//! arithmetic on hundredths - no `{:.2}` float formatting, which would pull
//! softfloat formatting machinery into tiny targets. Rounding is to the
//! nearest hundredth, ties away from zero ([`libm::roundf`] semantics).
//! `timestamp` and `intensity` are plain unsigned decimals.

use core::fmt::Write as _;

use heapless::String;

use crate::sample::SampleRecord;

/// Upper bound for one rendered line.
///
/// Worst case: 10 digits of timestamp, sign plus 8 integer digits of a
/// saturated hundredths value, 5 digits of intensity, separators and CRLF.
pub const MAX_LINE_LEN: usize = 48;

/// Stack-allocated buffer for one wire line.
pub type LineBuf = String<MAX_LINE_LEN>;

/// A record that did not fit in [`LineBuf`].
///
/// Cannot happen for records built from bounded raw readings; the type
/// exists so the drain can propagate instead of panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOverflow;

/// Render one record as a wire line into `out`.
///
/// Clears the buffer first, so one `LineBuf` can be reused across a whole
/// drain cycle.
pub fn render_line(record: &SampleRecord, out: &mut LineBuf) -> Result<(), LineOverflow> {
    out.clear();

    let hundredths = scale_hundredths(record.value);
    let sign = if hundredths < 0 { "-" } else { "" };
    let integer = (hundredths / 100).unsigned_abs();
    let fraction = (hundredths % 100).unsigned_abs();

    write!(
        out,
        "{},{}{}.{:02},{}\r\n",
        record.timestamp, sign, integer, fraction, record.intensity
    )
    .map_err(|_| LineOverflow)
}

/// Scale to integer hundredths, rounding ties away from zero.
///
/// The cast saturates at the `i32` range, which only triggers for values far
/// outside any physical scale.
fn scale_hundredths(value: f32) -> i32 {
    libm::roundf(value * 100.0) as i32
}
