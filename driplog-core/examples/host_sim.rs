//! Host-side simulation of the acquisition loop
//!
//! Wires the clock, producer and drain together the way a firmware main
//! would, but drives time deterministically instead of from hardware timers:
//! every loop turn advances the tick clock, the producer fires on its
//! sampling cadence, and the drain consumer polls every turn. Output lands
//! in a `Vec<u8>` sink and is printed at the end.
//!
//! ```bash
//! cargo run --example host_sim
//! ```

use driplog_core::{
    DrainOutcome, DrainScheduler, RawReading, SampleProducer, SampleQueue, SampleSource,
    SamplingConfig, TickClock,
};

/// Synthetic two-channel source: a slow triangle wave on channel A and a
/// noisy-ish counter on channel B.
struct TriangleAdc {
    phase: u16,
    rising: bool,
}

impl TriangleAdc {
    fn new() -> Self {
        Self {
            phase: 0,
            rising: true,
        }
    }
}

impl SampleSource for TriangleAdc {
    fn read(&mut self) -> RawReading {
        const STEP: u16 = 137;

        if self.rising {
            self.phase = self.phase.saturating_add(STEP);
            if self.phase >= 4095 {
                self.phase = 4095;
                self.rising = false;
            }
        } else {
            self.phase = self.phase.saturating_sub(STEP);
            if self.phase == 0 {
                self.rising = true;
            }
        }

        RawReading {
            value: self.phase,
            intensity: self.phase.rotate_left(3) & 0x0fff,
        }
    }
}

fn main() {
    let cfg = SamplingConfig::default();
    let clock = TickClock::new();
    let queue = SampleQueue::<32>::new();
    let mut producer = SampleProducer::new(TriangleAdc::new());
    let mut drain = DrainScheduler::new(Vec::new(), cfg.drain_interval);

    // Five simulated seconds at one tick per millisecond
    for _ in 0..5_000 {
        clock.advance();

        // Stands in for the sampling timer interrupt
        if clock.now() % cfg.sample_interval == 0 {
            producer.sample(&clock, &queue);
        }

        // Stands in for one turn of the cooperative main loop
        match drain.poll(&clock, &queue) {
            Ok(DrainOutcome::Flushed { records }) => {
                eprintln!(
                    "tick {:>5}: flushed {records} records ({} dropped so far)",
                    clock.now(),
                    queue
                        .stats()
                        .dropped
                        .load(std::sync::atomic::Ordering::Relaxed)
                );
            }
            Ok(DrainOutcome::Idle) => {}
            Err(err) => unreachable!("Vec sink cannot fail: {err:?}"),
        }
    }

    print!("{}", String::from_utf8_lossy(&drain.into_sink()));
}
