//! Property tests for the SPSC queue laws
//!
//! Drives both queue ends from one thread with arbitrary interleavings -
//! the index protocol does not care which context performs an operation,
//! only that each index has a single writer, which a single thread satisfies
//! trivially. The concurrent case is covered by the stress test.

use std::collections::VecDeque;

use proptest::prelude::*;

use driplog_core::{SampleQueue, SampleRecord};

#[derive(Debug, Clone, Copy)]
enum Op {
    Push,
    Pop,
}

fn op_sequences() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![Just(Op::Push), Just(Op::Pop)],
        0..400,
    )
}

fn record(sequence: u32) -> SampleRecord {
    SampleRecord {
        timestamp: sequence,
        value: sequence as f32,
        intensity: (sequence & 0x0fff) as u16,
    }
}

proptest! {
    /// The queue agrees with a model FIFO on every operation, never holds
    /// more than `N - 1` records, and never reorders.
    #[test]
    fn behaves_like_a_bounded_fifo(ops in op_sequences()) {
        const N: usize = 8;
        let queue = SampleQueue::<N>::new();
        let mut model: VecDeque<u32> = VecDeque::new();
        let mut sequence = 0u32;

        for op in ops {
            match op {
                Op::Push => {
                    let accepted = queue.push(record(sequence));
                    if model.len() < N - 1 {
                        prop_assert!(accepted);
                        model.push_back(sequence);
                    } else {
                        // Drop-new: rejected, and the queue contents must
                        // be unaffected
                        prop_assert!(!accepted);
                    }
                    sequence += 1;
                }
                Op::Pop => {
                    let popped = queue.pop().map(|r| r.timestamp);
                    prop_assert_eq!(popped, model.pop_front());
                }
            }

            prop_assert_eq!(queue.len(), model.len());
            prop_assert!(queue.len() <= N - 1);
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.is_full(), model.len() == N - 1);
        }

        // Whatever survived comes out in push order
        for expected in model {
            prop_assert_eq!(queue.pop().map(|r| r.timestamp), Some(expected));
        }
        prop_assert_eq!(queue.pop(), None);
    }

    /// Records come back bit-identical, across enough cycles to wrap the
    /// indices repeatedly.
    #[test]
    fn round_trip_is_lossless(start in any::<u32>(), cycles in 1usize..100) {
        let queue = SampleQueue::<4>::new();

        for i in 0..cycles as u32 {
            let pushed = SampleRecord {
                timestamp: start.wrapping_add(i),
                value: f32::from_bits(start.wrapping_mul(2_654_435_761).wrapping_add(i)),
                intensity: (i & 0x0fff) as u16,
            };
            prop_assert!(queue.push(pushed));

            let popped = queue.pop().unwrap();
            prop_assert_eq!(popped.timestamp, pushed.timestamp);
            prop_assert_eq!(popped.value.to_bits(), pushed.value.to_bits());
            prop_assert_eq!(popped.intensity, pushed.intensity);
        }
    }
}
