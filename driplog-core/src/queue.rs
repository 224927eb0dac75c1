//! Bounded SPSC Queue for Sample Hand-off
#![allow(unsafe_code)] // Required for the shared ring storage
//!
//! ## Overview
//!
//! This module implements the hand-off point between the two execution
//! contexts: a fixed-capacity circular queue with exactly one writer (the
//! sample producer, running in interrupt context) and exactly one reader
//! (the drain consumer, running in the cooperative main loop).
//!
//! ```text
//! ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//! │  0  │  1  │  2  │  3  │  4  │  5  │  6  │  7  │
//! └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!          ↑                       ↑
//!        tail                    head
//!        (next read,            (next write,
//!         consumer-owned)        producer-owned)
//! ```
//!
//! ## Index protocol
//!
//! `head` is written only by the producer, `tail` only by the consumer; each
//! side reads the other's index without modification rights. One slot is
//! sacrificed so two indices suffice to tell the boundary states apart:
//!
//! - empty  ⇔ `head == tail`
//! - full   ⇔ `next(head) == tail`, usable capacity `N - 1`
//!
//! Publication order is what makes the hand-off sound: the producer writes
//! the slot, then stores `head` with release ordering; the consumer loads
//! `head` with acquire ordering before reading the slot. The equivalent
//! bare-metal code suppresses the producing interrupt around the dequeue
//! sequence; acquire/release atomics are the explicit synchronization
//! primitive carrying that margin here, not `volatile` reads.
//!
//! ## Overflow policy
//!
//! Drop-new: a push against a full queue discards the incoming record and
//! leaves everything already queued untouched. The producer runs where no
//! error can be reported synchronously, so the failure surfaces only as the
//! boolean result and a relaxed drop counter.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use crate::sample::SampleRecord;

/// Bounded single-producer/single-consumer sample queue.
///
/// `N` is the slot count; usable capacity is `N - 1`. Storage lives inline,
/// cleared at construction, and is only ever moved across contexts by value.
///
/// One instance is meant to be owned by the top-level driver and shared by
/// reference with both halves:
///
/// ```
/// use driplog_core::{SampleQueue, SampleRecord};
///
/// let queue = SampleQueue::<32>::new();
///
/// // Producer context
/// queue.push(SampleRecord { timestamp: 1, value: 20.0, intensity: 800 });
///
/// // Consumer context
/// while let Some(record) = queue.pop() {
///     // forward downstream
/// }
/// ```
pub struct SampleQueue<const N: usize> {
    /// Ring storage; slots are disjointly owned by the index protocol
    buffer: UnsafeCell<[SampleRecord; N]>,

    /// Next write slot (producer-owned)
    head: AtomicUsize,

    /// Next read slot (consumer-owned)
    tail: AtomicUsize,

    /// Traffic counters
    stats: QueueStats,
}

/// Queue traffic counters.
///
/// Relaxed atomics: these observe, they never gate correctness. `dropped`
/// is the only visible trace of the overflow policy.
#[derive(Debug)]
pub struct QueueStats {
    /// Records accepted by `push`
    pub pushed: AtomicU32,
    /// Records handed out by `pop`
    pub popped: AtomicU32,
    /// Records discarded because the queue was full
    pub dropped: AtomicU32,
}

impl QueueStats {
    const fn new() -> Self {
        Self {
            pushed: AtomicU32::new(0),
            popped: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }
}

impl<const N: usize> SampleQueue<N> {
    // One slot is sacrificed to tell empty from full.
    const SLOT_GUARD: () = assert!(N >= 2, "SampleQueue needs at least 2 slots");

    /// Create an empty queue with cleared storage.
    ///
    /// Const so the queue can live in a `static` when the embedding has no
    /// other home for it; tests simply create locals.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let _ = Self::SLOT_GUARD;
        Self {
            buffer: UnsafeCell::new([SampleRecord::ZERO; N]),
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            stats: QueueStats::new(),
        }
    }

    /// Successor of a slot index, wrapping at `N`.
    #[inline]
    fn next(index: usize) -> usize {
        let next = index + 1;
        if next == N {
            0
        } else {
            next
        }
    }

    /// Raw pointer to one slot, avoiding references into the shared array.
    #[inline]
    fn slot(&self, index: usize) -> *mut SampleRecord {
        debug_assert!(index < N);
        // Cast from *mut [SampleRecord; N]; indices stay in range by the
        // `next` arithmetic.
        unsafe { (self.buffer.get() as *mut SampleRecord).add(index) }
    }

    /// Enqueue one record. Producer-only.
    ///
    /// Returns `false` if the queue is full; the record is dropped and
    /// storage and indices are left unmodified. Lock-free and bounded-time,
    /// so it is callable from the preemptive interrupt context.
    ///
    /// ## Discipline
    ///
    /// Exactly one context may call `push`. The index protocol is only sound
    /// under the single-writer split.
    pub fn push(&self, record: SampleRecord) -> bool {
        let head = self.head.load(Ordering::Acquire);
        let next = Self::next(head);

        if next == self.tail.load(Ordering::Acquire) {
            // Full - drop the incoming record
            self.stats.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }

        // Sole producer: the consumer never touches slots in [tail, head).
        unsafe {
            self.slot(head).write(record);
        }

        // Publish the slot before the new head becomes visible
        self.head.store(next, Ordering::Release);
        self.stats.pushed.fetch_add(1, Ordering::Relaxed);
        true
    }

    /// Dequeue the oldest record. Consumer-only.
    ///
    /// Returns `None` when the queue is empty; that is the normal end of a
    /// drain cycle, not an error.
    ///
    /// ## Discipline
    ///
    /// Exactly one context may call `pop`, mirroring the `push` contract.
    pub fn pop(&self) -> Option<SampleRecord> {
        let tail = self.tail.load(Ordering::Acquire);

        if tail == self.head.load(Ordering::Acquire) {
            return None;
        }

        // The acquire load of head above ordered this slot's contents
        // before the read.
        let record = unsafe { self.slot(tail).read() };

        self.tail.store(Self::next(tail), Ordering::Release);
        self.stats.popped.fetch_add(1, Ordering::Relaxed);
        Some(record)
    }

    /// Whether the queue currently holds no records.
    ///
    /// Lock-free read of both indices; safe from either context.
    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::Acquire) == self.tail.load(Ordering::Acquire)
    }

    /// Whether the queue currently holds `N - 1` records.
    ///
    /// Lock-free read of both indices; safe from either context.
    pub fn is_full(&self) -> bool {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        Self::next(head) == tail
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);

        if head >= tail {
            head - tail
        } else {
            N - tail + head
        }
    }

    /// Usable capacity: `N - 1`.
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Reset both indices and clear the storage.
    ///
    /// The unique borrow is the exclusion discipline: no producer or
    /// consumer can hold a shared reference while this runs, which replaces
    /// the interrupt-suppression window bare-metal init code needs.
    /// Traffic counters are process-lifetime and are not reset.
    pub fn clear(&mut self) {
        *self.head.get_mut() = 0;
        *self.tail.get_mut() = 0;
        *self.buffer.get_mut() = [SampleRecord::ZERO; N];
    }

    /// Queue traffic counters.
    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }

    /// Iterator that pops until the queue is empty. Consumer-only.
    pub fn drain(&self) -> Drain<'_, N> {
        Drain { queue: self }
    }
}

impl<const N: usize> Default for SampleQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

// The index protocol makes concurrent single-producer/single-consumer access
// sound; records cross contexts only by value.
unsafe impl<const N: usize> Send for SampleQueue<N> {}
unsafe impl<const N: usize> Sync for SampleQueue<N> {}

/// Draining iterator over a [`SampleQueue`]; each `next` is a `pop`.
pub struct Drain<'a, const N: usize> {
    queue: &'a SampleQueue<N>,
}

impl<'a, const N: usize> Iterator for Drain<'a, N> {
    type Item = SampleRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: u32) -> SampleRecord {
        SampleRecord {
            timestamp,
            value: timestamp as f32 * 0.5,
            intensity: (timestamp % 4096) as u16,
        }
    }

    #[test]
    fn starts_empty() {
        let queue = SampleQueue::<8>::new();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 7);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn round_trip_preserves_fields() {
        let queue = SampleQueue::<8>::new();

        for t in 0..5 {
            assert!(queue.push(record(t)));
        }
        assert_eq!(queue.len(), 5);

        for t in 0..5 {
            assert_eq!(queue.pop(), Some(record(t)));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn drop_new_on_full() {
        let queue = SampleQueue::<4>::new();

        // Usable capacity is N - 1
        for t in 0..3 {
            assert!(queue.push(record(t)));
        }
        assert!(queue.is_full());
        assert_eq!(queue.len(), 3);

        // The incoming record is the one discarded
        assert!(!queue.push(record(99)));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.stats().dropped.load(Ordering::Relaxed), 1);

        let drained: heapless::Vec<u32, 4> = queue.drain().map(|r| r.timestamp).collect();
        assert_eq!(drained.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn pop_on_empty_is_not_an_error() {
        let queue = SampleQueue::<4>::new();
        assert_eq!(queue.pop(), None);

        queue.push(record(1));
        assert_eq!(queue.pop(), Some(record(1)));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn wraparound_behaves_like_unwrapped() {
        const N: usize = 8;
        let queue = SampleQueue::<N>::new();

        // 3N alternating cycles force the indices around several times
        for t in 0..(3 * N as u32) {
            assert!(queue.push(record(t)));
            assert_eq!(queue.pop(), Some(record(t)));
            assert!(queue.is_empty());
        }

        // FIFO order and boundary detection still hold afterwards
        for t in 100..107 {
            assert!(queue.push(record(t)));
        }
        assert!(queue.is_full());
        for t in 100..107 {
            assert_eq!(queue.pop(), Some(record(t)));
        }
    }

    #[test]
    fn thirty_two_slot_scenario() {
        // The reference deployment: 32 slots, 31 usable.
        let queue = SampleQueue::<32>::new();

        for t in 0..31 {
            assert!(queue.push(record(t)));
        }
        assert!(queue.is_full());

        assert!(!queue.push(record(31)));

        assert_eq!(queue.pop().map(|r| r.timestamp), Some(0));
        assert!(queue.push(record(31)));

        let drained: heapless::Vec<u32, 32> = queue.drain().map(|r| r.timestamp).collect();
        let expected: heapless::Vec<u32, 32> = (1..=31).collect();
        assert_eq!(drained, expected);
    }

    #[test]
    fn clear_resets_indices() {
        let mut queue = SampleQueue::<4>::new();
        queue.push(record(1));
        queue.push(record(2));

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);

        // Still fully usable after the reset
        assert!(queue.push(record(3)));
        assert_eq!(queue.pop(), Some(record(3)));
    }

    #[test]
    fn stats_track_traffic() {
        let queue = SampleQueue::<4>::new();

        for t in 0..4 {
            queue.push(record(t));
        }
        queue.pop();

        assert_eq!(queue.stats().pushed.load(Ordering::Relaxed), 3);
        assert_eq!(queue.stats().dropped.load(Ordering::Relaxed), 1);
        assert_eq!(queue.stats().popped.load(Ordering::Relaxed), 1);
    }
}
