//! # Line Batch Pool
//!
//! Growable collection of fixed-capacity line buffers.
//!
//! Each [`LineBatch`] holds up to [`SEGMENTS_PER_BATCH`] segments and is meant
//! to be submitted to the renderer as a single batched line draw. The pool
//! only ever grows: `clear()` resets occupancy but keeps every batch alive so
//! refilling it next frame costs no allocation.

use bytemuck::{Pod, Zeroable};

/// Number of segments stored in one batch.
pub const SEGMENTS_PER_BATCH: usize = 128;

/// A single line segment, laid out as `x1, y1, x2, y2`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Segment {
    /// Start X coordinate.
    pub x1: f32,
    /// Start Y coordinate.
    pub y1: f32,
    /// End X coordinate.
    pub x2: f32,
    /// End Y coordinate.
    pub y2: f32,
}

impl Segment {
    /// Size of a segment in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates a segment from its endpoints.
    #[inline]
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns the Euclidean length of the segment.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

/// One fixed-capacity buffer of segments.
///
/// Only the first [`occupied`](Self::occupied) segments are valid; the rest
/// of the storage holds stale data from earlier frames.
#[derive(Debug, Clone)]
pub struct LineBatch {
    /// Segment storage (boxed so batches can move cheaply).
    segments: Box<[Segment; SEGMENTS_PER_BATCH]>,
    /// Number of valid segments.
    occupied: usize,
}

impl LineBatch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: Box::new([Segment::default(); SEGMENTS_PER_BATCH]),
            occupied: 0,
        }
    }

    /// Returns the number of valid segments.
    #[inline]
    #[must_use]
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Returns true if no more segments fit.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.occupied == SEGMENTS_PER_BATCH
    }

    /// Returns true if the batch holds no segments.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Returns the valid segments.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments[..self.occupied]
    }

    /// Returns the valid segments as flat `x1, y1, x2, y2, ...` coordinates.
    ///
    /// The slice length is `occupied() * 4`.
    #[inline]
    #[must_use]
    pub fn coordinates(&self) -> &[f32] {
        bytemuck::cast_slice(self.segments())
    }

    /// Returns the valid segments as raw bytes for GPU upload.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.segments())
    }

    /// Appends a segment.
    ///
    /// Returns false (and stores nothing) when the batch is full.
    #[inline]
    pub fn push(&mut self, segment: Segment) -> bool {
        if self.is_full() {
            return false;
        }
        self.segments[self.occupied] = segment;
        self.occupied += 1;
        true
    }

    /// Marks every segment as unused. Storage is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.occupied = 0;
    }
}

impl Default for LineBatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered collection of [`LineBatch`]es.
///
/// # Invariant
///
/// Every batch before the current tail is full; only the tail may be
/// partially occupied, and batches after the tail are empty.
///
/// # Thread Safety
///
/// The pool is written once per tick and read once per frame on the same
/// thread. The borrow checker enforces that ordering; no locking is needed.
#[derive(Debug, Clone)]
pub struct LineBatchPool {
    /// All batches ever created.
    batches: Vec<LineBatch>,
    /// Number of full batches, which is also the index of the tail batch.
    full_batches: usize,
}

impl LineBatchPool {
    /// Creates a pool with a single empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            batches: vec![LineBatch::new()],
            full_batches: 0,
        }
    }

    /// Creates a pool with enough batches pre-allocated for `segments`.
    #[must_use]
    pub fn with_capacity(segments: usize) -> Self {
        let count = segments.div_ceil(SEGMENTS_PER_BATCH).max(1);
        Self {
            batches: (0..count).map(|_| LineBatch::new()).collect(),
            full_batches: 0,
        }
    }

    /// Appends a segment, advancing to the next batch when the tail is full.
    ///
    /// Amortized **O(1)**. A new batch is allocated only when the pool grows
    /// past its previous high-water mark.
    pub fn add_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push(Segment::new(x1, y1, x2, y2));
    }

    /// Appends a segment. See [`add_segment`](Self::add_segment).
    pub fn push(&mut self, segment: Segment) {
        if self.batches[self.full_batches].is_full() {
            self.full_batches += 1;
            if self.full_batches == self.batches.len() {
                self.batches.push(LineBatch::new());
            }
        }
        self.batches[self.full_batches].push(segment);
    }

    /// Resets occupancy of every batch. No memory is freed.
    pub fn clear(&mut self) {
        for batch in &mut self.batches {
            batch.clear();
        }
        self.full_batches = 0;
    }

    /// Returns the number of batches, occupied or not.
    #[inline]
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.batches.len()
    }

    /// Returns the total number of stored segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.full_batches * SEGMENTS_PER_BATCH + self.batches[self.full_batches].occupied()
    }

    /// Returns true if no segments are stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_batches == 0 && self.batches[0].is_empty()
    }

    /// Returns the batch at `index`, if it exists.
    #[inline]
    #[must_use]
    pub fn batch(&self, index: usize) -> Option<&LineBatch> {
        self.batches.get(index)
    }

    /// Iterates over every batch in insertion order, including empty ones.
    pub fn batches(&self) -> impl Iterator<Item = &LineBatch> {
        self.batches.iter()
    }

    /// Visits every batch in insertion order with its flat coordinates and
    /// occupied segment count.
    pub fn for_each_batch<F>(&self, mut visitor: F)
    where
        F: FnMut(&[f32], usize),
    {
        for batch in &self.batches {
            visitor(batch.coordinates(), batch.occupied());
        }
    }
}

impl Default for LineBatchPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(pool: &mut LineBatchPool, count: usize) {
        for i in 0..count {
            let v = i as f32;
            pool.add_segment(v, v + 1.0, v + 2.0, v + 3.0);
        }
    }

    #[test]
    fn test_segment_layout() {
        assert_eq!(Segment::SIZE, 16);
        let batch = {
            let mut b = LineBatch::new();
            b.push(Segment::new(1.0, 2.0, 3.0, 4.0));
            b
        };
        assert_eq!(batch.coordinates(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(batch.as_bytes().len(), 16);
    }

    #[test]
    fn test_exactly_one_full_batch() {
        let mut pool = LineBatchPool::new();
        fill(&mut pool, SEGMENTS_PER_BATCH);

        assert_eq!(pool.pool_count(), 1);
        assert!(pool.batch(0).unwrap().is_full());
        assert_eq!(pool.segment_count(), SEGMENTS_PER_BATCH);
    }

    #[test]
    fn test_overflow_creates_second_batch() {
        let mut pool = LineBatchPool::new();
        fill(&mut pool, SEGMENTS_PER_BATCH + 1);

        assert_eq!(pool.pool_count(), 2);
        assert_eq!(pool.batch(0).unwrap().occupied(), SEGMENTS_PER_BATCH);
        assert_eq!(pool.batch(1).unwrap().occupied(), 1);

        let last = pool.batch(1).unwrap().coordinates();
        let v = SEGMENTS_PER_BATCH as f32;
        assert_eq!(last, &[v, v + 1.0, v + 2.0, v + 3.0]);
    }

    #[test]
    fn test_clear_retains_capacity() {
        let mut pool = LineBatchPool::new();
        fill(&mut pool, SEGMENTS_PER_BATCH * 3 + 5);
        assert_eq!(pool.pool_count(), 4);

        pool.clear();

        assert_eq!(pool.pool_count(), 4);
        assert!(pool.is_empty());
        pool.for_each_batch(|coords, occupied| {
            assert_eq!(occupied, 0);
            assert!(coords.is_empty());
        });
    }

    #[test]
    fn test_refill_reuses_batches() {
        let mut pool = LineBatchPool::new();
        fill(&mut pool, 300);
        let count = pool.pool_count();

        for _ in 0..10 {
            pool.clear();
            fill(&mut pool, 300);
        }

        assert_eq!(pool.pool_count(), count, "refill must not grow the pool");
        assert_eq!(pool.segment_count(), 300);
    }

    #[test]
    fn test_only_tail_partially_occupied() {
        let mut pool = LineBatchPool::with_capacity(SEGMENTS_PER_BATCH * 4);
        fill(&mut pool, SEGMENTS_PER_BATCH * 2 + 7);

        let occupancy: Vec<usize> = pool.batches().map(LineBatch::occupied).collect();
        assert_eq!(occupancy, vec![128, 128, 7, 0]);
    }

    #[test]
    fn test_visitor_sees_insertion_order() {
        let mut pool = LineBatchPool::new();
        fill(&mut pool, SEGMENTS_PER_BATCH + 2);

        let mut firsts = Vec::new();
        pool.for_each_batch(|coords, occupied| {
            if occupied > 0 {
                firsts.push(coords[0]);
            }
        });
        assert_eq!(firsts, vec![0.0, SEGMENTS_PER_BATCH as f32]);
    }
}
