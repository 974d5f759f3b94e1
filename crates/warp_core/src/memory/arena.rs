//! # Swap Arena
//!
//! Dense storage for short-lived particles.

/// A dense, `Vec`-backed arena with swap-remove deletion.
///
/// Live values are always packed at the front of a single allocation, so
/// per-tick iteration walks contiguous memory. Removal moves the last value
/// into the hole, which makes it **O(1)** but does not preserve order.
///
/// Capacity is retained across [`clear`](Self::clear), so a warmed-up arena
/// never allocates again.
///
/// # Thread Safety
///
/// This arena is NOT thread-safe. It is owned by a single simulation.
///
/// # Example
///
/// ```rust
/// use warp_core::SwapArena;
///
/// let mut arena = SwapArena::with_capacity(16);
/// arena.push(1.5_f32);
/// arena.push(0.2);
/// arena.push(1.1);
///
/// // Drop everything past the edge
/// let removed = arena.retain(|d| *d <= 1.0);
/// assert_eq!(removed, 2);
/// assert_eq!(arena.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SwapArena<T> {
    /// Packed live values.
    items: Vec<T>,
}

impl<T> SwapArena<T> {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty arena with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of live values.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the arena holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of values the arena can hold without allocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Adds a value.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes the value at `index` by moving the last value into its slot.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.swap_remove(index))
        } else {
            None
        }
    }

    /// Keeps only the values for which `keep` returns true.
    ///
    /// `keep` may mutate the value it inspects. Every value is visited
    /// exactly once, including values swapped into a freed slot.
    ///
    /// Returns the number of removed values.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&mut T) -> bool,
    {
        let before = self.items.len();
        let mut index = 0;
        while index < self.items.len() {
            if keep(&mut self.items[index]) {
                index += 1;
            } else {
                // Re-examine this slot: it now holds the former last value.
                self.items.swap_remove(index);
            }
        }
        before - self.items.len()
    }

    /// Removes every value. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over live values.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates mutably over live values.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Returns the live values as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for SwapArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SwapArena<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a SwapArena<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
