use crate::Price;

/// Fixed-capacity ring of prices.
///
/// Once full, every [`put`](Self::put) overwrites the oldest slot. The
/// positional accessors ([`first`](Self::first), [`last`](Self::last)) and
/// the views ([`values`](Self::values), [`ordered_values`](Self::ordered_values))
/// only report data once the buffer is full: before that they return NaN or
/// nothing, which indicators pass through as "still warming up".
///
/// # Example
///
/// ```
/// use ta_stream::CircularBuffer;
///
/// let mut buf = CircularBuffer::new(3);
/// buf.put(1.0);
/// buf.put(2.0);
/// assert!(buf.first().is_nan());
///
/// buf.put(3.0);
/// buf.put(4.0);
/// assert_eq!(buf.first(), 2.0);
/// assert_eq!(buf.ordered_values().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
/// ```
#[derive(Clone, Debug)]
pub struct CircularBuffer {
    buffer: Vec<Price>,
    // Next write slot; the oldest value once full.
    next: usize,
    len: usize,
}

impl CircularBuffer {
    /// Creates an empty buffer holding `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        Self {
            buffer: vec![0.0; capacity],
            next: 0,
            len: 0,
        }
    }

    /// Stores `value`, returning the evicted oldest value once full.
    #[inline]
    pub fn put(&mut self, value: Price) -> Option<Price> {
        let evicted = self.is_full().then(|| self.buffer[self.next]);

        self.buffer[self.next] = value;
        self.next += 1;
        if self.next == self.buffer.len() {
            self.next = 0;
        }
        if evicted.is_none() {
            self.len += 1;
        }

        evicted
    }

    /// Number of values the buffer holds when full.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of values stored so far, capped at [`capacity`](Self::capacity).
    #[inline]
    #[must_use]
    pub fn filled_size(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    /// Oldest value, or NaN until full.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Price {
        if self.is_full() {
            self.buffer[self.next]
        } else {
            Price::NAN
        }
    }

    /// Newest value, or NaN until full.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Price {
        if self.is_full() {
            let cap = self.buffer.len();
            self.buffer[(self.next + cap - 1) % cap]
        } else {
            Price::NAN
        }
    }

    /// All values in storage order, or an empty slice until full.
    ///
    /// Order is unspecified. Use for order-independent aggregates
    /// (sum, min, max).
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Price] {
        if self.is_full() { &self.buffer } else { &[] }
    }

    /// Values from oldest to newest; empty until full.
    ///
    /// Each call returns a fresh iterator over the current content.
    #[inline]
    pub fn ordered_values(&self) -> impl Iterator<Item = Price> + Clone + '_ {
        let (older, newer): (&[Price], &[Price]) = if self.is_full() {
            (&self.buffer[self.next..], &self.buffer[..self.next])
        } else {
            (&[], &[])
        };

        older.iter().chain(newer).copied()
    }
}
