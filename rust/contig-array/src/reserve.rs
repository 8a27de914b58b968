//! The reservation hint consumed by [`crate::Array::with_reserve`].

/// A requested capacity for reservation-only array construction.
///
/// Carries a single value and no behavior; it exists so that "reserve this
/// much, but stay empty" is a distinct constructor from "create this many
/// elements".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserve(usize);

impl Reserve {
    /// Creates a hint requesting `capacity` slots.
    pub fn new(capacity: usize) -> Reserve {
        Reserve(capacity)
    }

    /// Returns the requested capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.0
    }
}

impl From<usize> for Reserve {
    fn from(capacity: usize) -> Reserve {
        Reserve(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_requested_capacity() {
        assert_eq!(Reserve::new(16).capacity(), 16);
        assert_eq!(Reserve::from(3).capacity(), 3);
    }
}
