//! The capacity growth policy shared by every growing mutator.

/// Computes the capacity to allocate when `required` slots are needed and
/// only `capacity` are available.
///
/// The new capacity is `max(required, capacity * 2)`: doubling amortizes a
/// sequence of appends to O(1) each, while `required` dominates when a single
/// request (a large `resize` or `reserve`) outgrows the doubled size. For an
/// empty array appending one element this yields exactly 1.
#[inline]
pub fn next_capacity(capacity: usize, required: usize) -> usize {
    debug_assert!(required > capacity);
    required.max(capacity * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_to_one() {
        assert_eq!(next_capacity(0, 1), 1);
    }

    #[test]
    fn doubles_when_doubling_suffices() {
        assert_eq!(next_capacity(1, 2), 2);
        assert_eq!(next_capacity(2, 3), 4);
        assert_eq!(next_capacity(4, 5), 8);
        assert_eq!(next_capacity(1024, 1025), 2048);
    }

    #[test]
    fn required_dominates_large_requests() {
        assert_eq!(next_capacity(0, 10), 10);
        assert_eq!(next_capacity(4, 100), 100);
        assert_eq!(next_capacity(64, 129), 129);
    }
}
