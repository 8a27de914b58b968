//! `SlotBuf`: the sole owner of a fixed-size heap allocation of element slots.

/// A fixed-size heap allocation of `T` slots with exclusive ownership.
///
/// `SlotBuf` has no notion of logical length versus capacity: every slot it
/// allocates is a live, initialized `T` for the buffer's entire lifetime.
/// Containers layered on top (such as `contig-array`) track which prefix of
/// the slots is user-visible.
///
/// The empty state is a zero-length allocation, which reserves no heap memory.
/// `SlotBuf` is move-only; moving transfers ownership of the allocation and
/// the compiler forbids further use of the source.
pub struct SlotBuf<T> {
    slots: Box<[T]>,
}

impl<T> SlotBuf<T> {
    /// Creates a buffer of exactly `capacity` default-valued slots.
    ///
    /// A `capacity` of zero yields the empty state without allocating.
    /// Allocation failure is fatal (the process aborts); there is no
    /// fallible allocation path.
    pub fn new(capacity: usize) -> SlotBuf<T>
    where
        T: Default,
    {
        SlotBuf {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }

    /// Creates a buffer that adopts an existing allocation.
    ///
    /// The slice becomes exclusively owned by the buffer and is released
    /// when the buffer is dropped or [`release`](SlotBuf::release)d.
    pub fn from_boxed(slots: Box<[T]>) -> SlotBuf<T> {
        SlotBuf { slots }
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the buffer is in the empty state (owns no slots).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns a raw pointer to the first slot without transferring ownership.
    ///
    /// For an empty buffer the pointer is dangling and must not be read.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot without transferring
    /// ownership.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr()
    }

    /// Returns a slice spanning every allocated slot.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns a mutable slice spanning every allocated slot.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Returns a reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](SlotBuf::len). Violating this is
    /// undefined behavior; it is caught by a `debug_assert!` in debug builds
    /// only.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.slots.len());
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](SlotBuf::len). Violating this is
    /// undefined behavior; it is caught by a `debug_assert!` in debug builds
    /// only.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.slots.len());
        unsafe { self.slots.get_unchecked_mut(index) }
    }

    /// Hands the allocation to the caller and leaves the buffer empty.
    ///
    /// After this call the buffer owns nothing; a second call returns the
    /// empty handle. The returned slice is the sole owner of the allocation,
    /// so a double free cannot occur.
    pub fn release(&mut self) -> Box<[T]> {
        std::mem::take(&mut self.slots)
    }

    /// Exchanges the owned allocations of two buffers in constant time.
    #[inline]
    pub fn swap(&mut self, other: &mut SlotBuf<T>) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }
}

impl<T> Default for SlotBuf<T> {
    fn default() -> Self {
        SlotBuf {
            slots: Box::default(),
        }
    }
}

impl<T> std::ops::Deref for SlotBuf<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> std::ops::DerefMut for SlotBuf<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SlotBuf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotBuf")
            .field("slots", &self.as_slice())
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn new_default_fills_every_slot() {
        let buf = SlotBuf::<u32>::new(8);
        assert_eq!(buf.len(), 8);
        assert!(buf.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_capacity_is_empty_state() {
        let buf = SlotBuf::<String>::new(0);
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn from_boxed_adopts_allocation() {
        let slots: Box<[u32]> = vec![1, 2, 3].into_boxed_slice();
        let buf = SlotBuf::from_boxed(slots);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn release_empties_and_is_idempotent() {
        let mut buf = SlotBuf::<u32>::new(4);
        let slots = buf.release();
        assert_eq!(slots.len(), 4);
        assert!(buf.is_empty());

        let again = buf.release();
        assert!(again.is_empty());
    }

    #[test]
    fn release_then_adopt_round_trips() {
        let mut buf = SlotBuf::from_boxed(vec![10u32, 20, 30].into_boxed_slice());
        let slots = buf.release();
        let buf2 = SlotBuf::from_boxed(slots);
        assert_eq!(buf2.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn swap_exchanges_allocations() {
        let mut a = SlotBuf::from_boxed(vec![1u32].into_boxed_slice());
        let mut b = SlotBuf::from_boxed(vec![2u32, 3].into_boxed_slice());
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[2, 3]);
        assert_eq!(b.as_slice(), &[1]);
    }

    #[test]
    fn take_leaves_source_empty_and_usable() {
        let mut buf = SlotBuf::<u32>::new(3);
        let taken = std::mem::take(&mut buf);
        assert_eq!(taken.len(), 3);
        assert!(buf.is_empty());

        buf.swap(&mut SlotBuf::new(2));
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn unchecked_access_within_bounds() {
        let mut buf = SlotBuf::from_boxed(vec![5u32, 6, 7].into_boxed_slice());
        unsafe {
            assert_eq!(*buf.get_unchecked(2), 7);
            *buf.get_unchecked_mut(0) = 50;
        }
        assert_eq!(buf.as_slice(), &[50, 6, 7]);
    }

    #[test]
    fn drop_runs_every_slot_destructor_once() {
        static DROPS: AtomicUsize = AtomicUsize::new(0);

        #[derive(Default)]
        struct Guard;

        impl Drop for Guard {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::SeqCst);
            }
        }

        {
            let mut buf = SlotBuf::<Guard>::new(5);
            // Moving the allocation out must not run destructors.
            let slots = buf.release();
            assert_eq!(DROPS.load(Ordering::SeqCst), 0);
            drop(slots);
            assert_eq!(DROPS.load(Ordering::SeqCst), 5);
        }
        // Dropping the released (empty) buffer frees nothing further.
        assert_eq!(DROPS.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn as_ptr_peeks_without_transfer() {
        let mut buf = SlotBuf::from_boxed(vec![1u32, 2, 3].into_boxed_slice());
        let ptr = buf.as_ptr();
        assert_eq!(ptr, buf.as_mut_ptr().cast_const());
        assert_eq!(unsafe { *ptr.add(2) }, 3);
        // The buffer still owns the allocation.
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn deref_exposes_slice_api() {
        let mut buf = SlotBuf::from_boxed(vec![3u32, 1, 2].into_boxed_slice());
        buf.sort_unstable();
        assert_eq!(&buf[..], &[1, 2, 3]);
    }
}
