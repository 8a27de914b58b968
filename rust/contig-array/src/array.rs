//! `Array`: a growable, randomly-indexable sequence in one contiguous allocation.

use contig_buffer::SlotBuf;
use contig_common::{Result, result::check_index};

use crate::grow::next_capacity;
use crate::reserve::Reserve;

/// A growable array of `T` backed by a single [`SlotBuf`] allocation.
///
/// The first `len` slots of the buffer are the array's visible contents;
/// the remaining slots are allocated spare capacity. `len <= capacity` holds
/// after every public operation.
///
/// Operations that may allocate (`push`, `insert`, `resize`, `reserve`)
/// require `T: Default`, because freshly allocated slots are always
/// initialized to the element type's default value. Deep-copying
/// constructors require `T: Clone` instead; bounds sit on the methods that
/// need them, not on the type.
///
/// Capacity only ever grows. Removal, truncation and [`clear`](Array::clear)
/// lower the length and leave the allocation in place.
pub struct Array<T> {
    buf: SlotBuf<T>,
    len: usize,
}

impl<T> Array<T> {
    /// Creates a new empty array with no allocation.
    pub fn new() -> Array<T> {
        Array {
            buf: SlotBuf::default(),
            len: 0,
        }
    }

    /// Creates an array of `len` default-valued elements.
    ///
    /// The capacity equals `len` exactly.
    pub fn with_len(len: usize) -> Array<T>
    where
        T: Default,
    {
        Array {
            buf: SlotBuf::new(len),
            len,
        }
    }

    /// Creates an array of `len` copies of `value`.
    pub fn from_value(len: usize, value: T) -> Array<T>
    where
        T: Clone,
    {
        Array {
            buf: SlotBuf::from_boxed(vec![value; len].into_boxed_slice()),
            len,
        }
    }

    /// Creates an array containing a copy of the provided slice.
    ///
    /// The capacity equals the slice length exactly.
    pub fn copy_from_slice(values: &[T]) -> Array<T>
    where
        T: Clone,
    {
        Array {
            buf: SlotBuf::from_boxed(values.to_vec().into_boxed_slice()),
            len: values.len(),
        }
    }

    /// Creates an empty array with at least `capacity` slots pre-allocated.
    pub fn with_capacity(capacity: usize) -> Array<T>
    where
        T: Default,
    {
        Array {
            buf: SlotBuf::new(capacity),
            len: 0,
        }
    }

    /// Creates an empty array pre-reserving the capacity carried by the hint.
    pub fn with_reserve(reserve: Reserve) -> Array<T>
    where
        T: Default,
    {
        Self::with_capacity(reserve.capacity())
    }

    /// Returns the number of visible elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no visible elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots allocated in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns a slice of the visible elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Returns a mutable slice of the visible elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }

    /// Returns a reference to the element at `index`, or an
    /// `IndexOutOfBounds` error when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        check_index(index, self.len)?;
        Ok(&self.buf[index])
    }

    /// Returns a mutable reference to the element at `index`, or an
    /// `IndexOutOfBounds` error when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.len)?;
        Ok(&mut self.buf[index])
    }

    /// Appends an element to the end of the array, growing if at capacity.
    pub fn push(&mut self, value: T)
    where
        T: Default,
    {
        if self.len == self.capacity() {
            self.grow(self.len + 1);
        }
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Removes the last element and returns it, or `None` if the array is
    /// empty.
    ///
    /// The vacated slot is reset to the default value; capacity is unchanged.
    pub fn pop(&mut self) -> Option<T>
    where
        T: Default,
    {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(std::mem::take(&mut self.buf[self.len]))
    }

    /// Inserts an element at `index`, shifting all elements from `index`
    /// through the end one slot rightward.
    ///
    /// Inserting at `index == len` is equivalent to [`push`](Array::push).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T)
    where
        T: Default,
    {
        assert!(
            index <= self.len,
            "insert index {index} out of range for length {}",
            self.len
        );
        if self.len == self.capacity() {
            self.grow(self.len + 1);
        }
        // The spare slot at `len` rotates down to `index` and is overwritten.
        self.buf[index..=self.len].rotate_right(1);
        self.buf[index] = value;
        self.len += 1;
    }

    /// Removes the element at `index` and returns it, shifting all elements
    /// after it one slot leftward.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T
    where
        T: Default,
    {
        assert!(
            index < self.len,
            "remove index {index} out of range for length {}",
            self.len
        );
        let value = std::mem::take(&mut self.buf[index]);
        // The vacated default slot rotates up past the end of the visible region.
        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;
        value
    }

    /// Clears the array, removing all visible elements.
    ///
    /// Capacity and the underlying allocation are retained.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Truncates the array to `new_len` elements.
    ///
    /// If `new_len` is greater than or equal to the current length, this has
    /// no effect. Capacity is unchanged; truncated slots keep their values
    /// but are no longer visible.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Resizes the array to exactly `new_len` elements.
    ///
    /// Growth beyond the current capacity reallocates per the growth policy
    /// and moves the existing elements; newly exposed slots are
    /// default-valued. Shrinking is logical truncation.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len > self.capacity() {
            // The fresh buffer's slots beyond the old length are already
            // default-valued.
            self.grow(new_len);
            self.len = new_len;
        } else if new_len > self.len {
            for slot in &mut self.buf[self.len..new_len] {
                *slot = T::default();
            }
            self.len = new_len;
        } else {
            self.truncate(new_len);
        }
    }

    /// Reserves capacity for at least `min_capacity` total slots.
    ///
    /// A request not exceeding the current capacity is a no-op; capacity
    /// never shrinks. Visible elements are untouched.
    pub fn reserve(&mut self, min_capacity: usize)
    where
        T: Default,
    {
        if min_capacity > self.capacity() {
            self.grow(min_capacity);
        }
    }

    /// Exchanges the contents, length and capacity of two arrays in constant
    /// time, without allocating.
    pub fn swap(&mut self, other: &mut Array<T>) {
        self.buf.swap(&mut other.buf);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Reallocates to `next_capacity(capacity, required)` slots and moves
    /// the visible elements into the new buffer.
    #[cold]
    fn grow(&mut self, required: usize)
    where
        T: Default,
    {
        let mut fresh = SlotBuf::new(next_capacity(self.capacity(), required));
        for (dst, src) in fresh[..self.len].iter_mut().zip(&mut self.buf[..self.len]) {
            std::mem::swap(dst, src);
        }
        self.buf = fresh;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Array<T> {
    /// Deep-copies the visible elements; the clone's capacity equals its
    /// length.
    fn clone(&self) -> Array<T> {
        Array::copy_from_slice(self.as_slice())
    }
}

impl<T> std::ops::Deref for Array<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> std::ops::DerefMut for Array<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Array")
            .field("values", &self.as_slice())
            .field("len", &self.len())
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(values: &[T]) -> Array<T> {
        Array::copy_from_slice(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(values: [T; N]) -> Array<T> {
        Array {
            buf: SlotBuf::from_boxed(Box::new(values)),
            len: N,
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Array<T> {
        let values: Box<[T]> = iter.into_iter().collect();
        let len = values.len();
        Array {
            buf: SlotBuf::from_boxed(values),
            len,
        }
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Array<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: PartialOrd> PartialOrd for Array<T> {
    /// Lexicographic, element-wise ordering over the visible regions.
    fn partial_cmp(&self, other: &Array<T>) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Array<T> {
    fn cmp(&self, other: &Array<T>) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the array, yielding exactly the visible elements. Spare
    /// capacity slots are dropped.
    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        let mut values = self.buf.release().into_vec();
        values.truncate(len);
        values.into_iter()
    }
}
