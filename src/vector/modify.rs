use core::ops::Range;
use core::ptr;

use super::Vector;
use crate::types::AltAllocator;
use crate::types::ErrorReason;
use crate::types::VecErr;
use crate::types::VecResult;

impl<T, A: AltAllocator> Vector<T, A> {
    /// Makes `count` empty slots at `pos`, moving everything from `pos` on
    /// towards the end. Returns how many elements now sit behind the gap.
    ///
    /// Storage grows at most once. Until the caller calls `close_gap` the
    /// vector reports `pos` as its length, so if filling the gap panics the
    /// elements behind it are leaked rather than dropped twice.
    fn open_gap(&mut self, pos: usize, count: usize) -> VecResult<usize> {
        let len = self.len();
        if pos > len {
            return Err(VecErr::new(ErrorReason::OutOfRange));
        }
        self.grow_by(count)?;

        let tail = len - pos;
        self.set_len(pos);
        if count > 0 && tail > 0 {
            unsafe { ptr::copy(self.slot(pos).as_ptr(), self.slot(pos + count).as_ptr(), tail) };
        }
        return Ok(tail);
    }

    #[inline]
    fn close_gap(&mut self, pos: usize, count: usize, tail: usize) {
        self.set_len(pos + count + tail);
    }

    /// Inserts `value` at `pos`, shifting the elements after it. `pos == len()`
    /// appends.
    pub fn insert(&mut self, pos: usize, value: T) -> VecResult<()> {
        self.emplace(pos, move || value)?;
        return Ok(());
    }

    /// Inserts the value returned by `make` at `pos` and returns a reference to it.
    ///
    /// `make` only runs once the position is known to be valid and room exists.
    pub fn emplace<F: FnOnce() -> T>(&mut self, pos: usize, make: F) -> VecResult<&mut T> {
        let tail = self.open_gap(pos, 1)?;
        let slot = self.slot(pos);
        unsafe { self.allocator().construct(slot, make()) };
        self.close_gap(pos, 1, tail);
        return Ok(unsafe { &mut *slot.as_ptr() });
    }

    /// Inserts `count` copies of `value` at `pos`. The last copy is `value` itself.
    pub fn insert_n(&mut self, pos: usize, count: usize, value: T) -> VecResult<()>
    where
        T: Clone,
    {
        let tail = self.open_gap(pos, count)?;
        if count == 0 {
            self.close_gap(pos, 0, tail);
            return Ok(());
        }
        for i in 0..count - 1 {
            unsafe { self.allocator().construct(self.slot(pos + i), value.clone()) };
        }
        unsafe { self.allocator().construct(self.slot(pos + count - 1), value) };
        self.close_gap(pos, count, tail);
        return Ok(());
    }

    /// Inserts clones of every element of `src` at `pos`, keeping their order.
    pub fn insert_slice(&mut self, pos: usize, src: &[T]) -> VecResult<()>
    where
        T: Clone,
    {
        let tail = self.open_gap(pos, src.len())?;
        for (i, item) in src.iter().enumerate() {
            unsafe { self.allocator().construct(self.slot(pos + i), item.clone()) };
        }
        self.close_gap(pos, src.len(), tail);
        return Ok(());
    }

    /// Destroys the element at `pos` and closes the hole. `pos` has to name a
    /// live element, `len()` is out of range here.
    pub fn erase(&mut self, pos: usize) -> VecResult<()> {
        if pos >= self.len() {
            return Err(VecErr::new(ErrorReason::OutOfRange));
        }
        return self.erase_range(pos..pos + 1);
    }

    /// Destroys the elements in `range` and moves the rest down to close the hole.
    /// An empty range is fine as long as it lies within `0..=len()`.
    pub fn erase_range(&mut self, range: Range<usize>) -> VecResult<()> {
        let len = self.len();
        let Range { start, end } = range;
        if start > end || end > len {
            return Err(VecErr::new(ErrorReason::OutOfRange));
        }
        let count = end - start;
        if count == 0 {
            return Ok(());
        }

        // Hide everything from `start` while destroying, as in `open_gap`.
        self.set_len(start);
        unsafe { self.allocator().destroy_n(self.slot(start), count) };
        unsafe { ptr::copy(self.slot(end).as_ptr(), self.slot(start).as_ptr(), len - end) };
        self.set_len(len - count);
        return Ok(());
    }

    /// Shortens to `count` elements, or appends clones of `value` until there are `count`.
    pub fn resize(&mut self, count: usize, value: T) -> VecResult<()>
    where
        T: Clone,
    {
        let len = self.len();
        if count <= len {
            self.truncate(count);
            return Ok(());
        }
        return self.insert_n(len, count - len, value);
    }

    /// Like `resize`, but new slots get `T::default()`.
    pub fn resize_default(&mut self, count: usize) -> VecResult<()>
    where
        T: Default,
    {
        return self.resize_with(count, T::default);
    }

    /// Like `resize`, but new slots are filled by calling `make` once for each.
    pub fn resize_with<F: FnMut() -> T>(&mut self, count: usize, mut make: F) -> VecResult<()> {
        let len = self.len();
        if count <= len {
            self.truncate(count);
            return Ok(());
        }
        self.grow_by(count - len)?;
        for i in len..count {
            unsafe { self.allocator().construct(self.slot(i), make()) };
            self.set_len(i + 1);
        }
        return Ok(());
    }
}
