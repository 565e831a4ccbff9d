use core::ptr;
use core::ptr::NonNull;

use log::debug;

use crate::types::Allocator;
use crate::types::AltAllocator;
use crate::types::ErrorReason;
use crate::types::VecErr;
use crate::types::VecResult;

/// Picks the capacity to grow to so that `required` elements fit.
///
/// That is the smallest power of two that is at least `required`. Callers only
/// ask when `required` is over the current capacity, so the result is always
/// strictly larger than it. When the power of two would pass `max` the result
/// is clamped to `max`.
pub(crate) const fn grown_capacity(required: usize, max: usize) -> VecResult<usize> {
    if required > max {
        return Err(VecErr::new(ErrorReason::CapacityOverflow));
    }
    let Some(target) = required.checked_next_power_of_two() else {
        return Ok(max);
    };
    if target > max {
        return Ok(max);
    }
    return Ok(target);
}

/// The storage half of a `Vector`: the region, its size in elements and the
/// allocator it came from. It never looks at the values inside, so releasing
/// the region on drop is all it does; destroying live values is up to the owner.
pub(crate) struct Inner<T, A: AltAllocator> {
    ptr:      NonNull<T>,
    capacity: usize,
    alloc:    Allocator<T, A>,
}

impl<T, A: AltAllocator> Inner<T, A> {
    pub(crate) const fn new_in(alloc: Allocator<T, A>) -> Self {
        return Self {
            ptr:      NonNull::dangling(),
            capacity: 0,
            alloc:    alloc,
        };
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        return self.capacity;
    }

    /// Start of the region. Dangling but aligned while nothing is allocated.
    #[inline]
    pub(crate) const fn ptr(&self) -> NonNull<T> {
        return self.ptr;
    }

    #[inline]
    pub(crate) const fn allocator(&self) -> &Allocator<T, A> {
        return &self.alloc;
    }

    #[inline]
    const fn storage(&self) -> Option<NonNull<T>> {
        if self.capacity == 0 {
            return None;
        }
        return Some(self.ptr);
    }

    /// Moves the first `len` values into a new region of `capacity` slots and
    /// releases the old region.
    ///
    /// The new region is acquired before anything else happens, so on error
    /// the old region and every value in it are untouched.
    pub(crate) fn reallocate(&mut self, len: usize, capacity: usize) -> VecResult<()> {
        debug_assert!(len <= self.capacity && capacity > self.capacity);

        let Some(new) = self.alloc.allocate(capacity)? else {
            return Ok(());
        };

        // A move is a bitwise copy, afterwards the old slots count as uninitialized.
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), new.as_ptr(), len) };
        unsafe { self.alloc.deallocate(self.storage(), self.capacity) };

        debug!("storage grew from {} to {} elements", self.capacity, capacity);
        self.ptr = new;
        self.capacity = capacity;
        return Ok(());
    }

    /// Grows following the power of two policy until `required` elements fit.
    pub(crate) fn grow_for(&mut self, len: usize, required: usize) -> VecResult<()> {
        if required <= self.capacity {
            return Ok(());
        }
        let target = grown_capacity(required, self.alloc.max_size())?;
        return self.reallocate(len, target);
    }
}

impl<T, A: AltAllocator> Drop for Inner<T, A> {
    fn drop(&mut self) {
        unsafe { self.alloc.deallocate(self.storage(), self.capacity) };
    }
}
