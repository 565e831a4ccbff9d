use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::ptr;
use core::ptr::NonNull;

use log::trace;

use super::AltAllocator;
use super::ErrorReason;
use super::Global;
use super::VecErr;
use super::VecResult;

/// A typed allocator for values of `T`.
///
/// It hands out storage for a number of `T`s, and separately from that it
/// constructs and destroys values inside storage it handed out. Keeping the two
/// apart is what lets a `Vector` move its elements between two regions without
/// an extra allocation.
///
/// The allocator itself carries no state besides the raw allocator `A` it wraps.
/// For `Global` that is nothing at all, so every instance is interchangeable with
/// every other one.
pub struct Allocator<T, A: AltAllocator = Global> {
    raw: A,
    _ph: PhantomData<fn() -> T>,
}

impl<T> Allocator<T, Global> {
    /// Creates an allocator backed by the global heap.
    pub const fn new() -> Self {
        return Self::new_in(Global);
    }
}

impl<T, A: AltAllocator> Allocator<T, A> {
    const IS_ZST: bool = size_of::<T>() == 0;

    /// Wraps the raw allocator `raw`.
    pub const fn new_in(raw: A) -> Self {
        return Self {
            raw: raw,
            _ph: PhantomData,
        };
    }

    /// The raw allocator backing this one.
    #[inline]
    pub const fn raw(&self) -> &A {
        return &self.raw;
    }

    /// Produces an allocator for a different element type backed by a copy of
    /// the same raw allocator.
    pub fn rebind<U>(&self) -> Allocator<U, A>
    where
        A: Clone,
    {
        return Allocator::new_in(self.raw.clone());
    }

    /// The largest element count a single `allocate` call will grant.
    ///
    /// Rust bounds every allocation to `isize::MAX` bytes, so this is that
    /// limit divided by the size of `T`. Zero sized types never need memory
    /// and are limited only by `usize`.
    #[inline]
    pub const fn max_size(&self) -> usize {
        if Self::IS_ZST {
            return usize::MAX;
        }
        return (isize::MAX as usize) / size_of::<T>();
    }

    /// Requests uninitialized storage for `n` values of `T`.
    ///
    /// Asking for zero elements is not an error, it simply returns `None`
    /// without touching the raw allocator. A request over `max_size()` is
    /// refused with `ErrorReason::CapacityOverflow` before any allocation is
    /// attempted.
    ///
    /// None of the returned slots hold a value until `construct` is called on them.
    pub fn allocate(&self, n: usize) -> VecResult<Option<NonNull<T>>> {
        if n == 0 {
            return Ok(None);
        }
        if n > self.max_size() {
            return Err(VecErr::new(ErrorReason::CapacityOverflow));
        }
        if Self::IS_ZST {
            return Ok(Some(NonNull::dangling()));
        }

        let Ok(layout) = Layout::array::<T>(n) else {
            return Err(VecErr::new(ErrorReason::LayoutFailure));
        };
        let mem = self.raw.allocate(layout)?;
        trace!("allocated {} bytes ({} x {})", layout.size(), n, size_of::<T>());
        return Ok(Some(mem.cast()));
    }

    /// Releases storage obtained from `allocate`. Passing `None` does nothing.
    ///
    /// This only returns memory, it never runs destructors.
    ///
    /// # Safety
    ///
    /// `ptr` and `n` must be the result and the argument of one earlier
    /// `allocate` call on an equal allocator, and every value constructed in
    /// that storage must already be destroyed or moved out.
    pub unsafe fn deallocate(&self, ptr: Option<NonNull<T>>, n: usize) {
        let Some(ptr) = ptr else {
            return;
        };
        if Self::IS_ZST || n == 0 {
            return;
        }
        // Safety: `allocate(n)` already built this exact layout successfully.
        let layout = unsafe { Layout::from_size_align_unchecked(n * size_of::<T>(), align_of::<T>()) };
        unsafe { self.raw.deallocate(ptr.cast(), layout) };
        trace!("released {} bytes", layout.size());
    }

    /// Places `value` into the slot at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point into storage from `allocate` and the slot must not
    /// currently hold a value, otherwise that value is leaked.
    #[inline]
    pub unsafe fn construct(&self, ptr: NonNull<T>, value: T) {
        unsafe { ptr.write(value) };
    }

    /// Runs the destructor of the value at `ptr` without releasing its storage.
    /// Passing `None` does nothing.
    ///
    /// # Safety
    ///
    /// `ptr` must point at a live value, which is no longer live afterwards.
    #[inline]
    pub unsafe fn destroy(&self, ptr: Option<NonNull<T>>) {
        let Some(ptr) = ptr else {
            return;
        };
        unsafe { ptr::drop_in_place(ptr.as_ptr()) };
    }

    /// Destroys the `n` consecutive values starting at `ptr`.
    ///
    /// If one destructor panics the remaining values are still destroyed.
    ///
    /// # Safety
    ///
    /// Same as `destroy`, for every slot in `ptr..ptr + n`.
    #[inline]
    pub unsafe fn destroy_n(&self, ptr: NonNull<T>, n: usize) {
        let slice = ptr::slice_from_raw_parts_mut(ptr.as_ptr(), n);
        unsafe { ptr::drop_in_place(slice) };
    }
}

impl<T, A: AltAllocator + Default> Default for Allocator<T, A> {
    fn default() -> Self {
        return Self::new_in(A::default());
    }
}

impl<T, A: AltAllocator + Clone> Clone for Allocator<T, A> {
    fn clone(&self) -> Self {
        return Self::new_in(self.raw.clone());
    }
}

impl<T, A: AltAllocator + Copy> Copy for Allocator<T, A> {}

impl<T, U, A: AltAllocator + PartialEq> PartialEq<Allocator<U, A>> for Allocator<T, A> {
    fn eq(&self, other: &Allocator<U, A>) -> bool {
        return self.raw == other.raw;
    }
}

impl<T, A: AltAllocator + Eq> Eq for Allocator<T, A> {}

impl<T, A: AltAllocator + fmt::Debug> fmt::Debug for Allocator<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Allocator").field("raw", &self.raw).finish()
    }
}
