use alloc::alloc;
use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;
use super::AltAllocator;

/// This is basically a wrapper around the global heap allocator APIs.
///
/// See:
/// <https://doc.rust-lang.org/std/alloc/struct.Global.html>
///
/// It is stateless, so any two instances are interchangeable.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Global;

unsafe impl AltAllocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        // alloc::alloc() requires that the layout size be non-zero,
        // but the allocator API does not require this.
        if layout.size() == 0 {
            return Err(AllocError);
        };
        let ptr = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(ptr, layout.size()));
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    }
}
