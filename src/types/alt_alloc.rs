use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// The rust allocator API is not stable yet. Therefore, this trait is the raw
/// storage provider behind every `Allocator`. It only deals in byte layouts, it
/// knows nothing about the values that later live in the memory.
///
/// This mirrors the safety requirements of the allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
///
/// # Safety
///
/// Memory returned by `allocate` must stay valid, and must not be handed out
/// again, until it is passed back to `deallocate`.
pub unsafe trait AltAllocator {
    /// Allocates a chunk of memory with the given layout.
    ///
    /// On success it returns a pointer to the allocated memory, which is at
    /// least `layout.size()` bytes long and aligned to `layout.align()`.
    ///
    /// If the allocation fails or has some kind of error it will return
    /// an `AllocError`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Deallocates the chunk of memory pointed at by `ptr`
    ///
    /// # Safety
    ///
    /// This memory must have only been allocated by this allocator.
    /// The layout must match the layout provided when the chunk was
    /// allocated.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}
