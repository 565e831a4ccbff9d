use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;
use std::format;
use std::string::String;
use std::string::ToString;

use super::AllocError;
use super::Allocator;
use super::AltAllocator;
use super::ErrorReason;
use super::Global;
use super::VecErr;

struct NoAlloc;

unsafe impl AltAllocator for NoAlloc {
    fn allocate(&self, _: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return Err(AllocError);
    }
    unsafe fn deallocate(&self, _: NonNull<u8>, _: Layout) {
        return;
    }
}

struct DropCount<'a>(&'a Cell<usize>);

impl Drop for DropCount<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn zero_is_not_an_allocation() {
    // `NoAlloc` would fail any real request.
    let alloc = Allocator::<u64, NoAlloc>::new_in(NoAlloc);
    assert_eq!(alloc.allocate(0), Ok(None));
    unsafe { alloc.deallocate(None, 0) };
    unsafe { alloc.destroy(None) };
}

#[test]
fn max_size_limits() {
    assert_eq!(Allocator::<u8>::new().max_size(), isize::MAX as usize);
    assert_eq!(Allocator::<u64>::new().max_size(), (isize::MAX as usize) / 8);
    assert_eq!(Allocator::<[u8; 3]>::new().max_size(), (isize::MAX as usize) / 3);
    assert_eq!(Allocator::<()>::new().max_size(), usize::MAX);
}

#[test]
fn over_max_size_is_refused_first() {
    // The raw allocator is never asked, otherwise this would be `AllocFailure`.
    let alloc = Allocator::<u32, NoAlloc>::new_in(NoAlloc);
    let err = alloc.allocate(alloc.max_size() + 1).unwrap_err();
    assert_eq!(err.reason(), ErrorReason::CapacityOverflow);

    let err = alloc.allocate(1).unwrap_err();
    assert_eq!(err.reason(), ErrorReason::AllocFailure);
}

#[test]
fn construct_and_destroy_are_separate_from_storage() {
    let drops = Cell::new(0);
    let alloc = Allocator::<DropCount<'_>>::new();
    let ptr = alloc.allocate(2).unwrap().unwrap();

    unsafe {
        alloc.construct(ptr, DropCount(&drops));
        alloc.construct(ptr.add(1), DropCount(&drops));
    }
    assert_eq!(drops.get(), 0);

    unsafe { alloc.destroy(Some(ptr)) };
    assert_eq!(drops.get(), 1);

    // The slot can host a value again once destroyed.
    unsafe { alloc.construct(ptr, DropCount(&drops)) };
    unsafe { alloc.destroy_n(ptr, 2) };
    assert_eq!(drops.get(), 3);

    unsafe { alloc.deallocate(Some(ptr), 2) };
    assert_eq!(drops.get(), 3);
}

#[test]
fn strings_live_in_allocated_storage() {
    let alloc = Allocator::<String>::new();
    let ptr = alloc.allocate(1).unwrap().unwrap();
    unsafe { alloc.construct(ptr, "hello".to_string()) };
    assert_eq!(unsafe { ptr.as_ref() }, "hello");
    unsafe { alloc.destroy(Some(ptr)) };
    unsafe { alloc.deallocate(Some(ptr), 1) };
}

#[test]
fn zero_sized_storage_is_dangling() {
    let alloc = Allocator::<(), NoAlloc>::new_in(NoAlloc);
    let ptr = alloc.allocate(1000).unwrap().unwrap();
    assert_eq!(ptr, NonNull::dangling());
    unsafe { alloc.deallocate(Some(ptr), 1000) };
}

#[test]
fn interchangeable_instances() {
    let a = Allocator::<u8>::new();
    let b = Allocator::<u8>::default();
    let c = a.rebind::<String>();
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(c.max_size(), (isize::MAX as usize) / size_of::<String>());

    // Storage from one instance can go back through another.
    let ptr = a.allocate(16).unwrap();
    unsafe { b.deallocate(ptr, 16) };

    assert_eq!(format!("{:?}", c), "Allocator { raw: Global }");
}

#[test]
fn global_refuses_zero_sized_layouts() {
    let layout = Layout::new::<()>();
    assert_eq!(Global.allocate(layout), Err(AllocError));
}

#[test]
fn error_messages() {
    let err = VecErr::from(AllocError);
    assert_eq!(err.reason(), ErrorReason::AllocFailure);
    assert!(err.is_out_of_memory());
    assert!(!err.is_out_of_range());
    assert_eq!(err.to_string(), "An allocation failure occurred.");
    assert_eq!(AllocError.to_string(), "A memory allocation error occurred.");
    assert_eq!(
        VecErr::new(ErrorReason::CapacityOverflow).to_string(),
        "Requested capacity exceeds the allocator's maximum size."
    );
}
