//! Allocator types and traits used by `Vector`.
//!
//! There are two layers. `AltAllocator` hands out raw, `Layout` sized chunks of
//! memory, and `Allocator` sits on top of it, dealing in element counts and managing
//! the lifetime of the values placed into that memory.
//!
//! If built with the `alloc_api2` feature, `AltAllocator` is implemented for every
//! type implementing the `allocator_api2` `Allocator` trait.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod allocator;
mod alt_alloc;
mod errors;
mod global;
#[cfg(test)]
mod tests;

pub use allocator::Allocator;
pub use alt_alloc::AltAllocator;
pub use errors::*;
pub use global::Global;
