//! # Vector
//!
//! The `ctm_vector` crate provides a `#[no_std]` growable, contiguous array, `Vector`,
//! together with the allocator it draws its storage from.
//!
//! Storage and values are handled separately. `Allocator` hands out room for a
//! number of elements and constructs or destroys values in that room, and `Vector`
//! uses it to keep its elements `0..len()` live while growing the capacity through
//! powers of two (0, 1, 2, 4, 8, ...).
//!
//! Every operation that may allocate returns a `VecResult` instead of panicking on
//! allocation failure, and positional operations validate their position before
//! touching anything. Either way a failed call leaves the vector as it was.
//!
//! ```
//! use ctm_vector::Vector;
//!
//! let mut v = Vector::from_array([1, 2, 3, 4, 5]).unwrap();
//! assert_eq!(v.capacity(), 8);
//!
//! v.insert(1, 100).unwrap();
//! v.erase_range(3..5).unwrap();
//! assert_eq!(v, [1, 100, 2, 5]);
//!
//! assert!(v.at(4).is_err());
//! ```
//!
//! Custom storage comes from implementing `AltAllocator`, a raw allocator that
//! works like the unstable `Allocator` trait, and wrapping it with `Allocator::new_in`.
//!
//! # Feature Flags
//! * `alloc_api2` - Implements `AltAllocator` for every allocator implementing the
//! `allocator_api2` `Allocator` trait.
//!
//! Storage activity is reported through the `log` facade: `trace` for each
//! allocation and release, `debug` whenever a vector moves to a larger region.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod types;
mod vector;

pub use types::Allocator;
pub use types::VecErr;
pub use types::VecResult;
pub use vector::Vector;
