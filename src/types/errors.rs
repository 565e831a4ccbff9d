use thiserror::Error;

/// This indicates the raw allocator could not satisfy a request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("A memory allocation error occurred.")]
pub struct AllocError;

/// This enum lets one figure out what kind of error occurred during
/// a `Vector` or `Allocator` operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorReason {
    /// A position or index was outside the live range.
    #[error("Position is out of range.")]
    OutOfRange = 1,
    /// The requested element count is larger than `max_size()`, or
    /// computing it overflowed.
    #[error("Requested capacity exceeds the allocator's maximum size.")]
    CapacityOverflow,
    /// A valid layout could not be built for the request.
    #[error("Failed to create layout.")]
    LayoutFailure,
    /// The underlying allocator refused the request.
    #[error("An allocation failure occurred.")]
    AllocFailure,
}

/// A type alias for `Result<T, VecErr>`
pub type VecResult<T> = Result<T, VecErr>;

/// This is used to indicate an error during a `Vector` or `Allocator` operation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct VecErr(ErrorReason);

impl VecErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }

    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }

    /// `true` when a checked access or a positional operation was given a
    /// position outside the live range.
    pub const fn is_out_of_range(self) -> bool {
        return matches!(self.0, ErrorReason::OutOfRange);
    }

    /// `true` for every storage related failure: the allocation limit was exceeded,
    /// no layout could be built, or the allocator refused the request.
    pub const fn is_out_of_memory(self) -> bool {
        return !self.is_out_of_range();
    }
}

impl From<AllocError> for VecErr {
    fn from(_: AllocError) -> Self {
        return Self::new(ErrorReason::AllocFailure);
    }
}
