mod array;
mod inner;
mod modify;

pub use array::Vector;
