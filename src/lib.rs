#![cfg_attr(not(feature="std"), no_std)]

extern crate alloc;

#[cfg(not(feature="alloc"))]
compile_error!("gstack needs a global allocator, enable the `alloc` or `std` feature");

pub mod error;
pub mod format;
pub mod stack;

pub use error::{CapacityError, EmptyStackError, InsufficientElementsError, StackError};
pub use format::Format;
pub use stack::Stack;
