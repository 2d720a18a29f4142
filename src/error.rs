//! Failures reported by [`Stack`](crate::Stack) operations.
//!
//! Every accessor that can observe an empty or too-short stack returns one of these instead of
//! panicking. Allocation failure is not represented here: it aborts through
//! `handle_alloc_error` like any other collection.
use thiserror::Error;

/// The stack held no items when one was required.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("stack is empty")]
pub struct EmptyStackError;

/// `pop_exact` asked for more items than the stack holds. Nothing was removed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot pop {requested} items, stack holds {available}")]
pub struct InsufficientElementsError {
  pub requested: usize,
  pub available: usize,
}

/// `grow_capacity_to` was asked to shrink. Use `clear_with_capacity` for that.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot shrink capacity from {current} to {requested}")]
pub struct CapacityError {
  pub requested: usize,
  pub current:   usize,
}

/// Any stack failure, for callers that mix operations behind a single `?`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
  #[error(transparent)]
  Empty(#[from] EmptyStackError),
  #[error(transparent)]
  InsufficientElements(#[from] InsufficientElementsError),
  #[error(transparent)]
  Capacity(#[from] CapacityError),
}

pub type Result<T, E = StackError> = core::result::Result<T, E>;
