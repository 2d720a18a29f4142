//! The LIFO container itself.
//!
//! The top of the stack is the back of the buffer. Every accessor that needs an item returns a
//! `Result`, so an empty stack is always reported and never papered over with a default value.
mod buffer;

use crate::error::{CapacityError, EmptyStackError, InsufficientElementsError};
use crate::format::Format;
use alloc::string::String;
use alloc::vec::Vec;
use buffer::{capacity_overflow, RawBuffer};
use core::{fmt, ptr, slice};
use tracing::{debug, trace};

/// Generic LIFO stack: last in, first out.
///
/// Capacity is exact. It changes only when a push runs out of room (doubling), or when
/// [`grow_capacity_to`](Stack::grow_capacity_to) or
/// [`clear_with_capacity`](Stack::clear_with_capacity) ask for a specific size.
pub struct Stack<T> {
  buf: RawBuffer<T>,
  len: usize,
}

impl<T> Stack<T> {
  /// An empty stack. Does not allocate.
  pub const fn new() -> Self {
    Stack { buf: RawBuffer::empty(), len: 0 }
  }

  /// An empty stack with room for exactly `capacity` items.
  pub fn with_capacity(capacity: usize) -> Self {
    Stack { buf: RawBuffer::new(capacity), len: 0 }
  }

  /// Pushes `items` in order. The last one becomes the top.
  pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
    let mut stack = Stack::new();
    stack.push_many(items);
    stack
  }

  #[inline]
  pub fn len(&self) -> usize { self.len }

  #[inline]
  pub fn capacity(&self) -> usize { self.buf.capacity() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.len == 0 }

  #[inline]
  pub fn has_items(&self) -> bool { self.len > 0 }

  /// Adds an item as the new top of the stack.
  pub fn push(&mut self, item: T) {
    if self.len == self.capacity() {
      self.grow_for(self.len + 1);
    }
    unsafe { self.buf.as_ptr().add(self.len).write(item) };
    self.len += 1;
  }

  /// Pushes each item in order. The last one becomes the top.
  ///
  /// Capacity ends up exactly where the same number of single pushes would leave it.
  pub fn push_many<I: IntoIterator<Item = T>>(&mut self, items: I) {
    let items = items.into_iter();
    let (lower, _) = items.size_hint();
    match self.len.checked_add(lower) {
      Some(needed) => self.grow_for(needed),
      None => capacity_overflow(),
    }
    for item in items {
      self.push(item);
    }
  }

  /// Removes the top item and returns it.
  pub fn pop(&mut self) -> Result<T, EmptyStackError> {
    if self.len == 0 {
      return Err(EmptyStackError);
    }
    self.len -= 1;
    Ok(unsafe { self.buf.as_ptr().add(self.len).read() })
  }

  /// Removes the top item and drops it.
  pub fn discard(&mut self) -> Result<(), EmptyStackError> {
    self.pop().map(drop)
  }

  /// Pops `min(n, len)` items, top first. Never fails.
  pub fn pop_up_to(&mut self, n: usize) -> Vec<T> {
    self.take_top(n.min(self.len))
  }

  /// Pops exactly `n` items, top first. If fewer are present, nothing is removed.
  pub fn pop_exact(&mut self, n: usize) -> Result<Vec<T>, InsufficientElementsError> {
    if n > self.len {
      debug!(requested = n, available = self.len, "rejected pop_exact");
      return Err(InsufficientElementsError { requested: n, available: self.len });
    }
    Ok(self.take_top(n))
  }

  /// Returns a copy of the top item without removing it.
  pub fn top(&self) -> Result<T, EmptyStackError> where T: Clone {
    self.peek().cloned()
  }

  /// Borrows the top item without removing it.
  pub fn peek(&self) -> Result<&T, EmptyStackError> {
    self.as_slice().last().ok_or(EmptyStackError)
  }

  /// Mutable access to the top item in place.
  ///
  /// The borrow ends before the next push, pop or clear can be made.
  pub fn top_mut(&mut self) -> Result<&mut T, EmptyStackError> {
    self.as_mut_slice().last_mut().ok_or(EmptyStackError)
  }

  /// Removes all items. Capacity is unchanged.
  pub fn clear(&mut self) {
    let items = ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len);
    // Forget the items first so a panicking destructor can't lead to a double drop.
    self.len = 0;
    unsafe { ptr::drop_in_place(items) }
  }

  /// Removes all items and leaves exactly `capacity` slots.
  ///
  /// The buffer is only reallocated when the capacity actually changes.
  pub fn clear_with_capacity(&mut self, capacity: usize) {
    self.clear();
    if capacity != self.capacity() {
      trace!(from = self.capacity(), to = capacity, "reallocating empty stack");
      self.buf = RawBuffer::new(capacity);
    }
  }

  /// Reallocates to exactly `capacity` slots, keeping every item in order.
  ///
  /// Capacity never shrinks here: asking for less than the current capacity is an error and
  /// leaves the stack untouched.
  pub fn grow_capacity_to(&mut self, capacity: usize) -> Result<(), CapacityError> {
    let current = self.capacity();
    if capacity < current {
      debug!(requested = capacity, current, "rejected capacity shrink");
      return Err(CapacityError { requested: capacity, current });
    }
    if capacity > current {
      self.reallocate(capacity);
    }
    Ok(())
  }

  /// The items from bottom to top.
  pub fn as_slice(&self) -> &[T] {
    unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
  }

  /// Renders the items according to `format`.
  pub fn render<C: Fn(&T) -> String>(&self, format: &Format<T, C>) -> String {
    format.render(self)
  }

  /// Writes the items according to `format` into `out`.
  pub fn write_to<C, W>(&self, format: &Format<T, C>, out: &mut W) -> fmt::Result
  where C: Fn(&T) -> String, W: fmt::Write {
    format.write_to(self, out)
  }

  fn as_mut_slice(&mut self) -> &mut [T] {
    unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
  }

  /// Pops `count` items into a vec, top first.
  fn take_top(&mut self, count: usize) -> Vec<T> {
    debug_assert!(count <= self.len);
    let mut taken = Vec::with_capacity(count);
    for _ in 0..count {
      self.len -= 1;
      taken.push(unsafe { self.buf.as_ptr().add(self.len).read() });
    }
    taken
  }

  /// Doubles the capacity until `needed` items fit.
  fn grow_for(&mut self, needed: usize) {
    let current = self.capacity();
    if needed <= current { return; }
    let mut capacity = current;
    while capacity < needed {
      capacity = match capacity.checked_mul(2) {
        Some(doubled) => doubled.max(1),
        None => capacity_overflow(),
      };
    }
    self.reallocate(capacity);
  }

  fn reallocate(&mut self, capacity: usize) {
    trace!(len = self.len, from = self.capacity(), to = capacity, "reallocating stack");
    unsafe { self.buf.relocate(self.len, capacity) }
  }
}

impl<T> Drop for Stack<T> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Self { Stack::new() }
}

impl<T: Clone> Clone for Stack<T> {
  fn clone(&self) -> Self {
    let mut stack = Stack::with_capacity(self.capacity());
    stack.push_many(self.as_slice().iter().cloned());
    stack
  }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_list().entries(self.as_slice()).finish()
  }
}

/// Default rendering: `[top ... bottom]`.
impl<T: fmt::Display> fmt::Display for Stack<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    Format::new().write_to(self, f)
  }
}

impl<T: PartialEq> PartialEq for Stack<T> {
  fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> FromIterator<T> for Stack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self { Stack::from_items(items) }
}

impl<T> Extend<T> for Stack<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) { self.push_many(items) }
}

impl<T> From<Vec<T>> for Stack<T> {
  fn from(items: Vec<T>) -> Self { Stack::from_items(items) }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
  fn from(items: [T; N]) -> Self { Stack::from_items(items) }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::rc::Rc;
  use alloc::vec;
  use core::cell::Cell;

  struct Counted<'a>(&'a Cell<usize>);

  impl Drop for Counted<'_> {
    fn drop(&mut self) { self.0.set(self.0.get() + 1) }
  }

  #[test]
  fn growth_doubles_from_one() {
    let mut s = Stack::new();
    let mut caps = vec![];
    for i in 0..9 {
      s.push(i);
      caps.push(s.capacity());
    }
    assert_eq!(caps, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
  }

  #[test]
  fn push_many_matches_single_pushes() {
    let mut bulk = Stack::new();
    bulk.push_many(0..5);
    let mut single = Stack::new();
    for i in 0..5 { single.push(i) }
    assert_eq!(bulk.capacity(), single.capacity());
    assert_eq!(bulk, single);
  }

  #[test]
  fn push_many_without_size_hint() {
    let mut s = Stack::new();
    s.push_many((0..6).filter(|i| i % 2 == 0));
    assert_eq!(s.as_slice(), [0, 2, 4]);
    assert_eq!(s.capacity(), 4);
  }

  #[test]
  fn clear_drops_every_item_once() {
    let drops = Cell::new(0);
    let mut s = Stack::new();
    for _ in 0..5 { s.push(Counted(&drops)) }
    let cap = s.capacity();
    s.clear();
    assert_eq!(drops.get(), 5);
    assert_eq!(s.capacity(), cap);
    drop(s);
    assert_eq!(drops.get(), 5);
  }

  #[test]
  fn drop_releases_items() {
    let drops = Cell::new(0);
    {
      let mut s = Stack::with_capacity(2);
      s.push_many([Counted(&drops), Counted(&drops), Counted(&drops)]);
      let popped = s.pop_up_to(1);
      assert_eq!(popped.len(), 1);
      assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 3);
  }

  #[test]
  fn clear_with_capacity_drops_items() {
    let drops = Cell::new(0);
    let mut s = Stack::from_items([Counted(&drops), Counted(&drops)]);
    s.clear_with_capacity(10);
    assert_eq!(drops.get(), 2);
    assert_eq!((s.len(), s.capacity()), (0, 10));
  }

  #[test]
  fn grow_keeps_items() {
    let item = Rc::new(7);
    let mut s = Stack::from_items([item.clone(), item.clone()]);
    s.grow_capacity_to(100).unwrap();
    assert_eq!(s.capacity(), 100);
    assert_eq!(Rc::strong_count(&item), 3);
    assert_eq!(*s.pop().unwrap(), 7);
    drop(s);
    assert_eq!(Rc::strong_count(&item), 1);
  }

  #[test]
  fn zero_sized_items() {
    let mut s = Stack::new();
    s.push_many([(), (), ()]);
    assert_eq!((s.len(), s.capacity()), (3, 4));
    assert_eq!(s.pop(), Ok(()));
    assert_eq!(s.pop_exact(2), Ok(vec![(), ()]));
    assert_eq!(s.pop(), Err(EmptyStackError));
  }

  #[test]
  fn clone_keeps_capacity() {
    let mut s = Stack::with_capacity(10);
    s.push_many(["a", "b"]);
    let c = s.clone();
    assert_eq!(c.capacity(), 10);
    assert_eq!(c.as_slice(), ["a", "b"]);
  }

  #[test]
  fn debug_lists_bottom_to_top() {
    let s = Stack::from_items([1, 2, 3]);
    assert_eq!(alloc::format!("{:?}", s), "[1, 2, 3]");
  }
}
