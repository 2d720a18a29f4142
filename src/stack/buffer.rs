use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::marker::PhantomData;
use core::mem::{self, size_of};
use core::ptr::{self, NonNull};

/// A GlobalAlloc-allocated run of `cap` uninitialised `T` slots.
///
/// The buffer only owns the memory. Tracking which slots hold live values (and dropping them) is
/// the owner's job.
pub(crate) struct RawBuffer<T> {
  start: NonNull<T>,
  cap:   usize, // Exactly what was asked for, never rounded.
  _owns: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
  /// A buffer with no slots. Does not allocate.
  pub(crate) const fn empty() -> Self {
    RawBuffer { start: NonNull::dangling(), cap: 0, _owns: PhantomData }
  }

  /// Allocates a buffer with exactly `cap` slots.
  ///
  /// Zero-sized types never touch the allocator; their capacity is only bookkeeping.
  pub(crate) fn new(cap: usize) -> Self {
    if cap == 0 || is_zst::<T>() {
      return RawBuffer { start: NonNull::dangling(), cap, _owns: PhantomData };
    }
    let layout = layout_for::<T>(cap);
    match NonNull::new(unsafe { alloc(layout) }.cast::<T>()) {
      Some(start) => RawBuffer { start, cap, _owns: PhantomData },
      None => handle_alloc_error(layout),
    }
  }

  #[inline(always)]
  pub(crate) fn capacity(&self) -> usize { self.cap }

  #[inline(always)]
  pub(crate) fn as_ptr(&self) -> *mut T { self.start.as_ptr() }

  /// Moves the first `len` values into a fresh buffer of `cap` slots and releases the old one.
  ///
  /// # Safety
  ///
  /// * The first `len` slots must be initialised.
  /// * `len <= cap`.
  pub(crate) unsafe fn relocate(&mut self, len: usize, cap: usize) {
    debug_assert!(len <= cap);
    let mut fresh = RawBuffer::new(cap);
    ptr::copy_nonoverlapping(self.as_ptr(), fresh.as_ptr(), len);
    mem::swap(self, &mut fresh);
    // `fresh` now holds the old memory, whose values were moved out bitwise. Dropping it only
    // deallocates.
  }
}

impl<T> Drop for RawBuffer<T> {
  fn drop(&mut self) {
    if self.cap == 0 || is_zst::<T>() { return; }
    unsafe { dealloc(self.start.as_ptr().cast(), layout_for::<T>(self.cap)) }
  }
}

#[inline(always)]
const fn is_zst<T>() -> bool { size_of::<T>() == 0 }

fn layout_for<T>(cap: usize) -> Layout {
  match Layout::array::<T>(cap) {
    Ok(layout) => layout,
    Err(_) => capacity_overflow(),
  }
}

#[cold]
pub(crate) fn capacity_overflow() -> ! {
  panic!("capacity overflow")
}
