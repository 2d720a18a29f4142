//! Configurable string rendering for [`Stack`].
use crate::stack::Stack;
use alloc::string::{String, ToString};
use core::fmt;
use core::marker::PhantomData;

/// Symbol written before the first item.
pub const DEFAULT_START: &str = "[";
/// Symbol written after the last item.
pub const DEFAULT_END: &str = "]";
/// Symbol written between two items.
pub const DEFAULT_SEPARATOR: &str = " ";
/// Items are written from the top down.
pub const DEFAULT_TOP_FIRST: bool = true;

/// The conversion used by [`Format::new`].
pub type DisplayConversion<T> = fn(&T) -> String;

/// Formatting options for a [`Stack<T>`].
///
/// ```
/// use gstack::{Format, Stack};
///
/// let stack = Stack::from_items([1.25f32, 2.5]);
/// let format = Format::new().start("(").separator(", ").end(")");
/// assert_eq!(stack.render(&format), "(2.5, 1.25)");
/// ```
pub struct Format<T, C = DisplayConversion<T>> {
  conversion: C,
  start:      String,
  end:        String,
  separator:  String,
  top_first:  bool,
  _item:      PhantomData<fn(&T)>,
}

impl<T: fmt::Display> Format<T> {
  /// Default options, converting each item with its `Display` impl.
  pub fn new() -> Self {
    Format::with_conversion(display::<T> as DisplayConversion<T>)
  }
}

impl<T: fmt::Display> Default for Format<T> {
  fn default() -> Self { Format::new() }
}

impl<T, C: Fn(&T) -> String> Format<T, C> {
  /// Default options with a custom item conversion. Works for any `T`.
  pub fn with_conversion(conversion: C) -> Self {
    Format {
      conversion,
      start:     DEFAULT_START.into(),
      end:       DEFAULT_END.into(),
      separator: DEFAULT_SEPARATOR.into(),
      top_first: DEFAULT_TOP_FIRST,
      _item:     PhantomData,
    }
  }

  /// Replaces the item conversion, keeping every other option.
  pub fn conversion<D: Fn(&T) -> String>(self, conversion: D) -> Format<T, D> {
    Format {
      conversion,
      start:     self.start,
      end:       self.end,
      separator: self.separator,
      top_first: self.top_first,
      _item:     PhantomData,
    }
  }

  pub fn start(mut self, start: impl Into<String>) -> Self {
    self.start = start.into();
    self
  }

  pub fn end(mut self, end: impl Into<String>) -> Self {
    self.end = end.into();
    self
  }

  pub fn separator(mut self, separator: impl Into<String>) -> Self {
    self.separator = separator.into();
    self
  }

  /// `true` writes the top item first, `false` writes the bottom item first.
  pub fn top_first(mut self, top_first: bool) -> Self {
    self.top_first = top_first;
    self
  }

  /// Renders `stack` into a new string. The stack is only read.
  pub fn render(&self, stack: &Stack<T>) -> String {
    let mut out = String::new();
    // Writing into a String can't fail.
    let _ = self.write_to(stack, &mut out);
    out
  }

  /// Writes `stack` into `out`. An empty stack produces `start` followed by `end`.
  pub fn write_to<W: fmt::Write>(&self, stack: &Stack<T>, out: &mut W) -> fmt::Result {
    out.write_str(&self.start)?;
    let items = stack.as_slice();
    if self.top_first {
      self.write_items(items.iter().rev(), out)?;
    } else {
      self.write_items(items.iter(), out)?;
    }
    out.write_str(&self.end)
  }

  fn write_items<'a, I, W>(&self, mut items: I, out: &mut W) -> fmt::Result
  where I: Iterator<Item = &'a T>, W: fmt::Write, T: 'a {
    if let Some(first) = items.next() {
      out.write_str(&(self.conversion)(first))?;
      for item in items {
        out.write_str(&self.separator)?;
        out.write_str(&(self.conversion)(item))?;
      }
    }
    Ok(())
  }
}

impl<T, C: Clone> Clone for Format<T, C> {
  fn clone(&self) -> Self {
    Format {
      conversion: self.conversion.clone(),
      start:      self.start.clone(),
      end:        self.end.clone(),
      separator:  self.separator.clone(),
      top_first:  self.top_first,
      _item:      PhantomData,
    }
  }
}

impl<T, C> fmt::Debug for Format<T, C> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Format")
      .field("start", &self.start)
      .field("end", &self.end)
      .field("separator", &self.separator)
      .field("top_first", &self.top_first)
      .finish_non_exhaustive()
  }
}

fn display<T: fmt::Display>(item: &T) -> String { item.to_string() }
