#![allow(clippy::approx_constant)]

use gstack::{Format, Stack};

fn main() {
  let mut stack = Stack::new();
  stack.push_many([0.15f32, 1.5, 3.0]);

  println!("{:?}", stack.top()); // Ok(3.0)
  if let Ok(top) = stack.top_mut() {
    *top = 3.14159;
  }

  println!("{:?}", stack.pop()); // Ok(3.14159)
  let _ = stack.discard();

  println!("{}", stack.is_empty());  // false
  println!("{}", stack.has_items()); // true
  println!("{}", stack.len());       // 1
  println!("{}", stack.capacity());  // 4

  stack.push(10.56);
  stack.push(20.99);

  println!("{}", stack); // [20.99 10.56 0.15]

  let format = Format::with_conversion(|item: &f32| format!("{:.1}", item))
    .start("(")
    .separator(", ")
    .end(")");

  println!("{}", stack.render(&format)); // (21.0, 10.6, 0.2)

  println!("{:?}", stack.pop_exact(5)); // Err(InsufficientElementsError { requested: 5, available: 3 })
  println!("{:?}", stack.pop_up_to(5)); // [20.99, 10.56, 0.15]

  stack.clear();
  println!("{}", stack); // []
}
