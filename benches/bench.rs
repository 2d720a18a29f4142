use criterion::*;
use gstack::{Format, Stack};

fn push_pop(c: &mut Criterion) {
  let mut group = c.benchmark_group("push_pop");
  group.throughput(Throughput::Elements(1));
  group.bench_function(
    "gstack",
    |b| {
      let mut s = Stack::with_capacity(1);
      b.iter(|| {
        s.push(black_box(1usize));
        black_box(s.pop())
      });
    }
  );
}

fn push_growing(c: &mut Criterion) {
  let mut group = c.benchmark_group("push_growing");
  group.throughput(Throughput::Elements(1024));
  group.bench_function(
    "push",
    |b| b.iter(|| {
      let mut s = Stack::new();
      for i in 0..1024usize { s.push(black_box(i)) }
      s
    })
  );
  group.bench_function(
    "push_many",
    |b| b.iter(|| {
      let mut s = Stack::new();
      s.push_many(black_box(0..1024usize));
      s
    })
  );
}

fn render(c: &mut Criterion) {
  let mut group = c.benchmark_group("render");
  let s: Stack<u32> = (0..256).collect();
  group.throughput(Throughput::Elements(256));
  group.bench_function(
    "top_first",
    |b| {
      let format = Format::new();
      b.iter(|| black_box(s.render(&format)))
    }
  );
  group.bench_function(
    "bottom_first",
    |b| {
      let format = Format::new().top_first(false).separator(", ");
      b.iter(|| black_box(s.render(&format)))
    }
  );
}

criterion_group!(
  benches,
  push_pop,
  push_growing,
  render,
);
criterion_main!(benches);
