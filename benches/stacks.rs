use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stackdemo::{Stack, StackKind};

const N: u64 = 10_000;

fn push_pop(stack: &mut dyn Stack<u64>) {
    for i in 0..N {
        stack.push(black_box(i));
    }
    while let Some(v) = stack.pop() {
        black_box(v);
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push-pop");
    for kind in StackKind::ALL {
        group.bench_function(kind.to_string(), |b| {
            b.iter(|| {
                let mut stack = kind.build::<u64>();
                push_pop(&mut *stack)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
