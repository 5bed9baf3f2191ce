use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use threadline::{
    domain::{order_for_display, text::wrap_text, CommentRecord},
    infrastructure::memory::demo_comments,
};

fn ordering(c: &mut Criterion) {
    let comments = demo_comments(500);
    let linked_root = comments[250].clone();
    let linked_reply = CommentRecord::new("r0001", "replier", "a reply").with_parent("c0400");

    let mut group = c.benchmark_group("order_for_display");
    group.bench_function("no link", |b| {
        b.iter(|| order_for_display(black_box(&comments), None))
    });
    group.bench_function("linked root", |b| {
        b.iter(|| order_for_display(black_box(&comments), Some(&linked_root)))
    });
    group.bench_function("linked reply", |b| {
        b.iter(|| order_for_display(black_box(&comments), Some(&linked_reply)))
    });
    group.finish();
}

fn wrapping(c: &mut Criterion) {
    let body = "Comment bodies mix ascii with wide text like 羅生門の下で雨やみを待つてゐた. "
        .repeat(40);

    let mut group = c.benchmark_group("wrap_text");
    for width in [20, 60, 120] {
        group.bench_function(format!("width {width}"), |b| {
            b.iter(|| wrap_text(black_box(&body), black_box(width)))
        });
    }
    group.finish();
}

criterion_group!(benches, ordering, wrapping);
criterion_main!(benches);
