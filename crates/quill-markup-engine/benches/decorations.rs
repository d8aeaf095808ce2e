use criterion::{Criterion, criterion_group, criterion_main};
use quill_markup_engine::{
    FoldSet, Span, build_decorations, find_metadata_blocks, toggle_all_blocks,
};
use xi_rope::Rope;
mod common;

fn bench_decoration_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("decorations");
    group.sample_size(10);

    let content = common::generate_document(500);
    let rope = Rope::from(content.as_str());
    let folds = FoldSet::new();

    group.bench_function("find_metadata_blocks", |b| {
        b.iter(|| std::hint::black_box(find_metadata_blocks(&rope)));
    });

    group.bench_function("full_document", |b| {
        let all = [Span::new(0, rope.len())];
        b.iter(|| std::hint::black_box(build_decorations(&rope, &all, &folds)));
    });

    group.bench_function("viewport_4k", |b| {
        let (start, end) = common::middle_viewport(rope.len(), 4096);
        let visible = [Span::new(start, end)];
        b.iter(|| std::hint::black_box(build_decorations(&rope, &visible, &folds)));
    });

    group.bench_function("all_folded", |b| {
        let mut folded = FoldSet::new();
        toggle_all_blocks(&rope, &mut folded);
        let all = [Span::new(0, rope.len())];
        b.iter(|| std::hint::black_box(build_decorations(&rope, &all, &folded)));
    });

    group.finish();
}

criterion_group!(benches, bench_decoration_pass);
criterion_main!(benches);
