use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio_document::{Element, ElementKind, Rect};
use folio_layout::resolve_collisions;

/// Two columns of stacked blocks, every block overlapping the one above.
fn crowded_page(count: usize) -> Vec<Element> {
    (0..count)
        .map(|i| {
            let column = (i % 2) as f64;
            Element::new(
                format!("el-{i}"),
                ElementKind::Text,
                Rect::new(40.0 + column * 360.0, (i / 2) as f64 * 30.0, 340.0, 80.0),
            )
        })
        .collect()
}

/// Already resolved; the pass only has to confirm it.
fn settled_page(count: usize) -> Vec<Element> {
    resolve_collisions(&crowded_page(count)).into_owned()
}

fn resolve_crowded(c: &mut Criterion) {
    let page = crowded_page(40);
    c.bench_function("resolve_crowded_40", |b| {
        b.iter(|| resolve_collisions(black_box(&page)).len())
    });
}

fn resolve_settled(c: &mut Criterion) {
    let page = settled_page(40);
    c.bench_function("resolve_settled_40", |b| {
        b.iter(|| resolve_collisions(black_box(&page)).len())
    });
}

criterion_group!(benches, resolve_crowded, resolve_settled);
criterion_main!(benches);
