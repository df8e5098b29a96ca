use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tambola::core::{allocate, place_tickets, sort_columns, BookGenerator, SimpleRng};
use tambola::term::render_book;

fn bench_generate(c: &mut Criterion) {
    let mut generator = BookGenerator::new(12345);

    c.bench_function("generate_book", |b| {
        b.iter(|| black_box(generator.generate()))
    });
}

fn bench_allocate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("allocate_columns", |b| {
        b.iter(|| black_box(allocate(&mut rng)))
    });
}

fn bench_place_and_sort(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let allocated = allocate(&mut rng);

    c.bench_function("place_and_sort_tickets", |b| {
        b.iter(|| {
            let mut state = allocated.clone();
            let mut tickets = place_tickets(&mut state, &mut rng);
            for ticket in tickets.iter_mut() {
                sort_columns(ticket);
            }
            black_box(tickets)
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let book = BookGenerator::new(12345).generate();

    c.bench_function("render_book_plain", |b| {
        b.iter(|| black_box(render_book(black_box(&book))))
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_allocate,
    bench_place_and_sort,
    bench_render
);
criterion_main!(benches);
