use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{GildedRose, Item, standard_stock};

fn stock_of(size: usize) -> Vec<Item> {
    standard_stock().into_iter().cycle().take(size).collect()
}

fn bench_advance_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_day");

    for size in [9usize, 1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut shop = GildedRose::new(stock_of(size));
            b.iter(|| {
                shop.advance_day();
                black_box(shop.items());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance_day);
criterion_main!(benches);
