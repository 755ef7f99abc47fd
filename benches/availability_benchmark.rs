use bike_catalog::models::{Bike, InventoryEntry, LocationId};
use bike_catalog::services::availability;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const LOCATIONS: usize = 50;
const BIKES: usize = 5_000;

/// Synthetic catalog: each bike is stocked at a rotating subset of locations.
fn catalog() -> Vec<Bike> {
    (0..BIKES)
        .map(|i| Bike {
            id: format!("bike-{}", i),
            name: format!("Model {}", i),
            bike_type: if i % 3 == 0 { "Road" } else { "Mountain" }.to_string(),
            description: String::new(),
            image: String::new(),
            price: 1000.0,
            rental_price: 40.0,
            features: vec![],
            rental_inventory: (0..8)
                .map(|k| InventoryEntry {
                    location: LocationId::new(format!("loc-{}", (i + k * 7) % LOCATIONS)),
                    stock: ((i + k) % 4) as u32,
                })
                .collect(),
        })
        .collect()
}

fn benchmark_availability(c: &mut Criterion) {
    let bikes = catalog();
    let hit = LocationId::new("loc-7");
    let miss = LocationId::new("loc-unknown");

    let mut group = c.benchmark_group("availability");

    group.bench_function("resolve_known_location", |b| {
        b.iter(|| availability::available_refs(black_box(&bikes), &hit).count())
    });

    group.bench_function("resolve_unknown_location", |b| {
        b.iter(|| availability::available_refs(black_box(&bikes), &miss).count())
    });

    group.bench_function("resolve_owned", |b| {
        b.iter_batched(
            || bikes.clone(),
            |bikes| availability::available_at(bikes, black_box(&hit)),
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, benchmark_availability);
criterion_main!(benches);
