use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use customer_store::prelude::{
    Customer, CustomerReader, CustomerSink, CustomerWriter, JsonFileStorage, LocalFileStore,
    NewCustomer, next_customer_id,
};
use tempfile::TempDir;

fn make_customers(n: u32) -> Vec<Customer> {
    (1..=n)
        .map(|i| {
            NewCustomer::new(format!("Customer{i}"), "Taipei")
                .with_email(format!("user{i}@example.com"))
                .into_customer(i)
        })
        .collect()
}

// Writes `n` customers to a fresh file and returns a store that has not loaded it yet.
fn make_store_with_n(n: u32) -> (TempDir, LocalFileStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("customers.json");
    JsonFileStorage::new(&path)
        .save(&make_customers(n))
        .expect("seed file");
    (dir, LocalFileStore::new(path))
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("loading 5k customers (first access)", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |(_dir, mut store)| {
                black_box(store.load_all().len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("adding to 5k customers (full rewrite)", |b| {
        b.iter_batched(
            || {
                let (dir, mut store) = make_store_with_n(5_000);
                store.load_all();
                (dir, store)
            },
            |(_dir, mut store)| {
                let added = store
                    .add(NewCustomer::new("Zoe", "Tainan"))
                    .expect("add");
                black_box(added);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_next_id(c: &mut Criterion) {
    let customers = make_customers(5_000);
    c.bench_function("next id over 5k customers", |b| {
        b.iter(|| black_box(next_customer_id(&customers).expect("next id")));
    });
}

criterion_group!(benches, bench_load, bench_add, bench_next_id);
criterion_main!(benches);
