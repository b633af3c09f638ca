//! Performance benchmarks for address book queries.
//!
//! These benchmarks measure the in-memory operations over books of
//! different sizes:
//! - Listing every contact
//! - City/state lookup within one book and across the manager
//! - Name substring search and sorting

use address_book::{AddressBook, AddressBookManager, BookName, Contact, SortKey};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

const FIRST_NAMES: [&str; 8] = [
    "John", "Jane", "Bob", "Alice", "Maria", "Peter", "Olga", "Ravi",
];
const PLACES: [(&str, &str); 5] = [
    ("Springfield", "IL"),
    ("Austin", "TX"),
    ("Chicago", "IL"),
    ("Seattle", "WA"),
    ("Boston", "MA"),
];

/// Encode `n` as lowercase letters so generated names stay valid.
fn letters(mut n: usize) -> String {
    let mut out = String::new();
    loop {
        out.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    out
}

fn generated_contact(i: usize) -> Contact {
    let first = FIRST_NAMES[i % FIRST_NAMES.len()];
    let last = format!("Smith{}", letters(i));
    let (city, state) = PLACES[i % PLACES.len()];
    Contact::new(
        first,
        last.clone(),
        "42 Elm Street",
        city,
        state,
        "400088",
        format!("{:010}", 5_550_000_000u64 + i as u64),
        format!("{}.{}@example.com", first, last).to_lowercase(),
    )
    .unwrap()
}

fn generated_book(name: &str, size: usize) -> AddressBook {
    let mut book = AddressBook::new(BookName::new(name).unwrap());
    for i in 0..size {
        book.add_contact(generated_contact(i)).unwrap();
    }
    book
}

/// Benchmark listing at several book sizes.
fn bench_list_contacts(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_contacts");

    for size in [10, 100, 1000].iter() {
        let book = generated_book("Bench", *size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.list_contacts().count());
        });
    }

    group.finish();
}

/// Benchmark city/state lookup at several book sizes.
fn bench_find_by_city_or_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_city_or_state");

    for size in [10, 100, 1000].iter() {
        let book = generated_book("Bench", *size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.find_by_city_or_state(black_box("il")).len());
        });
    }

    group.finish();
}

/// Benchmark name search and sorting on a large book.
fn bench_search_and_sort(c: &mut Criterion) {
    let book = generated_book("Bench", 1000);

    c.bench_function("find_by_name", |b| {
        b.iter(|| book.find_by_name(black_box("smithb")).len());
    });

    c.bench_function("sorted_by_city", |b| {
        b.iter(|| book.sorted_by(SortKey::City).len());
    });
}

/// Benchmark lookup across every book of a manager.
fn bench_find_in_all_books(c: &mut Criterion) {
    let mut manager = AddressBookManager::default();
    for name in ["Family", "Work", "Friends", "Club"] {
        let book = manager.create_address_book(name).unwrap();
        for i in 0..250 {
            book.add_contact(generated_contact(i)).unwrap();
        }
    }

    c.bench_function("find_in_all_books", |b| {
        b.iter(|| manager.find_by_city_or_state(black_box("Springfield")).len());
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_list_contacts,
        bench_find_by_city_or_state,
        bench_search_and_sort,
        bench_find_in_all_books
}

criterion_main!(benches);
