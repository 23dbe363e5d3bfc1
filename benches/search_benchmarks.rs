//! Performance benchmarks for search functionality.
//!
//! These benchmarks measure in-memory lookups at different collection sizes:
//! - Contact name substring search
//! - Note search by tag and by text
//! - Birthday window queries

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use personal_assistant::domain::{Birthday, ContactName, PhoneNumber};
use personal_assistant::{Contact, ContactBook, Note, NoteBook, SearchTarget};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn build_book(size: usize) -> ContactBook {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let mut book = ContactBook::default();
    for i in 0..size {
        let contact = Contact::new(ContactName::new(format!("Contact {:05}", i)).unwrap())
            .with_phones([PhoneNumber::new(format!("+38050{:07}", i)).unwrap()])
            .with_birthday(Some(Birthday::from_date(
                start + chrono::Duration::days((i % 365) as i64),
            )));
        book.add(contact).unwrap();
    }
    book
}

fn build_notes(size: usize) -> NoteBook {
    let mut notes = NoteBook::default();
    for i in 0..size {
        let tag = format!("tag{}", i % 50);
        notes.add(Note::new(format!("Note number {} about things", i)).with_tags([tag]));
    }
    notes
}

fn bench_contact_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("contact_search");
    for size in SIZES {
        let book = build_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.search_by_match(black_box("act 00")))
        });
    }
    group.finish();
}

fn bench_note_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("note_search");
    for size in SIZES {
        let notes = build_notes(size);
        group.bench_with_input(BenchmarkId::new("tags", size), &notes, |b, notes| {
            b.iter(|| notes.find(black_box("tag7"), SearchTarget::Tags))
        });
        group.bench_with_input(BenchmarkId::new("text", size), &notes, |b, notes| {
            b.iter(|| notes.find(black_box("number 42"), SearchTarget::Text))
        });
    }
    group.finish();
}

fn bench_birthday_window(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let mut group = c.benchmark_group("birthday_window");
    for size in SIZES {
        let book = build_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays(black_box(30), today))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_contact_search,
    bench_note_search,
    bench_birthday_window
);
criterion_main!(benches);
