use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_book::prelude::{
    BufferView, Command, Contact, ContactBook, ContactForm, Controller, MemStore,
};

// Book with `n` contacts. Built in memory so the benchmarks measure list and
// search work rather than disk I/O.
fn make_book_with_n(n: usize) -> ContactBook {
    (0..n)
        .map(|i| {
            let contact = Contact::new(
                format!("0888{i:07}"),
                format!("user{i}@yahoo.com"),
                String::new(),
            );
            (format!("User{i}"), contact)
        })
        .collect()
}

fn bench_book(c: &mut Criterion) {
    let book = make_book_with_n(5_000);

    c.bench_function("labels_5k", |b| b.iter(|| black_box(book.labels())));

    c.bench_function("find_name_5k", |b| {
        b.iter(|| black_box(book.find(black_box("user42"))))
    });

    c.bench_function("find_phone_5k", |b| {
        b.iter(|| black_box(book.find(black_box("0004999"))))
    });

    c.bench_function("add_and_refresh_5k", |b| {
        b.iter_batched(
            || {
                let mut session =
                    Controller::new(MemStore::with_contacts(book.clone()), BufferView::new())
                        .expect("session");
                session.set_form(ContactForm::new("Newcomer", "0999", "", ""));
                session
            },
            |mut session| {
                session.dispatch(Command::Add).expect("add");
                black_box(session.listing().len())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_book);
criterion_main!(benches);
