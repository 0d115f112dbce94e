//! Mask editing performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use slotmask::slot::predefined::{card_number_standard, digit, rus_phone_number, single_slot};
use slotmask::template::{PhoneNumberParser, SlotsParser};
use slotmask::watcher::{FormatSession, TextChange};
use slotmask::{Mask, SlotChain};
use std::hint::black_box;

fn mask_creation(c: &mut Criterion) {
    let phone = rus_phone_number();
    c.bench_function("mask_new_phone", |b| {
        b.iter(|| Mask::terminated(black_box(&phone)));
    });

    c.bench_function("parse_phone_template", |b| {
        b.iter(|| PhoneNumberParser.parse_slots(black_box("+7 (___) ___-__-__")));
    });

    let long: Vec<_> = (0..1_000).map(|_| digit()).collect();
    c.bench_function("slot_chain_from_1k", |b| {
        b.iter(|| SlotChain::from_slots(black_box(&long)));
    });
}

fn mask_insertion(c: &mut Criterion) {
    let phone = Mask::terminated(&rus_phone_number());
    c.bench_function("phone_paste_number", |b| {
        b.iter_batched(
            || phone.clone(),
            |mut mask| mask.insert_front(black_box("9991234567")),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("phone_type_digit_by_digit", |b| {
        b.iter_batched(
            || phone.clone(),
            |mut mask| {
                let mut caret = mask.initial_input_position();
                for ch in "9991234567".chars() {
                    caret = mask.insert_at(caret, &ch.to_string());
                }
                caret
            },
            BatchSize::SmallInput,
        );
    });

    let mut card = Mask::terminated(&card_number_standard());
    card.insert_front("4111111111111111");
    c.bench_function("card_insert_shifts_full_mask", |b| {
        b.iter_batched(
            || card.clone(),
            |mut mask| mask.insert_at(black_box(0), "5"),
            BatchSize::SmallInput,
        );
    });
}

fn mask_removal(c: &mut Criterion) {
    let mut phone = Mask::terminated(&rus_phone_number());
    phone.insert_front("9991234567");
    c.bench_function("phone_remove_all", |b| {
        b.iter_batched(
            || phone.clone(),
            |mut mask| mask.remove_backwards(black_box(17), 18),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("phone_render", |b| {
        b.iter(|| black_box(&phone).to_string());
    });
}

fn open_mask_growth(c: &mut Criterion) {
    let open = Mask::non_terminated(&single_slot());
    let text = "x".repeat(1_000);
    c.bench_function("open_mask_grow_1k", |b| {
        b.iter_batched(
            || open.clone(),
            |mut mask| mask.insert_front(black_box(&text)),
            BatchSize::SmallInput,
        );
    });

    let mut grown = open.clone();
    grown.insert_front(&text);
    c.bench_function("open_mask_shrink_1k", |b| {
        b.iter_batched(
            || grown.clone(),
            |mut mask| mask.remove_backwards(black_box(999), 1_000),
            BatchSize::SmallInput,
        );
    });
}

fn session_typing(c: &mut Criterion) {
    c.bench_function("session_type_phone", |b| {
        b.iter(|| {
            let mut session = FormatSession::new(Mask::terminated(&rus_phone_number()))
                .expect("phone mask");
            for ch in "9991234567".chars() {
                session.apply(&TextChange::insert(session.caret(), ch.to_string()));
            }
            black_box(session.caret())
        });
    });
}

criterion_group!(
    benches,
    mask_creation,
    mask_insertion,
    mask_removal,
    open_mask_growth,
    session_typing
);
criterion_main!(benches);
