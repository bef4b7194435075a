use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use symlog_core::{last_7_days, streak, symptom_frequency};
use symlog_store::{Symptom, SymptomEntry};

fn year_of_entries(today: NaiveDate) -> Vec<SymptomEntry> {
    (0..365)
        .map(|offset| {
            let date = today - chrono::Duration::days(offset);
            let mut entry = SymptomEntry::new(date, offset * 1000);
            entry
                .symptoms
                .set(Symptom::ALL[(offset % 6) as usize], (offset % 3) as u8);
            entry
        })
        .collect()
}

fn bench_aggregates_365_entries(c: &mut Criterion) {
    let today: NaiveDate = "2024-12-31".parse().unwrap();
    let entries = year_of_entries(today);

    c.bench_function("streak_365_entries", |b| {
        b.iter(|| streak(black_box(&entries), black_box(today)));
    });

    c.bench_function("last_7_days_365_entries", |b| {
        b.iter(|| last_7_days(black_box(&entries), black_box(today)));
    });

    c.bench_function("symptom_frequency_365_entries", |b| {
        b.iter(|| symptom_frequency(black_box(&entries)));
    });
}

criterion_group!(benches, bench_aggregates_365_entries);
criterion_main!(benches);
