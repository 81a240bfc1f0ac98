// benches/canonicalize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use medal_scrape::countries::Canonicalizer;
use medal_scrape::specs::medals;

const LABELS: &[&str] = &[
    "Italy",
    "ITA",
    "ItalyITAITA",
    "United StatesUSAUSA",
    "Individual  Neutral AthletesAINAIN",
    "Great Britain",
    "Somewhere Unmapped XYZ",
];

fn synthetic_page(rows: usize) -> String {
    let mut doc = String::from(
        "<table><tr><th>Rank</th><th>Country</th><th>Gold</th><th>Silver</th><th>Bronze</th></tr>",
    );
    for i in 0..rows {
        let label = LABELS[i % LABELS.len()];
        doc.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            i + 1, label, i % 9, i % 5, i % 3
        ));
    }
    doc.push_str("</table>");
    doc
}

fn bench_canonicalize(c: &mut Criterion) {
    let cz = Canonicalizer::olympics();

    c.bench_function("canonicalize_variants", |b| {
        b.iter(|| {
            for label in LABELS {
                black_box(cz.canonicalize(black_box(label)));
            }
        })
    });

    let doc = synthetic_page(200);
    c.bench_function("parse_table_200_rows", |b| {
        b.iter(|| {
            let set = medals::parse(black_box(&doc), &cz);
            black_box(set.len())
        })
    });
}

criterion_group!(benches, bench_canonicalize);
criterion_main!(benches);
