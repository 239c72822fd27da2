use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recase::case::tokenizer::tokenize;
use recase::{convert, CaseStyle, ConvertOptions};

const IDENTIFIERS: &[&str] = &[
    "hello_world",
    "mobileNumber",
    "HTTP_STATUS_CODE",
    "mixed_delimiters.with-spaces",
    "  some very long sentence with many words in it  ",
    "user2Name",
];

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| {
            for id in IDENTIFIERS {
                black_box(tokenize(black_box(id)));
            }
        })
    });
}

fn bench_convert(c: &mut Criterion) {
    let options = ConvertOptions::default();
    let mut group = c.benchmark_group("convert");
    for style in CaseStyle::ALL {
        group.bench_function(style.to_string(), |b| {
            b.iter(|| {
                for id in IDENTIFIERS {
                    let _ = black_box(convert(black_box(*id), style, &options));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_convert);
criterion_main!(benches);
