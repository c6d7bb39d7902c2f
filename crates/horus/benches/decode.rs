//! Benchmarks for layered decoding and relation inversion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use horus::{
    decode, decode_all_layers, decode_layer, encode, relation_index, relation_to_pair, Layer,
    VerbTable,
};

fn bench_address_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("address_codec");
    group.throughput(Throughput::Elements(1));

    group.bench_function("encode", |b| {
        b.iter(|| black_box(encode(black_box(17), black_box(1), black_box(2))));
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(decode(black_box(0b1000_1110))));
    });

    group.finish();
}

fn bench_relation_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("relation_inverse");
    group.throughput(Throughput::Elements(136));

    group.bench_function("relation_to_pair_all", |b| {
        b.iter(|| {
            for i in 0..136u8 {
                black_box(relation_to_pair(black_box(i)).ok());
            }
        });
    });

    group.bench_function("relation_index_all", |b| {
        b.iter(|| {
            for a in 0..16u8 {
                for bb in a..16u8 {
                    black_box(relation_index(black_box(a), black_box(bb)).ok());
                }
            }
        });
    });

    group.finish();
}

fn bench_layer_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_decode");
    let table = VerbTable::standard();

    for size in [4usize, 16, 64, 256].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let ids: Vec<u8> = (0..*size).map(|i| (i % 22) as u8).collect();

        group.bench_with_input(BenchmarkId::new("single", size), &ids, |b, ids| {
            b.iter(|| black_box(decode_layer(&table, black_box(ids), Layer::F1).ok()));
        });

        group.bench_with_input(BenchmarkId::new("all_layers", size), &ids, |b, ids| {
            b.iter(|| black_box(decode_all_layers(&table, black_box(ids)).ok()));
        });
    }

    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("verb_table_build", |b| {
        b.iter(|| black_box(VerbTable::standard()));
    });
}

criterion_group!(
    benches,
    bench_address_codec,
    bench_relation_inverse,
    bench_layer_decode,
    bench_table_build
);
criterion_main!(benches);
