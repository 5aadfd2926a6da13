//! Benchmarks pour le décodage de Viterbi

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fec_core::{encode_bytes, ViterbiDecoder, TAIL_BITS};
use std::time::Duration;

fn benchmark_update(c: &mut Criterion) {
    // Préparer une trame encodée de 1KB
    let message = vec![0x5Au8; 1024];
    let framebits = message.len() * 8;
    let symbols = encode_bytes(&message);

    let mut group = c.benchmark_group("Update Performance");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("update_1kb_frame", |b| {
        let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS).unwrap();

        b.iter(|| {
            decoder.init(0).unwrap();
            let _ = decoder.update(black_box(&symbols)).unwrap();
        });
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let test_sizes = vec![
        ("64b", vec![0xA7u8; 64]),
        ("1kb", vec![0xA7u8; 1024]),
        ("8kb", vec![0xA7u8; 8 * 1024]),
    ];

    let mut group = c.benchmark_group("Roundtrip Performance");
    group.measurement_time(Duration::from_secs(15));
    group.sample_size(20);

    for (name, message) in test_sizes {
        let framebits = message.len() * 8;

        group.bench_function(format!("roundtrip_{}", name), |b| {
            let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS).unwrap();

            b.iter(|| {
                let symbols = encode_bytes(black_box(&message));
                let _ = decoder.decode_frame(&symbols, framebits).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_chainback(c: &mut Criterion) {
    let message = vec![0x3Cu8; 4096];
    let framebits = message.len() * 8;
    let symbols = encode_bytes(&message);

    let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS).unwrap();
    decoder.init(0).unwrap();
    decoder.update(&symbols).unwrap();

    let mut group = c.benchmark_group("Chainback Performance");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("chainback_4kb", |b| {
        b.iter(|| {
            let _ = decoder.chainback(black_box(framebits), 0).unwrap();
        });
    });

    group.finish();
}

criterion_group! {
    name = decoding_benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(5));
    targets = benchmark_update, benchmark_roundtrip, benchmark_chainback
}

criterion_main!(decoding_benches);
