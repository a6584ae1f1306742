use criterion::{black_box, criterion_group, criterion_main, Criterion};
use temphygro_tx::radio::hal::{MockClock, MockLine};
use temphygro_tx::{Frame, Payload, ProtocolVariant, TransmitterController};

fn benchmark_encode_payload(c: &mut Criterion) {
    c.bench_function("encode_payload", |b| {
        b.iter(|| Payload::encode(black_box(-12.3), black_box(67.8), black_box(5)))
    });
}

fn benchmark_build_frame(c: &mut Criterion) {
    let payload = Payload::encode(23.5, 55.0, 2);

    for variant in ProtocolVariant::ALL {
        c.bench_function(&format!("build_frame_{variant}"), |b| {
            b.iter(|| Frame::build(black_box(&payload), variant))
        });
    }
}

fn benchmark_simulated_send(c: &mut Criterion) {
    let clock = MockClock::new();
    let line = MockLine::new(&clock);
    let mut tx = TransmitterController::setup(line.clone(), clock, ProtocolVariant::V1_2).unwrap();

    c.bench_function("simulated_send", |b| {
        b.iter(|| {
            line.clear_events();
            black_box(tx.send(black_box(23.5), black_box(55.0)))
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode_payload,
    benchmark_build_frame,
    benchmark_simulated_send
);
criterion_main!(benches);
