use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cellocator_rs::checksum::checksum;
use cellocator_rs::{DecodedFrame, RawFrame};

const FRAME_HEX: &str = "4D4347500040E20100054A2A4D1F04BB2B00200083800821C566F064004523010102030405069E7A0203000959214BF863817A0040070400E80300002306051E0E0F03E8070D";

fn benchmark_decode(c: &mut Criterion) {
    c.bench_function("raw_frame_parse", |b| {
        b.iter(|| {
            let _ = black_box(RawFrame::parse(black_box(FRAME_HEX)));
        })
    });

    c.bench_function("decode_report", |b| {
        b.iter(|| {
            let frame = DecodedFrame::new(black_box(FRAME_HEX)).unwrap();
            black_box(frame.report())
        })
    });

    let frame = DecodedFrame::new(FRAME_HEX).unwrap();
    c.bench_function("longitude_and_latitude", |b| {
        b.iter(|| black_box(frame.longitude_and_latitude()))
    });

    let bytes = frame.raw().as_bytes();
    c.bench_function("checksum", |b| b.iter(|| checksum(black_box(&bytes[4..69]))));
}

criterion_group!(benches, benchmark_decode);
criterion_main!(benches);
