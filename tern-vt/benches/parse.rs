use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use tern_vt::{Action, ActionClass, ActionSink, Parser};

struct CountingSink(u64);

impl ActionSink for CountingSink {
    fn dispatch(&mut self, _class: ActionClass, _action: Action, _ch: char) {
        self.0 += 1;
    }
}

fn corpus_plain() -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog 0123456789 "
        .repeat(64)
}

fn corpus_sgr() -> Vec<u8> {
    b"\x1b[1;31mred\x1b[0m \x1b[38:2::128:64:192mtruecolor\x1b[0m "
        .repeat(64)
}

fn corpus_utf8() -> Vec<u8> {
    "héllo wörld 漢字テスト ∑∫≈ \x1b[32mgrün\x1b[0m "
        .as_bytes()
        .repeat(64)
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for (name, corpus) in [
        ("plain", corpus_plain()),
        ("sgr", corpus_sgr()),
        ("utf8", corpus_utf8()),
    ] {
        group.throughput(Throughput::Bytes(corpus.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut parser = Parser::new();
                let mut sink = CountingSink(0);
                parser.advance(black_box(&corpus), &mut sink);
                sink.0
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
