//! Tree construction and proof benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use txmerkle::{build_full_tree, AuditProof, Hash, PublicKey, Transaction};

fn transactions(n: u64) -> Vec<Transaction> {
    (0..n)
        .map(|i| {
            Transaction::new(
                PublicKey::from_bytes([1; 32]),
                PublicKey::from_bytes([2; 32]),
                i,
                0,
                vec![],
            )
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_full_tree");
    for n in [16u64, 256, 4096] {
        let txs = transactions(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &txs, |b, txs| {
            b.iter(|| build_full_tree(black_box(txs.clone())))
        });
    }
    group.finish();
}

fn bench_proofs(c: &mut Criterion) {
    let mut group = c.benchmark_group("audit_proof");
    for n in [16u64, 256, 4096] {
        let txs = transactions(n);
        let last: Hash = txs[txs.len() - 1].hash();
        let Ok(root) = build_full_tree(txs) else {
            continue;
        };
        let Ok(proof) = AuditProof::generate(&root, &last) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::new("generate", n), &root, |b, root| {
            b.iter(|| AuditProof::generate(root, black_box(&last)))
        });
        group.bench_with_input(BenchmarkId::new("verify", n), &proof, |b, proof| {
            b.iter(|| proof.verify(root.hash(), black_box(&last)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_proofs);
criterion_main!(benches);
