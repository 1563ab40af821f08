use criterion::criterion_main;

mod common;

criterion_main!(
    construction::construction_benches,
    collation::collation_benches,
    normalization::normalization_benches,
);
