/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use redlock::{
    calculate_drift, jitter_delay, FixedTokenGenerator, MajorityQuorum, Quorum,
    RandomTokenGenerator, TokenGenerator,
};
use std::time::Duration;

fn bench_quorum(c: &mut Criterion) {
    let mut group = c.benchmark_group("quorum");

    for total in [3usize, 5, 7, 31] {
        group.bench_with_input(BenchmarkId::new("is_met", total), &total, |b, &total| {
            let mut quorum = MajorityQuorum::new();
            quorum.init(total).unwrap();
            b.iter(|| quorum.is_met(total / 2 + 1).unwrap());
        });
    }

    group.finish();
}

fn bench_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokens");

    let random = RandomTokenGenerator::new();
    group.bench_function("random", |b| b.iter(|| random.generate_token()));

    let fixed = FixedTokenGenerator::new("token");
    group.bench_function("fixed", |b| b.iter(|| fixed.generate_token()));

    group.finish();
}

fn bench_timing_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing");

    group.bench_function("calculate_drift", |b| {
        b.iter(|| calculate_drift(Duration::from_secs(10), 0.01))
    });

    group.bench_function("jitter_delay", |b| {
        b.iter(|| jitter_delay(Duration::from_millis(200), Duration::from_millis(50)))
    });

    group.finish();
}

criterion_group!(benches, bench_quorum, bench_tokens, bench_timing_math);
criterion_main!(benches);
