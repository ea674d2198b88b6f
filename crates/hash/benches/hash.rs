// Copyright 2024-2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use digest::Digest;
use gost_hash::{Backend, Context, Streebog256, Streebog512};
use rand::{thread_rng, RngCore};

fn bench_streebog(c: &mut Criterion) {
	gost_utils::tracing::init_tracing();

	let mut group = c.benchmark_group("Streebog");

	let mut rng = thread_rng();

	const N: usize = 1 << 16;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);
	group.throughput(Throughput::Bytes(N as u64));

	group.bench_function("Streebog256", |bench| bench.iter(|| Streebog256::digest(&data)));
	group.bench_function("Streebog512", |bench| bench.iter(|| Streebog512::digest(&data)));

	for backend in [Backend::Portable, Backend::Sse2] {
		if !backend.is_available() {
			continue;
		}
		group.bench_function(format!("Context-{backend}"), |bench| {
			bench.iter(|| {
				let mut ctx = Context::new();
				ctx.initialize_with_backend(256, backend).unwrap();
				ctx.absorb(&data).unwrap();
				ctx.finalize().unwrap()
			})
		});
	}

	group.bench_function("Streebog256-RustCrypto", |bench| {
		bench.iter(|| <streebog_crypto::Streebog256 as Digest>::digest(&data))
	});

	group.finish()
}

criterion_group!(hash, bench_streebog);
criterion_main!(hash);
