//! Benchmark suite for furniture state extraction
//!
//! This benchmark measures the extraction pipeline from container decode to
//! animation counting and helps identify hot paths in the scanner.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use furni_benches::{
	compress_container, generate_furniture_swf, generate_visualization_document, sizes,
};
use furni_rs::extract;
use furni_rs::file::swf::{File, Header};
use furni_rs::file::visualization::Document;
use std::hint::black_box;

/// Benchmark the full pipeline on both container forms
fn bench_extract_pipeline(c: &mut Criterion) {
	let mut group = c.benchmark_group("extract_pipeline");

	let profiles = vec![
		("small", sizes::SMALL),
		("typical", sizes::TYPICAL),
		("large", sizes::LARGE),
		("xlarge", sizes::XLARGE),
	];

	for (name, (animations, fillers)) in profiles {
		let plain = generate_furniture_swf(animations, fillers);
		let packed = compress_container(&plain);

		group.throughput(Throughput::Bytes(plain.len() as u64));
		group.bench_with_input(BenchmarkId::new("uncompressed", name), &plain, |b, data| {
			b.iter(|| {
				let file = File::from_bytes(black_box(data)).unwrap();
				black_box(extract::state_count_from(&file))
			});
		});

		group.throughput(Throughput::Bytes(packed.len() as u64));
		group.bench_with_input(BenchmarkId::new("compressed", name), &packed, |b, data| {
			b.iter(|| {
				let file = File::from_bytes(black_box(data)).unwrap();
				black_box(extract::state_count_from(&file))
			});
		});
	}

	group.finish();
}

/// Benchmark header parsing separately
fn bench_header_parsing(c: &mut Criterion) {
	let mut group = c.benchmark_group("container_header");

	let (animations, fillers) = sizes::TYPICAL;
	let data = generate_furniture_swf(animations, fillers);

	group.bench_function("parse_header", |b| {
		b.iter(|| {
			let result = Header::from_bytes(black_box(&data));
			black_box(result)
		});
	});

	group.finish();
}

/// Benchmark the record scan as the filler count grows
fn bench_record_scan(c: &mut Criterion) {
	let mut group = c.benchmark_group("record_scan");

	for fillers in [0usize, 16, 64, 256] {
		let data = generate_furniture_swf(12, fillers);
		let file = File::from_bytes(&data).unwrap();

		group.throughput(Throughput::Elements(fillers as u64));
		group.bench_with_input(BenchmarkId::new("scan_fillers", fillers), &file, |b, file| {
			b.iter(|| {
				let qualifying = extract::find_visualization(black_box(file));
				black_box(qualifying)
			});
		});
	}

	group.finish();
}

/// Benchmark document parsing as the animation count grows
fn bench_document_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("visualization_parse");

	for animations in [4u32, 64, 1024] {
		let document = generate_visualization_document(animations);

		group.throughput(Throughput::Elements(u64::from(animations)));
		group.bench_with_input(
			BenchmarkId::new("parse_document", animations),
			&document,
			|b, document| {
				b.iter(|| {
					let result = Document::parse(black_box(document));
					black_box(result)
				});
			},
		);
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_extract_pipeline,
	bench_header_parsing,
	bench_record_scan,
	bench_document_parse,
);

criterion_main!(benches);
