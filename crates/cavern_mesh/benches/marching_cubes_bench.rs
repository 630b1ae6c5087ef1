//! Benchmarks for marching cubes traversal and noise field sampling.

use cavern_mesh::{
  marching_cubes, noise, ColorMode, GridDimensions, MeshConfig, MeshData, NoiseSettings,
  ScalarField,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Signed distance to a sphere centered in an `n³` lattice.
fn sphere_field(n: usize, radius: f32) -> ScalarField {
  let c = (n - 1) as f32 * 0.5;
  ScalarField::from_fn([n, n, n], |x, y, z| {
    let dx = x as f32 - c;
    let dy = y as f32 - c;
    let dz = z as f32 - c;
    (dx * dx + dy * dy + dz * dz).sqrt() - radius
  })
}

/// Serial vs sharded traversal on spheres of increasing size.
fn bench_traversal(c: &mut Criterion) {
  let config = MeshConfig::default().with_color_mode(ColorMode::Uniform { color: [1.0; 4] });
  let mut group = c.benchmark_group("marching_cubes");

  for n in [33usize, 65] {
    let field = sphere_field(n, n as f32 * 0.4);

    group.bench_with_input(BenchmarkId::new("serial", n), &field, |b, field| {
      let mut mesh = MeshData::new();
      b.iter(|| {
        mesh.clear();
        let stats = marching_cubes::generate(black_box(field), &config, &mut mesh);
        black_box(stats)
      })
    });

    group.bench_with_input(BenchmarkId::new("parallel", n), &field, |b, field| {
      b.iter(|| {
        let output = marching_cubes::generate_parallel(black_box(field), &config);
        black_box(output)
      })
    });
  }

  group.finish();
}

/// Noise volume sampling for the default 32³ grid.
fn bench_noise_volume(c: &mut Criterion) {
  let settings = NoiseSettings::default();
  let grid = GridDimensions::cubic(32);

  c.bench_function("noise::noise_volume (33³)", |b| {
    b.iter(|| black_box(noise::noise_volume(black_box(&settings), grid)))
  });
}

criterion_group!(benches, bench_traversal, bench_noise_volume);
criterion_main!(benches);
