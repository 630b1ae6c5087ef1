//! Fractal noise field generator.
//!
//! Populates scalar and height fields with fBm noise from `simdnoise`. Sample
//! `(x, y, z)` is taken at `(offset + (x, y, z)) * frequency`, so adjacent
//! grids with offsets one grid apart tile seamlessly.
//!
//! simdnoise emits X-fastest buffers, which is exactly the `[z][y][x]` layout
//! of [`ScalarField`] and the `[row][col]` layout of [`HeightField`].

use simdnoise::NoiseBuilder;

use crate::config::{GridDimensions, NoiseSettings};
use crate::field::{HeightAxis, HeightField, ScalarField};

/// Seed offset decorrelating height maps from volumes built with the same
/// settings.
const HEIGHTMAP_SEED_OFFSET: i32 = 7919;

/// Sample `(x_size+1) × (y_size+1) × (z_size+1)` lattice points of 3D fBm.
#[tracing::instrument(skip_all, name = "noise::noise_volume")]
pub fn noise_volume(settings: &NoiseSettings, grid: GridDimensions) -> ScalarField {
  let dims = grid.sample_dims();
  let [ox, oy, oz] = settings.offset;

  let data = NoiseBuilder::fbm_3d_offset(ox, dims[0], oy, dims[1], oz, dims[2])
    .with_seed(settings.seed)
    .with_freq(settings.frequency)
    .with_octaves(settings.octaves)
    .with_lacunarity(settings.lacunarity)
    .with_gain(settings.gain)
    .generate()
    .0;

  // simdnoise returns width * height * depth samples, X fastest
  ScalarField::from_parts(dims, data)
}

/// Sample a `rows × cols` height map of 2D fBm scaled by `amplitude`.
///
/// The map spans the two axes other than `axis` (see [`HeightAxis`]): columns
/// follow the offset of the lower one, rows the offset of the higher one.
#[tracing::instrument(skip_all, name = "noise::noise_heightmap")]
pub fn noise_heightmap(
  settings: &NoiseSettings,
  axis: HeightAxis,
  rows: usize,
  cols: usize,
  amplitude: f32,
) -> HeightField {
  if rows == 0 || cols == 0 {
    return HeightField::default();
  }

  let (_, col_offset, row_offset) = axis.split(settings.offset);
  let heights: Vec<f32> = NoiseBuilder::fbm_2d_offset(col_offset, cols, row_offset, rows)
    .with_seed(settings.seed.wrapping_add(HEIGHTMAP_SEED_OFFSET))
    .with_freq(settings.frequency)
    .with_octaves(settings.octaves)
    .with_lacunarity(settings.lacunarity)
    .with_gain(settings.gain)
    .generate()
    .0
    .into_iter()
    .map(|h| h * amplitude)
    .collect();

  HeightField::from_parts(rows, cols, heights)
}
