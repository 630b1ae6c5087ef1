//! Per-triangle color assignment.

use glam::Vec3A;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{ColorMode, LinearColor};

/// Seed stride between shards of a sharded traversal.
const SHARD_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Stateful color source for one traversal (or one shard of it).
pub struct TriangleColors {
  mode: ColorMode,
  rng: StdRng,
}

impl TriangleColors {
  pub fn new(mode: ColorMode) -> Self {
    Self::for_shard(mode, 0)
  }

  /// Colors for shard `shard`; each shard draws from its own stream so the
  /// result does not depend on thread scheduling.
  pub fn for_shard(mode: ColorMode, shard: u64) -> Self {
    let seed = match mode {
      ColorMode::Random { seed } => seed,
      _ => 0,
    };
    Self {
      mode,
      rng: StdRng::seed_from_u64(seed.wrapping_add(shard.wrapping_mul(SHARD_SEED_STRIDE))),
    }
  }

  /// Color for the next triangle with face normal `normal`.
  pub fn next(&mut self, normal: Vec3A) -> LinearColor {
    match self.mode {
      ColorMode::Random { .. } => hue_to_rgb(self.rng.random::<f32>()),
      ColorMode::Uniform { color } => color,
      ColorMode::Normal => {
        let n = normal.abs();
        [n.x, n.y, n.z, 1.0]
      }
    }
  }
}

/// Fully saturated, full value color for `hue` in `[0, 1)`.
fn hue_to_rgb(hue: f32) -> LinearColor {
  let h = hue.fract() * 6.0;
  let x = 1.0 - (h % 2.0 - 1.0).abs();
  let [r, g, b] = match h as u32 {
    0 => [1.0, x, 0.0],
    1 => [x, 1.0, 0.0],
    2 => [0.0, 1.0, x],
    3 => [0.0, x, 1.0],
    4 => [x, 0.0, 1.0],
    _ => [1.0, 0.0, x],
  };
  [r, g, b, 1.0]
}

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;
