//! Pass statistics and timing history.
//!
//! ```text
//!   generate / generate_parallel ──► GenerationStats ──► GenerationMetrics
//!        (one per pass, merged           │                 ├─ last
//!         across z-slab shards)          │                 ├─ pass_timings (RollingWindow)
//!                                        └─ timing_us ─────┘  totals
//! ```

use std::collections::VecDeque;

/// Timing samples kept per generator unless configured otherwise.
pub const DEFAULT_TIMING_WINDOW: usize = 64;

/// Counters collected by one traversal (or one shard of it).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Cubes classified.
  pub cubes_visited: u64,
  /// Cubes that emitted at least one triangle.
  pub cubes_with_geometry: u64,
  pub triangles: u64,
  /// Crossed edges whose endpoint densities were equal.
  pub degenerate_edges: u64,
  /// Wall time of the pass in microseconds.
  pub timing_us: u64,
}

impl GenerationStats {
  /// Fold a shard's counters into these. Timing is not summed; shards
  /// overlap in time and the caller measures the whole pass.
  pub fn merge(&mut self, other: &GenerationStats) {
    self.cubes_visited += other.cubes_visited;
    self.cubes_with_geometry += other.cubes_with_geometry;
    self.triangles += other.triangles;
    self.degenerate_edges += other.degenerate_edges;
  }
}

/// Bounded history of the most recent pass timings, oldest first.
#[derive(Debug, Clone)]
pub struct RollingWindow {
  samples: VecDeque<u64>,
  capacity: usize,
}

impl Default for RollingWindow {
  fn default() -> Self {
    Self::new(DEFAULT_TIMING_WINDOW)
  }
}

impl RollingWindow {
  /// A zero capacity window never holds samples.
  pub fn new(capacity: usize) -> Self {
    Self {
      samples: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Record `sample`, dropping the oldest one when full.
  pub fn push(&mut self, sample: u64) {
    if self.capacity == 0 {
      return;
    }
    while self.samples.len() >= self.capacity {
      self.samples.pop_front();
    }
    self.samples.push_back(sample);
  }

  pub fn len(&self) -> usize {
    self.samples.len()
  }

  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }

  pub fn clear(&mut self) {
    self.samples.clear();
  }

  pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
    self.samples.iter().copied()
  }

  pub fn last(&self) -> Option<u64> {
    self.samples.back().copied()
  }

  pub fn sum(&self) -> u64 {
    self.samples.iter().sum()
  }

  /// Mean of the held samples, 0 when empty.
  pub fn average(&self) -> f64 {
    match self.samples.len() {
      0 => 0.0,
      n => self.sum() as f64 / n as f64,
    }
  }

  pub fn min_max(&self) -> Option<(u64, u64)> {
    let first = self.last()?;
    Some(
      self
        .iter()
        .fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s))),
    )
  }
}

/// History of generation passes held by a generator.
#[derive(Debug, Clone, Default)]
pub struct GenerationMetrics {
  /// Recent pass times in microseconds.
  pub pass_timings: RollingWindow,
  /// Counters of the most recent pass.
  pub last: GenerationStats,
  pub total_passes: u64,
  /// Section emissions (create or update).
  pub total_emits: u64,
}

impl GenerationMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&mut self, stats: &GenerationStats) {
    self.pass_timings.push(stats.timing_us);
    self.last = *stats;
    self.total_passes += 1;
  }

  pub fn record_emit(&mut self) {
    self.total_emits += 1;
  }

  pub fn avg_pass_timing_us(&self) -> f64 {
    self.pass_timings.average()
  }

  /// Drop the timing history and last pass. Totals are kept.
  pub fn reset(&mut self) {
    self.pass_timings.clear();
    self.last = GenerationStats::default();
  }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
