use super::*;

#[test]
fn test_window_evicts_oldest() {
  let mut window = RollingWindow::new(3);
  assert!(window.is_empty());
  assert_eq!(window.min_max(), None);
  assert_eq!(window.average(), 0.0);

  for sample in [10, 20, 30] {
    window.push(sample);
  }
  assert_eq!(window.sum(), 60);
  assert_eq!(window.average(), 20.0);

  window.push(40);
  assert_eq!(window.len(), 3);
  assert_eq!(window.iter().collect::<Vec<_>>(), vec![20, 30, 40]);
  assert_eq!(window.min_max(), Some((20, 40)));
  assert_eq!(window.last(), Some(40));
}

#[test]
fn test_zero_capacity_window_stays_empty() {
  let mut window = RollingWindow::new(0);
  window.push(5);
  assert!(window.is_empty());
  assert_eq!(RollingWindow::default().capacity(), DEFAULT_TIMING_WINDOW);
}

#[test]
fn test_stats_merge_skips_timing() {
  let mut total = GenerationStats {
    cubes_visited: 8,
    cubes_with_geometry: 2,
    triangles: 3,
    degenerate_edges: 0,
    timing_us: 100,
  };
  total.merge(&GenerationStats {
    cubes_visited: 8,
    cubes_with_geometry: 1,
    triangles: 1,
    degenerate_edges: 1,
    timing_us: 50,
  });

  assert_eq!(
    total,
    GenerationStats {
      cubes_visited: 16,
      cubes_with_geometry: 3,
      triangles: 4,
      degenerate_edges: 1,
      timing_us: 100,
    }
  );
}

#[test]
fn test_metrics_record_and_reset() {
  let mut metrics = GenerationMetrics::new();
  for timing_us in [1000, 2000, 3000] {
    metrics.record(&GenerationStats {
      timing_us,
      ..Default::default()
    });
  }
  metrics.record_emit();

  assert_eq!(metrics.pass_timings.len(), 3);
  assert_eq!(metrics.avg_pass_timing_us(), 2000.0);
  assert_eq!(metrics.last.timing_us, 3000);

  metrics.reset();
  assert!(metrics.pass_timings.is_empty());
  assert_eq!(metrics.last, GenerationStats::default());
  assert_eq!(metrics.total_passes, 3);
  assert_eq!(metrics.total_emits, 1);
}
