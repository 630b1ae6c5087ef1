use super::*;

#[test]
fn test_homogeneous_cubes_have_no_geometry() {
  let outside = classify(&[1.0; 8], 0.0);
  assert_eq!(outside.mask, 0);
  assert!(!outside.has_geometry());

  let inside = classify(&[-1.0; 8], 0.0);
  assert_eq!(inside.mask, 0xFF);
  assert!(!inside.has_geometry());
}

#[test]
fn test_single_corner_bits() {
  for corner in 0..8 {
    let mut cube = [1.0; 8];
    cube[corner] = -1.0;
    let class = classify(&cube, 0.0);
    assert_eq!(class.mask, 1 << corner);
    assert_eq!(class.crossed_edges.count_ones(), 3);
  }
}

#[test]
fn test_corner_mask_crossed_edges_for_corner_zero() {
  let mut cube = [1.0; 8];
  cube[0] = -1.0;
  let class = classify(&cube, 0.0);
  // Edges 0, 3 and 8 meet at corner 0
  assert!(class.is_edge_crossed(0));
  assert!(class.is_edge_crossed(3));
  assert!(class.is_edge_crossed(8));
  assert!(!class.is_edge_crossed(1));
  assert_eq!(class.crossed_edges, 0x109);
}

#[test]
fn test_tie_counts_as_inside() {
  let mut cube = [1.0; 8];
  cube[5] = 0.25;
  assert_eq!(corner_mask(&cube, 0.25), 1 << 5);
  assert_eq!(strict_corner_mask(&cube, 0.25), 0);
}

#[test]
fn test_masks_agree_without_ties() {
  let cube = [-0.5, 0.5, 1.5, -2.0, 3.0, -0.1, 0.1, 0.7];
  assert_eq!(corner_mask(&cube, 0.2), strict_corner_mask(&cube, 0.2));
  assert_eq!(corner_mask(&cube, 0.2), 0b0010_1001 | 1 << 6);
}

#[test]
fn test_nan_corners_are_outside() {
  let mut cube = [-1.0; 8];
  cube[2] = f32::NAN;
  assert_eq!(corner_mask(&cube, 0.0), !(1u8 << 2));
}
