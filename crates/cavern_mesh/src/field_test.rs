use super::*;

#[test]
fn test_new_checks_length() {
  assert!(ScalarField::new([2, 2, 2], vec![0.0; 8]).is_ok());
  assert_eq!(
    ScalarField::new([2, 2, 2], vec![0.0; 7]),
    Err(FieldError::LengthMismatch {
      expected: 8,
      actual: 7
    })
  );
}

#[test]
fn test_from_nested_matches_flat_layout() {
  // nested[z][y][x] = 100z + 10y + x
  let nested: Vec<Vec<Vec<f32>>> = (0..2)
    .map(|z| {
      (0..3)
        .map(|y| (0..4).map(|x| (100 * z + 10 * y + x) as f32).collect())
        .collect()
    })
    .collect();

  let field = ScalarField::from_nested(nested).expect("rectangular");
  assert_eq!(field.dims(), [4, 3, 2]);
  assert_eq!(field.sample(3, 2, 1), 123.0);
  assert_eq!(field.sample(1, 0, 1), 101.0);
  assert_eq!(field.as_slice()[lattice_index(2, 1, 0, [4, 3, 2])], 12.0);
}

#[test]
fn test_from_nested_rejects_ragged() {
  let nested = vec![
    vec![vec![0.0, 0.0], vec![0.0, 0.0]],
    vec![vec![0.0, 0.0], vec![0.0]],
  ];
  assert_eq!(
    ScalarField::from_nested(nested),
    Err(FieldError::Ragged {
      axis: "x",
      index: 3,
      expected: 2,
      actual: 1
    })
  );

  let nested = vec![vec![vec![0.0]], vec![vec![0.0], vec![0.0]]];
  assert!(matches!(
    ScalarField::from_nested(nested),
    Err(FieldError::Ragged { axis: "y", .. })
  ));
}

#[test]
fn test_from_nested_empty() {
  let field = ScalarField::from_nested(Vec::new()).expect("empty is valid");
  assert_eq!(field.dims(), [0, 0, 0]);
  assert!(field.as_slice().is_empty());
}

#[test]
fn test_get_and_set_bounds() {
  let mut field = ScalarField::filled([3, 3, 3], 1.0);
  assert!(field.set(1, 1, 1, -1.0));
  assert_eq!(field.get(1, 1, 1), Some(-1.0));
  assert_eq!(field.get(0, 0, 0), Some(1.0));

  assert!(!field.set(3, 0, 0, 5.0));
  assert_eq!(field.get(0, 3, 0), None);
  assert_eq!(field.get(0, 0, 3), None);
}

#[test]
fn test_for_grid_uses_sample_dims() {
  let field = ScalarField::for_grid(GridDimensions::new(2, 3, 4), |x, y, z| (x + y + z) as f32);
  assert_eq!(field.dims(), [3, 4, 5]);
  assert_eq!(field.sample(2, 3, 4), 9.0);
}

#[test]
fn test_materialize_matches_source() {
  let source = FnField::new([5, 4, 3], |x, y, z| (x * 7 + y * 3) as f32 - z as f32 * 0.5);
  let dense = ScalarField::materialize(&source);

  assert_eq!(dense.dims(), [5, 4, 3]);
  assert_eq!(dense, ScalarField::from_fn([5, 4, 3], |x, y, z| source.sample(x, y, z)));
}

#[test]
fn test_materialize_empty_source() {
  let source = FnField::new([0, 4, 4], |_, _, _| 1.0);
  let dense = ScalarField::materialize(&source);
  assert!(dense.as_slice().is_empty());
}

#[test]
fn test_negate() {
  let mut field = ScalarField::from_fn([2, 1, 1], |x, _, _| x as f32 + 1.0);
  field.negate();
  assert_eq!(field.as_slice(), &[-1.0, -2.0]);
}

#[test]
fn test_height_field_from_rows() {
  let heights = HeightField::from_rows(vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]])
    .expect("rectangular");
  assert_eq!(heights.rows(), 2);
  assert_eq!(heights.cols(), 3);
  assert_eq!(heights.get(1, 2), Some(5.0));
  assert_eq!(heights.get(2, 0), None);
  assert_eq!(heights.max_height(), Some(5.0));

  assert_eq!(
    HeightField::from_rows(vec![vec![], vec![]]),
    Err(FieldError::EmptyHeightField)
  );
  assert!(matches!(
    HeightField::from_rows(vec![vec![0.0, 1.0], vec![2.0]]),
    Err(FieldError::Ragged { index: 1, .. })
  ));
  assert!(HeightField::new(2, 2, vec![0.0; 3]).is_err());
}

#[test]
fn test_height_axis_place_and_split() {
  for axis in [HeightAxis::X, HeightAxis::Y, HeightAxis::Z] {
    let p = axis.place(7.0, 1.0, 2.0);
    assert_eq!(axis.split(p), (7.0, 1.0, 2.0), "axis {:?}", axis);
  }
  assert_eq!(HeightAxis::X.place(7.0, 1.0, 2.0), [7.0, 1.0, 2.0]);
  assert_eq!(HeightAxis::Z.place(7.0, 1.0, 2.0), [1.0, 2.0, 7.0]);
}

#[test]
fn test_height_field_volume_density() {
  let heights = HeightField::from_fn(3, 4, |row, col| (row + col) as f32 * 0.5);
  let volume = HeightFieldVolume::new(&heights, HeightAxis::Y, 6);

  assert_eq!(volume.sample_dims(), [4, 6, 3]);
  // Below the surface is negative, above is positive
  assert_eq!(volume.sample(2, 0, 1), -1.5);
  assert_eq!(volume.sample(2, 5, 1), 3.5);

  let volume = HeightFieldVolume::new(&heights, HeightAxis::X, 2);
  assert_eq!(volume.sample_dims(), [2, 4, 3]);
  assert_eq!(volume.sample(1, 3, 2), 1.0 - 2.5);
}
