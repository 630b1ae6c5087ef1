use super::*;

#[test]
fn test_counter_clockwise_xy_faces_up() {
  let n = face_normal(Vec3A::ZERO, Vec3A::X, Vec3A::Y);
  assert!((n - Vec3A::Z).length() < 1e-6);
}

#[test]
fn test_swapped_order_flips_normal() {
  let a = face_normal(Vec3A::ZERO, Vec3A::X, Vec3A::Y);
  let b = face_normal(Vec3A::Y, Vec3A::X, Vec3A::ZERO);
  assert!((a + b).length() < 1e-6);
}

#[test]
fn test_normal_is_unit_length() {
  let n = face_normal(
    Vec3A::new(0.5, 0.0, 0.0),
    Vec3A::new(0.0, 0.0, 0.5),
    Vec3A::new(0.0, 0.5, 0.0),
  );
  assert!((n.length() - 1.0).abs() < 1e-5);
  let expected = Vec3A::splat(-1.0).normalize();
  assert!((n - expected).length() < 1e-5);
}

#[test]
fn test_degenerate_triangle_has_zero_normal() {
  let p = Vec3A::new(1.0, 2.0, 3.0);
  assert_eq!(face_normal(p, p, p), Vec3A::ZERO);
  assert_eq!(face_normal(Vec3A::ZERO, Vec3A::X, Vec3A::X * 2.0), Vec3A::ZERO);
}
