//! Flat face normals.

use glam::Vec3A;

/// Unit normal of triangle `(v1, v2, v3)`: `normalize((v2 - v1) × (v3 - v1))`.
///
/// Degenerate triangles get a zero normal.
#[inline]
pub fn face_normal(v1: Vec3A, v2: Vec3A, v3: Vec3A) -> Vec3A {
  (v2 - v1).cross(v3 - v1).normalize_or_zero()
}

#[cfg(test)]
#[path = "normal_test.rs"]
mod normal_test;
