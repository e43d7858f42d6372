use glam::DVec3;
use super::*;

fn assert_orthonormal(a: Direction, b: Direction, c: Direction) {
    for d in [a, b, c] {
        assert!((d.vector().length() - 1.0).abs() < 1e-12);
    }
    assert!(a.dot(b).abs() < 1e-12);
    assert!(b.dot(c).abs() < 1e-12);
    assert!(c.dot(a).abs() < 1e-12);
}

#[test]
fn test_orthonormalize_keeps_first_direction() {
    let (d0, d1, d2) = orthonormalize(
        DVec3::new(0.0, 0.0, 3.0),
        DVec3::new(1.0, 0.0, 1.0),
        DVec3::new(1.0, 1.0, 1.0),
    ).unwrap();

    assert_eq!(d0, Direction::Z);
    assert_eq!(d1, Direction::X);
    assert_eq!(d2, Direction::Y);
}

#[test]
fn test_orthonormalize_skewed_inputs() {
    let (d0, d1, d2) = orthonormalize(
        DVec3::new(1.0, 2.0, 3.0),
        DVec3::new(-1.0, 0.5, 2.0),
        DVec3::new(4.0, -1.0, 0.25),
    ).unwrap();

    assert_orthonormal(d0, d1, d2);
    assert!(d0.vector().cross(DVec3::new(1.0, 2.0, 3.0)).length() < 1e-12);
}

#[test]
fn test_orthonormalize_zero_first_vector_fails() {
    assert!(orthonormalize(DVec3::ZERO, DVec3::X, DVec3::Y).is_none());
}

#[test]
fn test_orthonormalize_parallel_second_vector_fails() {
    assert!(orthonormalize_pair(DVec3::new(0.0, 0.0, 5.0), DVec3::new(0.0, 0.0, -1.0)).is_none());
    assert!(orthonormalize(DVec3::Z, DVec3::Z * 2.0, DVec3::X).is_none());
}

#[test]
fn test_orthonormalize_coplanar_third_vector_fails() {
    assert!(orthonormalize(DVec3::X, DVec3::Y, DVec3::new(2.0, -3.0, 0.0)).is_none());
}

#[test]
fn test_orthonormalize_nearly_parallel_counts_as_dependent() {
    // Second vector differs from the first only by rounding noise
    let up = Direction::new(DVec3::new(0.3, -0.7, 0.2)).unwrap();
    let z = up.vector() * 7.3;
    assert!(orthonormalize_pair(z, up.vector()).is_none());
}

#[test]
fn test_orthonormalize_small_but_real_angle_succeeds() {
    let (d0, d1) = orthonormalize_pair(DVec3::Z, DVec3::new(1e-6, 0.0, 1.0)).unwrap();
    assert_eq!(d0, Direction::Z);
    assert!((d1.vector() - DVec3::X).length() < 1e-9);
    assert!(d0.dot(d1).abs() < 1e-15);
}
