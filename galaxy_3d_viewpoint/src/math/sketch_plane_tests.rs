use glam::{DVec2, DVec3};
use super::*;

fn tilted_frame() -> Frame {
    Frame::from_z_direction(
        Point::new(2.0, 0.0, -1.0),
        Direction::new(DVec3::new(0.0, 1.0, 1.0)).unwrap(),
    )
}

#[test]
fn test_xy_of_world_frame() {
    let plane = SketchPlane::xy_of(&Frame::WORLD);
    assert_eq!(plane.origin(), Point::ORIGIN);
    assert_eq!(plane.x_direction(), Direction::X);
    assert_eq!(plane.y_direction(), Direction::Y);
    assert_eq!(plane.normal(), Direction::Z);
}

#[test]
fn test_normal_matches_frame_z() {
    let frame = tilted_frame();
    let plane = SketchPlane::xy_of(&frame);
    assert!((plane.normal().vector() - frame.z_direction().vector()).length() < 1e-12);
}

#[test]
fn test_point_at_and_project() {
    let plane = SketchPlane::xy_of(&tilted_frame());
    let p = plane.point_at(1.5, -2.0);
    let uv = plane.project(p);
    assert!((uv - DVec2::new(1.5, -2.0)).length() < 1e-12);
    assert!(plane.signed_distance(p).abs() < 1e-12);
}

#[test]
fn test_signed_distance_along_normal() {
    let plane = SketchPlane::xy_of(&tilted_frame());
    let above = plane.point_at(0.3, 0.7) + plane.normal().vector() * 4.0;
    assert!((plane.signed_distance(above) - 4.0).abs() < 1e-12);
    assert!((plane.project(above) - DVec2::new(0.3, 0.7)).length() < 1e-12);
}
