//! Segment/circle intersection for flight-path checks.

use glam::DVec2;

use halite_core::types::Coordinate;

/// Check whether the segment `start -> end` passes within `radius` of `center`.
///
/// The closest point of the segment to `center` is found by projecting onto the
/// segment direction and clamping at `end`. A circle lying entirely behind
/// `start` (projection below zero) never blocks. A zero-length segment
/// degenerates to a point-in-circle test.
pub fn segment_circle_intersects(
    start: Coordinate,
    end: Coordinate,
    center: Coordinate,
    radius: f64,
) -> bool {
    let start = DVec2::from(start);
    let end = DVec2::from(end);
    let center = DVec2::from(center);

    let segment = end - start;
    let length_sq = segment.length_squared();
    if length_sq == 0.0 {
        return start.distance(center) <= radius;
    }

    let t = (center - start).dot(segment) / length_sq;
    // A centre projecting behind the start never blocks.
    if t < 0.0 {
        return false;
    }

    let closest = start + segment * t.min(1.0);
    closest.distance(center) <= radius
}
