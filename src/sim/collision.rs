//! Hit detection between polylines
//!
//! Hitboxes are short lists of line segments. Two hitboxes touch when any
//! pair of their segments straddle each other.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A line segment from `begin` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub begin: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(begin: Vec2, end: Vec2) -> Self {
        Self { begin, end }
    }

    /// Direction vector (end - begin)
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.begin
    }

    /// True unless both endpoints of `other` lie strictly on the same side
    /// of the infinite line through `self`
    #[inline]
    fn straddled_by(&self, other: &Segment) -> bool {
        let dir = self.direction();
        let side_begin = dir.perp_dot(other.begin - self.begin);
        let side_end = dir.perp_dot(other.end - self.begin);
        side_begin * side_end <= 0.0
    }
}

/// Segment intersection via the cross-product straddle test
///
/// Touching endpoints and collinear overlap count as intersecting.
#[inline]
pub fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    a.straddled_by(b) && b.straddled_by(a)
}

/// Check two hitboxes, stopping at the first intersecting segment pair
pub fn hit_check(lines_a: &[Segment], lines_b: &[Segment]) -> bool {
    lines_a
        .iter()
        .any(|a| lines_b.iter().any(|b| segments_intersect(a, b)))
}

/// Build a closed outline from corner points (last corner joins the first)
pub fn closed_outline(corners: &[Vec2]) -> Vec<Segment> {
    if corners.len() < 2 {
        return Vec::new();
    }
    corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .map(|(&begin, &end)| Segment::new(begin, end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seg(bx: f32, by: f32, ex: f32, ey: f32) -> Segment {
        Segment::new(Vec2::new(bx, by), Vec2::new(ex, ey))
    }

    #[test]
    fn test_crossing_segments() {
        assert!(segments_intersect(
            &seg(0.0, 0.0, 10.0, 10.0),
            &seg(0.0, 10.0, 10.0, 0.0)
        ));
    }

    #[test]
    fn test_parallel_segments_miss() {
        assert!(!segments_intersect(
            &seg(0.0, 0.0, 10.0, 0.0),
            &seg(0.0, 1.0, 10.0, 1.0)
        ));
    }

    #[test]
    fn test_short_segment_stops_before_line() {
        // Would cross if extended, but ends before reaching the other segment
        assert!(!segments_intersect(
            &seg(0.0, 0.0, 10.0, 0.0),
            &seg(5.0, 5.0, 5.0, 1.0)
        ));
    }

    #[test]
    fn test_touching_endpoint_counts() {
        assert!(segments_intersect(
            &seg(0.0, 0.0, 10.0, 0.0),
            &seg(10.0, 0.0, 10.0, 5.0)
        ));
    }

    #[test]
    fn test_closed_outline_wraps() {
        let corners = [
            Vec2::new(-5.0, -15.0),
            Vec2::new(5.0, -15.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(-5.0, 10.0),
        ];
        let outline = closed_outline(&corners);
        assert_eq!(outline.len(), 4);
        assert_eq!(outline[3].end, corners[0]);
    }

    #[test]
    fn test_bullet_path_through_box() {
        let rect = closed_outline(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(0.0, 20.0),
        ]);
        let path = [seg(20.0, 10.0, -10.0, 10.0)];
        assert!(hit_check(&rect, &path));

        let above = [seg(20.0, -5.0, -10.0, -5.0)];
        assert!(!hit_check(&rect, &above));
    }

    #[test]
    fn test_empty_hitbox_never_hits() {
        let path = [seg(0.0, 0.0, 1.0, 1.0)];
        assert!(!hit_check(&[], &path));
        assert!(!hit_check(&path, &[]));
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            cx in -100.0f32..100.0, cy in -100.0f32..100.0,
            dx in -100.0f32..100.0, dy in -100.0f32..100.0,
        ) {
            let a = seg(ax, ay, bx, by);
            let b = seg(cx, cy, dx, dy);
            prop_assert_eq!(segments_intersect(&a, &b), segments_intersect(&b, &a));
            prop_assert_eq!(hit_check(&[a], &[b]), hit_check(&[b], &[a]));
        }
    }
}
