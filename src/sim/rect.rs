//! Axis-aligned rectangle geometry
//!
//! The entire collision model of Gravity Flip is AABB overlap between the
//! player block and spike obstacles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }
}

/// AABB overlap test with strict inequalities on every bound.
///
/// Rectangles that touch exactly at an edge share only a zero-width strip
/// and do NOT overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.min.x < b.max().x && a.max().x > b.min.x && a.min.y < b.max().y && a.max().y > b.min.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(100.0, 100.0, 30.0, 30.0);
        let b = Rect::new(110.0, 110.0, 30.0, 30.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_distant_rects() {
        let a = Rect::new(100.0, 100.0, 30.0, 30.0);
        let b = Rect::new(200.0, 200.0, 30.0, 30.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        // b starts exactly where a ends - shared boundary, zero-width overlap
        let a = Rect::new(100.0, 100.0, 30.0, 30.0);
        let b = Rect::new(130.0, 100.0, 30.0, 30.0);
        assert!(!overlaps(&a, &b));

        // Same along the y axis
        let c = Rect::new(100.0, 130.0, 30.0, 30.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_contained_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn rect_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(overlaps(&r, &r));
        }
    }
}
