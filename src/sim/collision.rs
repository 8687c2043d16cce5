//! Axis-aligned collision detection
//!
//! The only collision the game models: does the player's bounding box overlap
//! an obstacle's? A hit is terminal, so there is no response vector to
//! compute - just a boolean over current geometry.

use glam::Vec2;

/// An axis-aligned bounding box in viewport coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Build a box from a top-left corner and a fixed footprint
    #[inline]
    pub fn from_pos_size(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            right: pos.x + width,
            bottom: pos.y + height,
        }
    }
}

/// True iff the boxes overlap on both axes.
///
/// Strict inequalities: rectangles that merely touch along an edge still
/// count as contact.
#[inline]
pub fn collides(a: &Rect, b: &Rect) -> bool {
    !(a.bottom < b.top || a.top > b.bottom || a.right < b.left || a.left > b.right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_pos_size(Vec2::new(x, y), w, h)
    }

    #[test]
    fn test_disjoint_rects_miss() {
        let a = rect(0.0, 0.0, 50.0, 100.0);
        // Clear of `a` on each axis in turn
        assert!(!collides(&a, &rect(100.0, 0.0, 50.0, 100.0)));
        assert!(!collides(&a, &rect(0.0, 200.0, 50.0, 100.0)));
        assert!(!collides(&a, &rect(-80.0, 0.0, 50.0, 100.0)));
        assert!(!collides(&a, &rect(0.0, -150.0, 50.0, 100.0)));
    }

    #[test]
    fn test_edge_touching_counts_as_contact() {
        let a = rect(0.0, 0.0, 50.0, 100.0);
        // b's left edge on a's right edge
        assert!(collides(&a, &rect(50.0, 0.0, 50.0, 100.0)));
        // b's top edge on a's bottom edge
        assert!(collides(&a, &rect(0.0, 100.0, 50.0, 100.0)));
    }

    #[test]
    fn test_partial_overlap_hits() {
        let a = rect(0.0, 0.0, 50.0, 100.0);
        assert!(collides(&a, &rect(25.0, 50.0, 50.0, 100.0)));
        assert!(collides(&a, &rect(-25.0, -50.0, 50.0, 100.0)));
    }

    #[test]
    fn test_containment_hits() {
        let outer = rect(0.0, 0.0, 200.0, 200.0);
        let inner = rect(50.0, 50.0, 20.0, 20.0);
        assert!(collides(&outer, &inner));
        assert!(collides(&inner, &outer));
    }

    #[test]
    fn test_diagonal_neighbors_miss() {
        // Overlap on neither axis
        let a = rect(0.0, 0.0, 50.0, 100.0);
        assert!(!collides(&a, &rect(60.0, 110.0, 50.0, 100.0)));
    }

    proptest! {
        #[test]
        fn prop_collides_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(collides(&a, &b), collides(&b, &a));
        }

        #[test]
        fn prop_axis_gap_never_collides(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            gap in 0.1f32..300.0, bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            // Strictly to the right of `a`: separated on the x axis
            let b = rect(ax + aw + gap, ay, bw, bh);
            prop_assert!(!collides(&a, &b));
        }

        #[test]
        fn prop_rect_overlapping_itself_collides(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
        ) {
            let a = rect(x, y, w, h);
            prop_assert!(collides(&a, &a));
        }
    }
}
