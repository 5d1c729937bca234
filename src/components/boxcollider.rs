//! Axis-aligned collider with overlap and directional lookahead tests.
//!
//! [`Aabb`] is the pure geometry: a world-space rectangle with a strict
//! overlap predicate and four one-pixel lookahead predicates. The lookahead
//! tests let movement code ask "if I step this way next, will I collide?"
//! without mutating position speculatively.
//!
//! [`BoxCollider`] is the component wrapper: collider size and offset relative
//! to the entity position, plus the sticky `hit` flag written by the
//! collision system.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned bounding box in world space.
///
/// All predicates use strict inequalities, so a box with zero width or height
/// never registers against itself and edge-touching boxes do not overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict AABB intersection. Symmetric in its arguments.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x + self.w > other.x
            && self.x < other.x + other.w
            && self.y + self.h > other.y
            && self.y < other.y + other.h
    }

    fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.x + self.w > other.x && self.x < other.x + other.w
    }

    fn overlaps_vertically(&self, other: &Aabb) -> bool {
        self.y + self.h > other.y && self.y < other.y + other.h
    }

    /// Would moving one pixel down run `self` into `other`?
    ///
    /// Requires horizontal overlap, then anticipates the downward step with a
    /// one-pixel margin on the bottom edge.
    pub fn hits_bottom(&self, other: &Aabb) -> bool {
        self.overlaps_horizontally(other)
            && self.y < other.y + other.h
            && self.y + self.h + 1.0 > other.y
    }

    /// Would moving one pixel up run `self` into `other`?
    pub fn hits_top(&self, other: &Aabb) -> bool {
        self.overlaps_horizontally(other) && self.y - 1.0 < other.y + other.h && self.y > other.y
    }

    /// Would moving one pixel right run `self` into `other`?
    pub fn hits_right(&self, other: &Aabb) -> bool {
        self.overlaps_vertically(other)
            && self.x < other.x + other.w
            && self.x + self.w + 1.0 > other.x
    }

    /// Would moving one pixel left run `self` into `other`?
    pub fn hits_left(&self, other: &Aabb) -> bool {
        self.overlaps_vertically(other) && self.x - 1.0 < other.x + other.w && self.x > other.x
    }
}

/// Axis-aligned rectangular collider for collision detection.
///
/// `size` must be positive on both axes for an entity participating in
/// collision checks; zero-size boxes degenerate every predicate to false.
///
/// `hit` is the last computed collision result. The collision system only
/// ever sets it; it stays set until the caller decides on a fresh baseline
/// and calls [`BoxCollider::clear_hit`].
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
    pub hit: bool,
}

impl BoxCollider {
    /// Create a BoxCollider with given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
            hit: false,
        }
    }

    /// Modify BoxCollider with given offset.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space rectangle of the collider for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn rect(&self, position: Vec2) -> Aabb {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vec2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vec2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        Aabb::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different
    /// entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        self.rect(position).overlaps(&other.rect(other_position))
    }

    /// Reset the sticky `hit` flag. The runtime never clears it on its own.
    pub fn clear_hit(&mut self) {
        self.hit = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(x, y, w, h)
    }

    // ==================== OVERLAP TESTS ====================

    #[test]
    fn test_overlap_intersecting() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_edge_touching_is_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        let below = boxed(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_overlap_contained() {
        let outer = boxed(0.0, 0.0, 100.0, 100.0);
        let inner = boxed(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_overlap_zero_size_against_itself() {
        let point = boxed(5.0, 5.0, 0.0, 0.0);
        assert!(!point.overlaps(&point));
    }

    // ==================== BOTTOM LOOKAHEAD TESTS ====================

    #[test]
    fn test_bottom_hit_standing_on_platform() {
        // a rests exactly on top of b: no overlap, but a one-pixel step down
        // would sink in.
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(0.0, 10.0, 30.0, 5.0);
        assert!(!a.overlaps(&b));
        assert!(a.hits_bottom(&b));
    }

    #[test]
    fn test_bottom_hit_requires_horizontal_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(50.0, 10.0, 30.0, 5.0);
        assert!(!a.hits_bottom(&b));
    }

    #[test]
    fn test_bottom_hit_false_with_air_gap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(0.0, 12.0, 30.0, 5.0);
        assert!(!a.hits_bottom(&b));
    }

    #[test]
    fn test_bottom_hit_implies_shifted_overlap() {
        let a = boxed(2.0, 0.0, 10.0, 10.0);
        let b = boxed(0.0, 10.0, 30.0, 5.0);
        assert!(a.hits_bottom(&b));
        let shifted = boxed(a.x, a.y + 1.0, a.w, a.h);
        assert!(shifted.overlaps(&b));
    }

    // ==================== TOP LOOKAHEAD TESTS ====================

    #[test]
    fn test_top_hit_under_ceiling() {
        // a hangs exactly below b.
        let a = boxed(0.0, 15.0, 10.0, 10.0);
        let b = boxed(0.0, 10.0, 30.0, 5.0);
        assert!(!a.overlaps(&b));
        assert!(a.hits_top(&b));
    }

    #[test]
    fn test_top_hit_requires_horizontal_overlap() {
        let a = boxed(50.0, 15.0, 10.0, 10.0);
        let b = boxed(0.0, 10.0, 30.0, 5.0);
        assert!(!a.hits_top(&b));
    }

    #[test]
    fn test_top_hit_false_when_above() {
        let a = boxed(0.0, 0.0, 10.0, 5.0);
        let b = boxed(0.0, 10.0, 30.0, 5.0);
        assert!(!a.hits_top(&b));
    }

    // ==================== SIDE LOOKAHEAD TESTS ====================

    #[test]
    fn test_right_hit_against_wall() {
        // a flush against the left face of b.
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 5.0, 30.0);
        assert!(!a.overlaps(&b));
        assert!(a.hits_right(&b));
    }

    #[test]
    fn test_right_hit_requires_vertical_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 50.0, 5.0, 30.0);
        assert!(!a.hits_right(&b));
    }

    #[test]
    fn test_right_hit_false_with_gap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(12.0, 0.0, 5.0, 30.0);
        assert!(!a.hits_right(&b));
    }

    #[test]
    fn test_left_hit_against_wall() {
        // a flush against the right face of b.
        let a = boxed(15.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 5.0, 30.0);
        assert!(!a.overlaps(&b));
        assert!(a.hits_left(&b));
    }

    #[test]
    fn test_left_hit_requires_vertical_overlap() {
        let a = boxed(15.0, 50.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 5.0, 30.0);
        assert!(!a.hits_left(&b));
    }

    #[test]
    fn test_left_hit_false_when_past_wall() {
        let a = boxed(2.0, 0.0, 4.0, 10.0);
        let b = boxed(10.0, 0.0, 5.0, 30.0);
        assert!(!a.hits_left(&b));
    }

    // ==================== BOXCOLLIDER TESTS ====================

    #[test]
    fn test_collider_rect_at_position() {
        let c = BoxCollider::new(10.0, 20.0);
        let r = c.rect(Vec2::new(5.0, 7.0));
        assert_eq!(r, Aabb::new(5.0, 7.0, 10.0, 20.0));
    }

    #[test]
    fn test_collider_rect_with_offset() {
        let c = BoxCollider::new(10.0, 20.0).with_offset(Vec2::new(-5.0, -10.0));
        let r = c.rect(Vec2::new(5.0, 10.0));
        assert_eq!(r, Aabb::new(0.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn test_collider_rect_normalizes_negative_size() {
        let mut c = BoxCollider::new(-10.0, -20.0);
        c.offset = Vec2::ZERO;
        let r = c.rect(Vec2::new(0.0, 0.0));
        assert_eq!(r, Aabb::new(-10.0, -20.0, 10.0, 20.0));
    }

    #[test]
    fn test_collider_overlaps() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(5.0, 5.0)));
        assert!(!a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn test_clear_hit() {
        let mut c = BoxCollider::new(10.0, 10.0);
        c.hit = true;
        c.clear_hit();
        assert!(!c.hit);
    }
}
