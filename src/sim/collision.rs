//! Collision detection for axis-aligned rectangles
//!
//! Two tests live here: the one-axis wall contact used for court boundaries, and the
//! strict rectangle overlap used for paddles. Both work on edge coordinates, with y
//! growing downward.

use glam::Vec2;

use super::state::{Wall, WallId};

/// Edges of an axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Build bounds from a center point and full width/height
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            left: center.x - half_w,
            right: center.x + half_w,
            top: center.y - half_h,
            bottom: center.y + half_h,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Check whether a body has reached a wall
///
/// Only the axis facing the wall is compared, and the comparison is inclusive: a body
/// touching the wall's inner edge counts as contact. The orthogonal axis is ignored, so
/// walls are expected to span the whole side of the court they guard.
pub fn wall_contact(body: &Bounds, wall: &Wall) -> bool {
    let wall_bounds = wall.bounds();
    match wall.id {
        WallId::Top => body.top <= wall_bounds.bottom,
        WallId::Bottom => body.bottom >= wall_bounds.top,
        WallId::Left => body.left <= wall_bounds.right,
        WallId::Right => body.right >= wall_bounds.left,
    }
}

/// Strict overlap of two rectangles on both axes (touching edges do not overlap)
pub fn rects_overlap(a: &Bounds, b: &Bounds) -> bool {
    a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top
}
