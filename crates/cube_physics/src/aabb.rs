//! Axis-aligned bounding boxes.
//!
//! Boxes are plain values. An entity's box is rebuilt from its position
//! every time it is needed instead of being cached on the collider.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use cube_shared::{IVec3, Vec3};

/// Axis-Aligned Bounding Box for collision detection.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner of the box.
    pub min: Vec3,
    /// Maximum corner of the box.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a new AABB.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    /// Box of a body standing at `feet`.
    ///
    /// The footprint is centered on X/Z and the box extends `height` up
    /// from `feet.y`. `max` is always exactly `min + (width, height, width)`.
    #[must_use]
    pub fn from_feet(feet: Vec3, width: f32, height: f32) -> Self {
        let half_w = width / 2.0;
        let min = Vec3::new(feet.x - half_w, feet.y, feet.z - half_w);
        Self {
            min,
            max: min + Vec3::new(width, height, width),
        }
    }

    /// Creates an AABB for a single block at integer coordinates.
    #[must_use]
    pub fn from_block(block: IVec3) -> Self {
        let min = block.as_vec3();
        Self {
            min,
            max: min + Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Checks if this AABB overlaps another. Touching faces count.
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Half of the overlap on each axis, or `None` when disjoint.
    ///
    /// Each component is `(max(mins) - min(maxes)) / 2`, so it is negative
    /// (or zero for touching boxes). The halving splits the push evenly
    /// between the two bodies; callers apply it as-is.
    #[must_use]
    pub fn intersection_depth(&self, other: &Aabb) -> Option<Vec3> {
        if !self.intersects(other) {
            return None;
        }

        let start = self.min.max(other.min);
        let end = self.max.min(other.max);
        Some((start - end) / 2.0)
    }

    /// Block containing the minimum corner.
    #[must_use]
    pub fn min_block(&self) -> IVec3 {
        self.min.floor()
    }

    /// Block containing the maximum corner.
    #[must_use]
    pub fn max_block(&self) -> IVec3 {
        self.max.floor()
    }

    /// Every block in `[min_block, max_block]`, X outer, Y middle, Z inner.
    ///
    /// The order is stable so the first solid block reported by a scan is
    /// reproducible.
    pub fn blocks(&self) -> impl Iterator<Item = IVec3> {
        let lo = self.min_block();
        let hi = self.max_block();

        (lo.x..=hi.x).flat_map(move |x| {
            (lo.y..=hi.y).flat_map(move |y| (lo.z..=hi.z).map(move |z| IVec3::new(x, y, z)))
        })
    }

    /// Moves the AABB by delta.
    #[must_use]
    pub fn translate(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Checks if `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersection() {
        let a = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.5, 1.5, 1.5));
        let c = Aabb::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));

        // Shared face
        let d = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&d));

        // Separated on Y only
        let e = Aabb::new(Vec3::new(0.0, 1.01, 0.0), Vec3::new(1.0, 2.0, 1.0));
        assert!(!a.intersects(&e));
    }

    #[test]
    fn test_from_feet() {
        let aabb = Aabb::from_feet(Vec3::ZERO, 0.6, 1.8);
        assert_eq!(aabb.min, Vec3::new(-0.3, 0.0, -0.3));
        assert_eq!(aabb.max, aabb.min + Vec3::new(0.6, 1.8, 0.6));
        assert_eq!(aabb.min_block(), IVec3::new(-1, 0, -1));
        assert_eq!(aabb.max_block(), IVec3::new(0, 1, 0));
    }

    #[test]
    fn test_blocks_order() {
        let aabb = Aabb::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.5, 1.5, 1.5));
        let blocks: Vec<IVec3> = aabb.blocks().collect();
        assert_eq!(
            blocks,
            vec![
                IVec3::new(0, 0, 0),
                IVec3::new(0, 0, 1),
                IVec3::new(0, 1, 0),
                IVec3::new(0, 1, 1),
                IVec3::new(1, 0, 0),
                IVec3::new(1, 0, 1),
                IVec3::new(1, 1, 0),
                IVec3::new(1, 1, 1),
            ]
        );

        let point = Aabb::new(Vec3::new(-0.5, 2.0, 3.25), Vec3::new(-0.5, 2.0, 3.25));
        assert_eq!(point.blocks().collect::<Vec<_>>(), vec![IVec3::new(-1, 2, 3)]);
    }

    #[test]
    fn test_intersection_depth() {
        let a = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0));
        let b = Aabb::new(Vec3::new(1.0, 1.5, -1.0), Vec3::new(3.0, 4.0, 1.0));

        let depth = a.intersection_depth(&b).unwrap();
        assert_eq!(depth, Vec3::new(-0.5, -0.25, -0.5));
        assert_eq!(b.intersection_depth(&a), Some(depth));

        let far = Aabb::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(6.0, 1.0, 1.0));
        assert_eq!(a.intersection_depth(&far), None);
    }

    #[test]
    fn test_from_block_and_contains() {
        let block = Aabb::from_block(IVec3::new(0, -3, 2));
        assert_eq!(block.min, Vec3::new(0.0, -3.0, 2.0));
        assert_eq!(block.max, Vec3::new(1.0, -2.0, 3.0));
        assert!(block.contains(Vec3::new(0.5, -2.5, 2.5)));
        assert!(!block.contains(Vec3::new(0.5, -1.5, 2.5)));

        let moved = block.translate(Vec3::new(0.0, 1.0, 0.0));
        assert!(moved.contains(Vec3::new(0.5, -1.5, 2.5)));
    }
}
