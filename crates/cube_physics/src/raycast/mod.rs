//! # Raycasting
//!
//! Two independent casts along the same `Ray`:
//!
//! - [`cast_block`]: walks the block grid in small fixed sub-steps and
//!   reports the first cell the caller accepts, with the face it entered.
//! - [`cast_entity`]: slab-tests candidate entity boxes nearest first and
//!   reports the first one the caller accepts.
//!
//! Both are bounded CPU loops. To stop early, return `true` from the
//! callback.

mod block;
mod entity;

pub use block::{cast_block, BlockHit};
pub use entity::{cast_entity, ray_box_intersection, PARALLEL_EPSILON};

use cube_shared::Vec3;

use crate::error::{PhysicsError, PhysicsResult};

/// Half-line with a unit direction, parameterized by distance travelled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    ///
    /// # Errors
    ///
    /// `DegenerateRay` if `direction` is zero or not finite, or `origin`
    /// is not finite.
    pub fn new(origin: Vec3, direction: Vec3) -> PhysicsResult<Self> {
        if !(origin.x.is_finite() && origin.y.is_finite() && origin.z.is_finite()) {
            return Err(PhysicsError::DegenerateRay);
        }
        let direction = direction.normalize_to(1.0).ok_or(PhysicsError::DegenerateRay)?;
        Ok(Self { origin, direction })
    }

    /// Start point.
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point `distance` along the ray.
    #[must_use]
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -4.0, 0.0)).unwrap();
        assert_eq!(ray.direction(), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(ray.at(2.5), Vec3::new(0.0, -2.5, 0.0));
    }

    #[test]
    fn test_degenerate_ray() {
        assert_eq!(Ray::new(Vec3::ZERO, Vec3::ZERO), Err(PhysicsError::DegenerateRay));
        assert_eq!(
            Ray::new(Vec3::new(f32::INFINITY, 0.0, 0.0), Vec3::X),
            Err(PhysicsError::DegenerateRay)
        );
    }
}
