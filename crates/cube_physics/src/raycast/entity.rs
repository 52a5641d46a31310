//! Entity raycaster (slab test against entity boxes).

use crate::aabb::Aabb;
use crate::world::{Entity, EntityKind};

use super::Ray;

/// Direction components below this are treated as parallel to the slab.
///
/// Dividing by a subnormal component overflows to infinity, and
/// `0.0 * inf` is NaN, which `f32::min`/`max` would silently discard.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Slab test of `ray` against `aabb`.
///
/// Returns the entry and exit distances `(t_min, t_max)` along the ray when
/// it intersects the box ahead of (or around) its origin. `t_min` is
/// negative when the origin is inside the box.
///
/// A direction component smaller than [`PARALLEL_EPSILON`] is handled
/// without dividing: the ray is treated as parallel to that slab, so it
/// either lies inside it (no constraint on `t`) or never reaches the box.
#[must_use]
pub fn ray_box_intersection(ray: &Ray, aabb: &Aabb) -> Option<(f32, f32)> {
    let origin = ray.origin().to_array();
    let dir = ray.direction().to_array();
    let min = aabb.min.to_array();
    let max = aabb.max.to_array();

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        if dir[axis].abs() < PARALLEL_EPSILON {
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir[axis];
        let t1 = (min[axis] - origin[axis]) * inv;
        let t2 = (max[axis] - origin[axis]) * inv;

        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    (t_max >= 0.0 && t_min <= t_max).then_some((t_min, t_max))
}

/// First entity hit by `ray`, nearest first.
///
/// Candidates are narrowed to `target` (any kind when `None`) and to those
/// whose position is within `max_radius` of the ray origin, then visited in
/// ascending distance from the origin; equal distances keep their input
/// order. `is_match` is only consulted for candidates the ray actually
/// intersects, and the first one it accepts is returned.
pub fn cast_entity<'a, E, I, F>(
    ray: &Ray,
    max_radius: f32,
    candidates: I,
    target: Option<EntityKind>,
    mut is_match: F,
) -> Option<&'a E>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
    F: FnMut(&E) -> bool,
{
    let origin = ray.origin();
    let radius_sq = max_radius * max_radius;

    let mut nearby: Vec<(f32, &'a E)> = candidates
        .into_iter()
        .filter(|entity| target.is_none() || target == Some(entity.kind()))
        .map(|entity| (entity.position().distance_squared(origin), entity))
        .filter(|&(dist_sq, _)| dist_sq <= radius_sq)
        .collect();

    // Stable: ties keep insertion order
    nearby.sort_by(|a, b| a.0.total_cmp(&b.0));

    let hit = nearby
        .into_iter()
        .map(|(_, entity)| entity)
        .find(|&entity| ray_box_intersection(ray, &entity.bounds()).is_some() && is_match(entity));

    if let Some(entity) = hit {
        tracing::trace!("Entity ray hit {:?} ({:?})", entity.id(), entity.kind());
    }
    hit
}
