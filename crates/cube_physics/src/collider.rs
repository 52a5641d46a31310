//! # Entity Collider
//!
//! A collider is just a body size. Every query takes the candidate position
//! explicitly, builds the box for it, and returns what it found. Nothing is
//! cached between calls, so one collider can be queried from several
//! threads at once.
//!
//! Collision here is discrete: each call tests one sampled position. There
//! is no sweep and no response; callers decide what to do with a hit.

use cube_shared::{IVec3, Vec3};

use crate::aabb::Aabb;
use crate::world::{Entity, EntityId, World};

/// Box-shaped body: `width` on X and Z, `height` on Y, anchored at the feet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collider {
    width: f32,
    height: f32,
}

impl Collider {
    /// Creates a collider of fixed size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "collider must have volume");
        Self { width, height }
    }

    /// Width on X and Z (blocks).
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height on Y (blocks).
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Box this collider occupies with its feet at `position`.
    #[must_use]
    pub fn bounds_at(&self, position: Vec3) -> Aabb {
        Aabb::from_feet(position, self.width, self.height)
    }

    /// First solid block overlapped at `position`, or `None`.
    ///
    /// Every block in the box's block range is passed to `is_solid`
    /// (a full volume scan, X outer, Y middle, Z inner) until one reports
    /// solid. The scan order decides which block is returned when several
    /// are solid.
    pub fn collides_world<F>(&self, position: Vec3, mut is_solid: F) -> Option<IVec3>
    where
        F: FnMut(IVec3) -> bool,
    {
        let hit = self.bounds_at(position).blocks().find(|&block| is_solid(block));
        if let Some(block) = hit {
            tracing::trace!("Collider at {} hits block {}", position, block);
        }
        hit
    }

    /// [`Collider::collides_world`] resolved against a `World`.
    pub fn collides_blocks<W: World>(&self, world: &W, position: Vec3) -> Option<IVec3> {
        self.collides_world(position, |block| world.is_solid(block))
    }

    /// First entity in `others` whose current box overlaps this collider
    /// placed at `position`.
    ///
    /// `self_id` is skipped. The other entities' boxes are taken from their
    /// current positions; only this collider is moved.
    pub fn collides_entity<'a, E, I>(
        &self,
        self_id: EntityId,
        position: Vec3,
        others: I,
    ) -> Option<&'a E>
    where
        E: Entity + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let bounds = self.bounds_at(position);
        let hit = others
            .into_iter()
            .filter(|other| other.id() != self_id)
            .find(|other| other.bounds().intersects(&bounds));

        if let Some(other) = hit {
            tracing::trace!("Entity {:?} at {} hits entity {:?}", self_id, position, other.id());
        }
        hit
    }

    /// Would the body collide with terrain or another entity at `position`?
    ///
    /// Terrain is tested first; the entity scan only runs when no block is
    /// hit.
    pub fn does_collide<W: World>(&self, world: &W, self_id: EntityId, position: Vec3) -> bool {
        self.collides_blocks(world, position).is_some()
            || self.collides_entity(self_id, position, world.entities()).is_some()
    }

    /// Penetration of this collider at `position` into `other`, halved per
    /// axis. See [`Aabb::intersection_depth`].
    pub fn intersection_depth<E: Entity>(&self, position: Vec3, other: &E) -> Option<Vec3> {
        self.bounds_at(position).intersection_depth(&other.bounds())
    }
}
