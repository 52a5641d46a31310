//! # World Interface
//!
//! The physics core never owns blocks or entities. It reaches them through
//! the `World`, `Block` and `Entity` traits for the duration of one query.
//!
//! `GridWorld` is a small in-memory implementation used by tests, benches
//! and tools that do not need chunked storage.

mod grid;

pub use grid::{GridBlock, GridEntity, GridWorld};

use cube_shared::{IVec3, Vec3};

use crate::aabb::Aabb;
use crate::collider::Collider;

/// Unique entity handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Entity variant tag, used to narrow entity raycasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A player body.
    Player,
    /// Any AI-driven mob.
    Creature,
    /// A dropped item lying in the world.
    ItemDrop,
}

/// A block as seen by the physics core.
pub trait Block {
    /// Does this block stop movement and rays?
    fn is_solid(&self) -> bool;
}

/// An entity as seen by the physics core.
pub trait Entity {
    /// Stable identity, used to exclude an entity from its own queries.
    fn id(&self) -> EntityId;

    /// Variant tag.
    fn kind(&self) -> EntityKind;

    /// Feet position.
    fn position(&self) -> Vec3;

    /// Body size.
    fn collider(&self) -> &Collider;

    /// Current box, derived from position and collider.
    fn bounds(&self) -> Aabb {
        self.collider().bounds_at(self.position())
    }
}

/// Block and entity lookup.
pub trait World {
    /// Block type stored in this world.
    type Block: Block;
    /// Entity type stored in this world.
    type Entity: Entity;

    /// Block at `pos`, `None` for empty space or unloaded terrain.
    fn block_at(&self, pos: IVec3) -> Option<&Self::Block>;

    /// Every entity in the world.
    fn entities(&self) -> impl Iterator<Item = &Self::Entity>;

    /// Entities whose position is within `radius` of `center`.
    ///
    /// The default filters [`World::entities`]; spatially indexed worlds
    /// should override it.
    fn entities_in_radius(&self, center: Vec3, radius: f32) -> impl Iterator<Item = &Self::Entity> {
        let radius_sq = radius * radius;
        self.entities()
            .filter(move |entity| entity.position().distance_squared(center) <= radius_sq)
    }

    /// Is there a solid block at `pos`? Missing blocks are not solid.
    fn is_solid(&self, pos: IVec3) -> bool {
        self.block_at(pos).is_some_and(Block::is_solid)
    }
}

/// A block coordinate in a particular world.
pub struct Location<'w, W: World> {
    world: &'w W,
    pos: IVec3,
}

impl<'w, W: World> Location<'w, W> {
    /// Binds `pos` to `world`.
    #[must_use]
    pub fn new(world: &'w W, pos: IVec3) -> Self {
        Self { world, pos }
    }

    /// The block coordinate.
    #[must_use]
    pub fn pos(&self) -> IVec3 {
        self.pos
    }

    /// The block stored at this location, if any.
    #[must_use]
    pub fn block(&self) -> Option<&'w W::Block> {
        self.world.block_at(self.pos)
    }

    /// The neighbouring location one step in `direction`.
    #[must_use]
    pub fn offset(&self, direction: cube_shared::Direction) -> Self {
        Self::new(self.world, self.pos + direction.offset())
    }
}

impl<W: World> Clone for Location<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: World> Copy for Location<'_, W> {}
