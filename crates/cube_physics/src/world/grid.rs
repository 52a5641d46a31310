//! Hash-map backed world.

use std::collections::HashMap;

use cube_shared::{IVec3, Vec3};

use super::{Block, Entity, EntityId, EntityKind, World};
use crate::collider::Collider;

/// Block with nothing but a solidity flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBlock {
    /// Does the block stop movement and rays?
    pub solid: bool,
}

impl GridBlock {
    /// Non-solid block (air, water, tall grass).
    pub const AIR: Self = Self { solid: false };
    /// Solid block (stone, dirt, planks).
    pub const STONE: Self = Self { solid: true };
}

impl Block for GridBlock {
    fn is_solid(&self) -> bool {
        self.solid
    }
}

/// Entity stored in a `GridWorld`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridEntity {
    id: EntityId,
    kind: EntityKind,
    /// Feet position.
    pub position: Vec3,
    collider: Collider,
}

impl Entity for GridEntity {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn collider(&self) -> &Collider {
        &self.collider
    }
}

/// Sparse block map plus an entity list kept in spawn order.
#[derive(Clone, Debug, Default)]
pub struct GridWorld {
    blocks: HashMap<IVec3, GridBlock>,
    entities: Vec<GridEntity>,
    next_id: u32,
}

impl GridWorld {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `block` at `pos`, replacing what was there.
    pub fn set_block(&mut self, pos: IVec3, block: GridBlock) {
        self.blocks.insert(pos, block);
    }

    /// Stores a solid block at `pos`.
    pub fn set_solid(&mut self, pos: IVec3) {
        self.set_block(pos, GridBlock::STONE);
    }

    /// Removes the block at `pos`, returning it.
    pub fn remove_block(&mut self, pos: IVec3) -> Option<GridBlock> {
        self.blocks.remove(&pos)
    }

    /// Adds an entity and returns its id. Ids are never reused.
    pub fn spawn(&mut self, kind: EntityKind, position: Vec3, collider: Collider) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(GridEntity {
            id,
            kind,
            position,
            collider,
        });
        id
    }

    /// Removes an entity, returning it.
    pub fn despawn(&mut self, id: EntityId) -> Option<GridEntity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    /// Looks up an entity.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&GridEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Looks up an entity for mutation (e.g. committing a move).
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut GridEntity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Number of stored blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

impl World for GridWorld {
    type Block = GridBlock;
    type Entity = GridEntity;

    fn block_at(&self, pos: IVec3) -> Option<&GridBlock> {
        self.blocks.get(&pos)
    }

    fn entities(&self) -> impl Iterator<Item = &GridEntity> {
        self.entities.iter()
    }
}
