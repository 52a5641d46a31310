//! # Cube Physics
//!
//! Spatial queries on the block grid:
//!
//! - **Collision**: does a body placed at a candidate position overlap a
//!   solid block or another entity?
//! - **Block raycast**: which block is the camera looking at, and through
//!   which face?
//! - **Entity raycast**: which entity is the camera looking at?
//!
//! ## Design Principles
//!
//! 1. **Pure queries**: colliders hold only their size; every query takes
//!    the position explicitly and returns plain values
//! 2. **Borrowed world**: blocks and entities are reached through the
//!    [`World`] trait and never owned
//! 3. **Discrete**: one sampled position per query, no sweeping and no
//!    collision response
//!
//! ## Example
//!
//! ```rust
//! use cube_physics::{Block, Collider, GridWorld, PhysicsConfig, Viewpoint};
//! use cube_shared::{IVec3, Vec3};
//!
//! let mut world = GridWorld::new();
//! world.set_solid(IVec3::new(0, -1, 0));
//!
//! let config = PhysicsConfig::default();
//! let body = Collider::new(config.player_width, config.player_height);
//! assert_eq!(body.collides_blocks(&world, Vec3::new(0.5, -0.5, 0.5)), Some(IVec3::new(0, -1, 0)));
//!
//! let mut eye = Viewpoint::at_eyes(Vec3::new(0.5, 0.0, 0.5), &config);
//! eye.set_rotation(0.0, -90.0);
//! let hit = eye.pick_block(&world, &config, Block::is_solid).unwrap();
//! assert_eq!(hit.map(|h| h.block), Some(IVec3::new(0, -1, 0)));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod aabb;
pub mod collider;
pub mod config;
pub mod error;
pub mod raycast;
pub mod viewpoint;
pub mod world;

pub use aabb::Aabb;
pub use collider::Collider;
pub use config::PhysicsConfig;
pub use error::{PhysicsError, PhysicsResult};
pub use raycast::{cast_block, cast_entity, ray_box_intersection, BlockHit, Ray};
pub use viewpoint::Viewpoint;
pub use world::{
    Block, Entity, EntityId, EntityKind, GridBlock, GridEntity, GridWorld, Location, World,
};
