//! # Cube Shared
//!
//! Value types used by every layer of the voxel engine.
//!
//! ## Contents
//!
//! - `Vec3` / `IVec3`: continuous positions and discrete block coordinates
//! - `Direction`: the six axis-aligned faces of a block
//! - Tuning constants shared by the physics and camera layers
//!
//! Nothing in here owns world state.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod direction;
pub mod math;

pub use constants::{
    BLOCK_RAY_STEP, DEFAULT_REACH, PLAYER_EYE_HEIGHT, PLAYER_HEIGHT, PLAYER_WIDTH,
};
pub use direction::Direction;
pub use math::{clamp, floor_to_int, positive_modulo, positive_modulo_f32, IVec3, Vec3};
