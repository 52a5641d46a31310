//! # Tuning Constants
//!
//! Defaults for the spatial queries. `cube_physics::PhysicsConfig` starts
//! from these and may override them from a TOML file.

// =============================================================================
// RAY STEPPING
// =============================================================================

/// Length of one sub-step of the block ray walk (blocks).
///
/// Must stay far below one block so a single sub-step crosses at most one
/// cell boundary on a non-degenerate ray. A power of two keeps the
/// accumulated distance exact.
pub const BLOCK_RAY_STEP: f32 = 1.0 / 1024.0;

/// Default interaction reach for block and entity picking (blocks).
pub const DEFAULT_REACH: f32 = 5.0;

// =============================================================================
// PLAYER BODY
// =============================================================================

/// Player hitbox width (blocks).
pub const PLAYER_WIDTH: f32 = 0.6;

/// Player hitbox height (blocks).
pub const PLAYER_HEIGHT: f32 = 1.8;

/// Player eye height offset from feet (blocks).
pub const PLAYER_EYE_HEIGHT: f32 = 1.6;
