//! # Viewpoint
//!
//! Camera-side glue for picking: an eye position plus yaw/pitch, turned
//! into a forward ray and run through the block and entity raycasters
//! against a `World`. View matrices and rendering live elsewhere.

use cube_shared::{positive_modulo_f32, Vec3};

use crate::config::PhysicsConfig;
use crate::error::PhysicsResult;
use crate::raycast::{cast_block, cast_entity, BlockHit, Ray};
use crate::world::{EntityKind, Location, World};

/// Look-direction components smaller than this are trig noise.
///
/// `cos(270°)` in `f32` is about `-1.2e-8`, enough to floor a ray starting
/// on a block boundary into the neighbouring column.
pub const AXIS_SNAP: f32 = 1e-6;

fn snap_to_axis(component: f32) -> f32 {
    if component.abs() < AXIS_SNAP {
        0.0
    } else {
        component
    }
}

/// Eye position and orientation. Angles are in degrees, kept in `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewpoint {
    position: Vec3,
    yaw: f32,
    pitch: f32,
}

impl Viewpoint {
    /// Viewpoint at `position` looking along -Z.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Viewpoint at the eyes of a body standing at `feet`.
    #[must_use]
    pub fn at_eyes(feet: Vec3, config: &PhysicsConfig) -> Self {
        Self::new(feet + Vec3::new(0.0, config.eye_height, 0.0))
    }

    /// Eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw in degrees, `[0, 360)`.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, `[0, 360)`. 90 looks straight up, 270 straight down.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Moves the eye to `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Moves the eye by `delta`.
    pub fn add_position(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Sets the orientation, wrapping both angles into `[0, 360)`.
    pub fn set_rotation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = positive_modulo_f32(yaw, 360.0);
        self.pitch = positive_modulo_f32(pitch, 360.0);
    }

    /// Turns by the given angles.
    pub fn add_rotation(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.set_rotation(self.yaw + delta_yaw, self.pitch + delta_pitch);
    }

    /// Unit look direction.
    ///
    /// Components within [`AXIS_SNAP`] of zero are returned as exactly zero,
    /// so an axis-aligned view stays in its block column.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let yaw_rad = self.yaw.to_radians();
        let pitch_rad = self.pitch.to_radians();
        Vec3::new(
            snap_to_axis(yaw_rad.sin() * pitch_rad.cos()),
            snap_to_axis(pitch_rad.sin()),
            snap_to_axis(-yaw_rad.cos() * pitch_rad.cos()),
        )
    }

    /// Forward ray from the eye.
    ///
    /// # Errors
    ///
    /// `DegenerateRay` if the position or angles are not finite.
    pub fn ray(&self) -> PhysicsResult<Ray> {
        Ray::new(self.position, self.forward())
    }

    /// First block within reach that `accept` takes, with the struck face.
    ///
    /// Cells with no stored block are skipped without calling `accept`.
    ///
    /// # Errors
    ///
    /// As [`Viewpoint::ray`].
    pub fn pick_block<W, F>(
        &self,
        world: &W,
        config: &PhysicsConfig,
        mut accept: F,
    ) -> PhysicsResult<Option<BlockHit>>
    where
        W: World,
        F: FnMut(&W::Block) -> bool,
    {
        let ray = self.ray()?;
        Ok(cast_block(&ray, config.reach, config.block_ray_step, |pos| {
            Location::new(world, pos).block().is_some_and(&mut accept)
        }))
    }

    /// First entity within reach of kind `target` (any kind when `None`)
    /// that the ray hits and `is_match` accepts.
    ///
    /// # Errors
    ///
    /// As [`Viewpoint::ray`].
    pub fn pick_entity<'w, W, F>(
        &self,
        world: &'w W,
        config: &PhysicsConfig,
        target: Option<EntityKind>,
        is_match: F,
    ) -> PhysicsResult<Option<&'w W::Entity>>
    where
        W: World,
        F: FnMut(&W::Entity) -> bool,
    {
        let ray = self.ray()?;
        let candidates = world.entities_in_radius(self.position, config.reach);
        Ok(cast_entity(&ray, config.reach, candidates, target, is_match))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collider::Collider;
    use crate::world::{Block, Entity, GridBlock, GridWorld};
    use cube_shared::{Direction, IVec3};

    #[test]
    fn test_rotation_wraps() {
        let mut view = Viewpoint::new(Vec3::ZERO);
        view.set_rotation(-90.0, 450.0);
        assert_eq!(view.yaw(), 270.0);
        assert_eq!(view.pitch(), 90.0);

        view.add_rotation(100.0, -100.0);
        assert_eq!(view.yaw(), 10.0);
        assert_eq!(view.pitch(), 350.0);
    }

    #[test]
    fn test_forward() {
        let mut view = Viewpoint::new(Vec3::ZERO);
        let f = view.forward();
        assert!(f.x.abs() < 1e-6 && f.y.abs() < 1e-6 && (f.z + 1.0).abs() < 1e-6);

        view.set_rotation(90.0, 0.0);
        let f = view.forward();
        assert!((f.x - 1.0).abs() < 1e-6 && f.z.abs() < 1e-6);

        view.set_rotation(0.0, -90.0);
        let f = view.forward();
        assert!((f.y + 1.0).abs() < 1e-6);
        assert!((f.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pick_block_looking_down() {
        let mut world = GridWorld::new();
        world.set_solid(IVec3::new(0, -3, 0));
        world.set_block(IVec3::new(0, -1, 0), GridBlock::AIR);

        let config = PhysicsConfig::default();
        let mut view = Viewpoint::at_eyes(Vec3::ZERO, &config);
        view.set_rotation(0.0, -90.0);

        let hit = view.pick_block(&world, &config, Block::is_solid).unwrap().unwrap();
        assert_eq!(hit.block, IVec3::new(0, -3, 0));
        assert_eq!(hit.face, Direction::Up);

        // Out of reach
        view.set_position(Vec3::new(0.0, 10.0, 0.0));
        assert!(view.pick_block(&world, &config, Block::is_solid).unwrap().is_none());
    }

    #[test]
    fn test_axis_aligned_forward_is_exact() {
        let mut view = Viewpoint::new(Vec3::new(0.0, 1.6, 0.0));

        view.set_rotation(0.0, -90.0);
        assert_eq!(view.forward(), Vec3::new(0.0, -1.0, 0.0));

        view.set_rotation(90.0, 0.0);
        assert_eq!(view.forward(), Vec3::new(1.0, 0.0, 0.0));

        view.set_rotation(180.0, 0.0);
        assert_eq!(view.forward(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_pick_block_from_block_boundary() {
        // Eye on the x = 0 and z = 0 boundaries, looking along +X
        let mut world = GridWorld::new();
        world.set_solid(IVec3::new(3, 1, 0));

        let config = PhysicsConfig::default();
        let mut view = Viewpoint::at_eyes(Vec3::ZERO, &config);
        view.set_rotation(90.0, 0.0);

        let hit = view.pick_block(&world, &config, Block::is_solid).unwrap().unwrap();
        assert_eq!(hit.block, IVec3::new(3, 1, 0));
        assert_eq!(hit.travel(), Direction::East);
        assert_eq!(hit.face, Direction::West);
    }

    #[test]
    fn test_pick_entity() {
        let mut world = GridWorld::new();
        let collider = Collider::new(0.6, 1.8);
        let player = world.spawn(EntityKind::Player, Vec3::ZERO, collider);
        let mob = world.spawn(EntityKind::Creature, Vec3::new(0.0, 0.0, -3.0), collider);
        world.spawn(EntityKind::Creature, Vec3::new(0.0, 0.0, -30.0), collider);

        let config = PhysicsConfig::default();
        let view = Viewpoint::at_eyes(Vec3::ZERO, &config);

        // The player's own box surrounds the eye, so exclude it by id
        let hit = view
            .pick_entity(&world, &config, None, |e| e.id() != player)
            .unwrap();
        assert_eq!(hit.map(Entity::id), Some(mob));

        let hit = view
            .pick_entity(&world, &config, Some(EntityKind::Creature), |_| true)
            .unwrap();
        assert_eq!(hit.map(Entity::id), Some(mob));
    }

    #[test]
    fn test_non_finite_view_is_an_error() {
        let mut view = Viewpoint::new(Vec3::ZERO);
        view.set_rotation(f32::NAN, 0.0);
        assert!(view.ray().is_err());
    }
}
