//! Stepped block raycaster.
//!
//! The ray advances in fixed sub-steps (`step`, typically 1/1024 block).
//! After each sub-step the position is floored to a block; when the block
//! changes the ray has crossed exactly one face, whose direction comes
//! from the integer displacement between the two blocks.

use cube_shared::{Direction, IVec3};

use super::Ray;

/// First accepted block along a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockHit {
    /// The block that was hit.
    pub block: IVec3,
    /// Face of `block` the ray entered through.
    ///
    /// For a hit in the origin cell no face was crossed and this is `Down`.
    pub face: Direction,
    /// Distance travelled from the ray origin when `block` was entered.
    pub distance: f32,
}

impl BlockHit {
    /// Direction the ray was travelling when it entered the block.
    #[must_use]
    pub fn travel(&self) -> Direction {
        self.face.opposite()
    }

    /// Block on the other side of the struck face, where a placed block
    /// would go.
    #[must_use]
    pub fn adjacent(&self) -> IVec3 {
        self.block + self.face.offset()
    }
}

/// Walks `ray` up to `max_radius` and returns the first block for which
/// `is_hit` returns `true`.
///
/// The origin cell is tested first, so a ray starting inside a solid block
/// hits it at distance 0. `max_radius` bounds the straight-line distance:
/// it is checked on every sub-step, including while searching for the next
/// distinct cell, and cells entered beyond it are never tested. A radius of
/// zero (or a non-finite one) tests only the origin cell.
///
/// If a sub-step changes more than one axis at once (the ray passes
/// exactly through a block edge or corner), the direction is derived as in
/// [`Direction::from_axis_delta`] and the skipped diagonal neighbour is not
/// tested.
pub fn cast_block<F>(ray: &Ray, max_radius: f32, step: f32, mut is_hit: F) -> Option<BlockHit>
where
    F: FnMut(IVec3) -> bool,
{
    debug_assert!(step > 0.0 && step < 1.0, "ray step must be a fraction of a block");

    let max_radius = if max_radius.is_finite() { max_radius.max(0.0) } else { 0.0 };

    let mut block = ray.origin().floor();
    let mut travel = Direction::Up;
    let mut distance = 0.0;
    let mut steps: u64 = 0;

    loop {
        if is_hit(block) {
            tracing::trace!("Block ray hit {} travelling {:?} at {}", block, travel, distance);
            return Some(BlockHit {
                block,
                face: travel.opposite(),
                distance,
            });
        }

        let next = loop {
            steps += 1;
            distance = travelled(steps, step);
            if distance > max_radius {
                return None;
            }
            let cell = ray.at(distance).floor();
            if cell != block {
                break cell;
            }
        };

        let delta = next - block;
        if axes_changed(delta) > 1 {
            tracing::debug!(
                "Block ray crossed {} axes in one sub-step ({} -> {})",
                axes_changed(delta),
                block,
                next
            );
        }
        travel = Direction::from_axis_delta(delta);
        block = next;
    }
}

/// Distance after `steps` sub-steps. Multiplying instead of accumulating
/// keeps the distance exact for power-of-two step lengths.
#[allow(clippy::cast_precision_loss)]
fn travelled(steps: u64, step: f32) -> f32 {
    steps as f32 * step
}

fn axes_changed(delta: IVec3) -> usize {
    delta.to_array().iter().filter(|&&d| d != 0).count()
}
