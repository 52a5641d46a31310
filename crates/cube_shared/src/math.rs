//! Vector and scalar math for the block grid.
//!
//! `Vec3` is a continuous position or direction, `IVec3` a discrete block
//! coordinate. Converting one to the other always floors, so the block at
//! `(0, 0, 0)` spans `[0, 1)` on every axis.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

// =============================================================================
// SCALAR HELPERS
// =============================================================================

/// Floors a float to the block index containing it.
///
/// Out-of-range values saturate at `i32::MIN` / `i32::MAX`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn floor_to_int(value: f32) -> i32 {
    value.floor() as i32
}

/// Modulo whose result is always in `[0, n)` for positive `n`.
#[inline]
#[must_use]
pub fn positive_modulo(x: i32, n: i32) -> i32 {
    x.rem_euclid(n)
}

/// Float modulo whose result is in `[0, n)` for positive `n`.
///
/// Used to keep camera angles in `[0, 360)`.
#[inline]
#[must_use]
pub fn positive_modulo_f32(x: f32, n: f32) -> f32 {
    x.rem_euclid(n)
}

/// Clamps `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics; if `min > max` the result is `min`.
#[inline]
#[must_use]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(value.min(max))
}

/// Formats a float with at most two fraction digits and no trailing zeros.
fn write_component(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    let text = format!("{value:.2}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    f.write_str(if text == "-0" { "0" } else { text })
}

// =============================================================================
// VEC3 (continuous)
// =============================================================================

/// 3D float vector - position, direction, extent.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Creates a new Vec3
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from array
    #[must_use]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Distance squared (avoids sqrt)
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Rescales the vector to `length`.
    ///
    /// Returns `None` for a zero-length or non-finite vector.
    #[must_use]
    pub fn normalize_to(self, length: f32) -> Option<Self> {
        let current = self.length();
        if current == 0.0 || !current.is_finite() {
            return None;
        }
        Some(self * (length / current))
    }

    /// Component-wise minimum
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Block coordinate containing this point (component-wise floor).
    #[must_use]
    pub fn floor(self) -> IVec3 {
        IVec3::new(floor_to_int(self.x), floor_to_int(self.y), floor_to_int(self.z))
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl std::ops::Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("x=")?;
        write_component(f, self.x)?;
        f.write_str(", y=")?;
        write_component(f, self.y)?;
        f.write_str(", z=")?;
        write_component(f, self.z)
    }
}

// =============================================================================
// IVEC3 (block coordinate)
// =============================================================================

/// 3D integer vector - block coordinate or block displacement.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct IVec3 {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
    /// Z component
    pub z: i32,
}

impl IVec3 {
    /// Creates a new IVec3
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Origin block
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Minimum corner of this block in continuous space.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl std::ops::Add for IVec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for IVec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Neg for IVec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<(i32, i32, i32)> for IVec3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for IVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={}, y={}, z={}", self.x, self.y, self.z)
    }
}
