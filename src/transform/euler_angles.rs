use crate::math::{Real, Rotation3};
use crate::transform::AffineTransform3;

/// An orientation given by three Euler angles, in degrees.
///
/// The rotations are applied to a point about the fixed `x`, then `y`, then `z` axes, i.e., the
/// equivalent rotation matrix is `Rz * Ry * Rx`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EulerAngles {
    /// Rotation angle about the `x` axis, in degrees.
    pub x: Real,
    /// Rotation angle about the `y` axis, in degrees.
    pub y: Real,
    /// Rotation angle about the `z` axis, in degrees.
    pub z: Real,
}

impl EulerAngles {
    /// No rotation at all.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new set of Euler angles, in degrees.
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// The three angles as an array `[x, y, z]`, in degrees.
    #[inline]
    pub fn to_array(self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }

    /// Are all three angles finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// The rotation described by these angles.
    pub fn to_rotation(&self) -> Rotation3<Real> {
        Rotation3::from_euler_angles(self.x.to_radians(), self.y.to_radians(), self.z.to_radians())
    }

    /// The linear transform rotating points by these angles.
    pub fn to_transform(&self) -> AffineTransform3 {
        AffineTransform3::rotation(&self.to_rotation())
    }
}

impl From<[Real; 3]> for EulerAngles {
    fn from(angles: [Real; 3]) -> Self {
        Self::new(angles[0], angles[1], angles[2])
    }
}
