use crate::math::{Matrix3, Point3, Real, Rotation3, Vector3, DEGENERACY_EPSILON};
use crate::transform::DegenerateTransform;
use approx::{AbsDiffEq, RelativeEq};
use core::ops::Mul;

/// An affine transform of the 3D space.
///
/// The transform is stored as a linear part `L` and a translation `t`, and maps a point `p` to
/// `L * p + t`.
///
/// # Composition
///
/// [`concatenate`](Self::concatenate) follows the right-multiplication convention:
/// `a.concatenate(&b)` first applies `b`, then `a`. The `*` operator is an alias for it.
///
/// ```
/// use digishapes::math::{Point3, Vector3};
/// use digishapes::transform::AffineTransform3;
///
/// let tra = AffineTransform3::translation(&Vector3::new(10.0, 0.0, 0.0));
/// let sca = AffineTransform3::scaling(2.0);
///
/// // Scale first, then translate.
/// let t = tra.concatenate(&sca);
/// assert_eq!(t.transform_point(&Point3::new(1.0, 1.0, 1.0)), Point3::new(12.0, 2.0, 2.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AffineTransform3 {
    linear: Matrix3<Real>,
    translation: Vector3<Real>,
}

impl Default for AffineTransform3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform3 {
    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::from_parts(Matrix3::identity(), Vector3::zeros())
    }

    /// Builds a transform from its linear part and its translation.
    #[inline]
    pub fn from_parts(linear: Matrix3<Real>, translation: Vector3<Real>) -> Self {
        Self {
            linear,
            translation,
        }
    }

    /// A pure translation by `shift`.
    #[inline]
    pub fn translation(shift: &Vector3<Real>) -> Self {
        Self::from_parts(Matrix3::identity(), *shift)
    }

    /// The translation moving the origin onto `point`.
    #[inline]
    pub fn translation_to(point: &Point3) -> Self {
        Self::translation(&point.coords)
    }

    /// A uniform scaling by `factor` about the origin.
    #[inline]
    pub fn scaling(factor: Real) -> Self {
        Self::from_parts(Matrix3::from_diagonal_element(factor), Vector3::zeros())
    }

    /// A per-axis scaling about the origin.
    #[inline]
    pub fn scaling_nonuniform(factors: &Vector3<Real>) -> Self {
        Self::from_parts(Matrix3::from_diagonal(factors), Vector3::zeros())
    }

    /// The transform equivalent to the given rotation about the origin.
    #[inline]
    pub fn rotation(rotation: &Rotation3<Real>) -> Self {
        Self::from_parts(*rotation.matrix(), Vector3::zeros())
    }

    /// A rotation of `angle` radians about the `x` axis.
    pub fn rotation_x(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let linear = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, c,   -s,
            0.0, s,   c,
        );
        Self::from_parts(linear, Vector3::zeros())
    }

    /// A rotation of `angle` radians about the `y` axis.
    pub fn rotation_y(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let linear = Matrix3::new(
            c,   0.0, s,
            0.0, 1.0, 0.0,
            -s,  0.0, c,
        );
        Self::from_parts(linear, Vector3::zeros())
    }

    /// A rotation of `angle` radians about the `z` axis.
    pub fn rotation_z(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let linear = Matrix3::new(
            c,   -s,  0.0,
            s,   c,   0.0,
            0.0, 0.0, 1.0,
        );
        Self::from_parts(linear, Vector3::zeros())
    }

    /// The canonical-to-world transform `translate(center) ∘ rotation ∘ scale(factors)`.
    pub fn from_trs(center: &Point3, rotation: &Rotation3<Real>, factors: &Vector3<Real>) -> Self {
        Self::translation_to(center)
            .concatenate(&Self::rotation(rotation))
            .concatenate(&Self::scaling_nonuniform(factors))
    }

    /// The linear part of this transform.
    #[inline]
    pub fn linear_part(&self) -> &Matrix3<Real> {
        &self.linear
    }

    /// The translation part of this transform, i.e., the image of the origin.
    #[inline]
    pub fn translation_part(&self) -> &Vector3<Real> {
        &self.translation
    }

    /// The determinant of the linear part of this transform.
    #[inline]
    pub fn determinant(&self) -> Real {
        self.linear.determinant()
    }

    /// The transform applying `other` first, then `self`.
    #[inline]
    #[must_use]
    pub fn concatenate(&self, other: &Self) -> Self {
        Self {
            linear: self.linear * other.linear,
            translation: self.linear * other.translation + self.translation,
        }
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn transform_point(&self, pt: &Point3) -> Point3 {
        Point3::from(self.linear * pt.coords + self.translation)
    }

    /// Applies the linear part of this transform to a vector.
    #[inline]
    pub fn transform_vector(&self, v: &Vector3<Real>) -> Vector3<Real> {
        self.linear * v
    }

    /// Applies the component-wise absolute value of the linear part of this transform to a
    /// vector.
    ///
    /// For a vector of half extents, this gives the half extents of the axis-aligned box
    /// enclosing the transformed box.
    #[inline]
    pub fn absolute_transform_vector(&self, v: &Vector3<Real>) -> Vector3<Real> {
        self.linear.abs() * v
    }

    /// Computes the inverse of this transform.
    ///
    /// Fails if the determinant of the linear part is not finite, or if its magnitude does not
    /// exceed [`DEGENERACY_EPSILON`] times the product of the column norms of the linear part,
    /// i.e., Hadamard's bound on the determinant.
    pub fn try_inverse(&self) -> Result<Self, DegenerateTransform> {
        let determinant = self.determinant();
        let volume_bound: Real = self.linear.column_iter().map(|c| c.norm()).product();

        if !determinant.is_finite() || determinant.abs() <= DEGENERACY_EPSILON * volume_bound {
            return Err(DegenerateTransform { determinant });
        }

        let inv_linear = self
            .linear
            .try_inverse()
            .ok_or(DegenerateTransform { determinant })?;

        Ok(Self {
            linear: inv_linear,
            translation: -(inv_linear * self.translation),
        })
    }
}

impl Mul for AffineTransform3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.concatenate(&rhs)
    }
}

impl<'a> Mul<&'a Point3> for &'a AffineTransform3 {
    type Output = Point3;

    #[inline]
    fn mul(self, rhs: &'a Point3) -> Point3 {
        self.transform_point(rhs)
    }
}

impl AbsDiffEq for AffineTransform3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.linear.abs_diff_eq(&other.linear, epsilon)
            && self.translation.abs_diff_eq(&other.translation, epsilon)
    }
}

impl RelativeEq for AffineTransform3 {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.linear.relative_eq(&other.linear, epsilon, max_relative)
            && self
                .translation
                .relative_eq(&other.translation, epsilon, max_relative)
    }
}
