use crate::math::{Matrix2, Point2, Real, Vector2, DEGENERACY_EPSILON};
use crate::transform::DegenerateTransform;
use approx::{AbsDiffEq, RelativeEq};
use core::ops::Mul;

/// An affine transform of the plane.
///
/// The transform is stored as a linear part `L` and a translation `t`, and maps a point `p` to
/// `L * p + t`. Composition follows the same convention as
/// [`AffineTransform3`](crate::transform::AffineTransform3): `a.concatenate(&b)` applies `b`
/// first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AffineTransform2 {
    linear: Matrix2<Real>,
    translation: Vector2<Real>,
}

impl Default for AffineTransform2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform2 {
    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::from_parts(Matrix2::identity(), Vector2::zeros())
    }

    /// Builds a transform from its linear part and its translation.
    #[inline]
    pub fn from_parts(linear: Matrix2<Real>, translation: Vector2<Real>) -> Self {
        Self {
            linear,
            translation,
        }
    }

    /// A pure translation by `shift`.
    #[inline]
    pub fn translation(shift: &Vector2<Real>) -> Self {
        Self::from_parts(Matrix2::identity(), *shift)
    }

    /// The translation moving the origin onto `point`.
    #[inline]
    pub fn translation_to(point: &Point2) -> Self {
        Self::translation(&point.coords)
    }

    /// A uniform scaling by `factor` about the origin.
    #[inline]
    pub fn scaling(factor: Real) -> Self {
        Self::from_parts(Matrix2::from_diagonal_element(factor), Vector2::zeros())
    }

    /// A per-axis scaling about the origin.
    #[inline]
    pub fn scaling_nonuniform(factors: &Vector2<Real>) -> Self {
        Self::from_parts(Matrix2::from_diagonal(factors), Vector2::zeros())
    }

    /// A counterclockwise rotation of `angle` radians about the origin.
    pub fn rotation(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        let linear = Matrix2::new(c, -s, s, c);
        Self::from_parts(linear, Vector2::zeros())
    }

    /// The canonical-to-world transform `translate(center) ∘ rotate(angle) ∘ scale(factors)`,
    /// with `angle` in radians.
    pub fn from_trs(center: &Point2, angle: Real, factors: &Vector2<Real>) -> Self {
        Self::translation_to(center)
            .concatenate(&Self::rotation(angle))
            .concatenate(&Self::scaling_nonuniform(factors))
    }

    /// The linear part of this transform.
    #[inline]
    pub fn linear_part(&self) -> &Matrix2<Real> {
        &self.linear
    }

    /// The translation part of this transform, i.e., the image of the origin.
    #[inline]
    pub fn translation_part(&self) -> &Vector2<Real> {
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
    pub fn transform_point(&self, pt: &Point2) -> Point2 {
        Point2::from(self.linear * pt.coords + self.translation)
    }

    /// Applies the linear part of this transform to a vector.
    #[inline]
    pub fn transform_vector(&self, v: &Vector2<Real>) -> Vector2<Real> {
        self.linear * v
    }

    /// Applies the component-wise absolute value of the linear part of this transform to a
    /// vector.
    ///
    /// For a vector of half extents, this gives the half extents of the axis-aligned box
    /// enclosing the transformed box.
    #[inline]
    pub fn absolute_transform_vector(&self, v: &Vector2<Real>) -> Vector2<Real> {
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

impl Mul for AffineTransform2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.concatenate(&rhs)
    }
}

impl<'a> Mul<&'a Point2> for &'a AffineTransform2 {
    type Output = Point2;

    #[inline]
    fn mul(self, rhs: &'a Point2) -> Point2 {
        self.transform_point(rhs)
    }
}

impl AbsDiffEq for AffineTransform2 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.linear.abs_diff_eq(&other.linear, epsilon)
            && self.translation.abs_diff_eq(&other.translation, epsilon)
    }
}

impl RelativeEq for AffineTransform2 {
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
