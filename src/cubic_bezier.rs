use num_traits::{Float, One, Zero};

use super::point::{Point, PointIndex};
use super::quadratic_bezier::QuadraticBezier;
use super::reparameterize::{rescale_weights, ReparameterizeError, ScaleFactor};

/// A cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// The control points in order `[start, ctrl1, ctrl2, end]`.
    pub fn control_points(&self) -> [P; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }

    /// Evaluate a CubicBezier curve at t by direct evaluation of the polynomial (not numerically stable)
    pub fn eval(&self, t: P::Scalar) -> P {
        let three: P::Scalar = 3.0f32.into();
        let one_t = P::Scalar::one() - t;
        let one_t2 = one_t * one_t;
        let t2 = t * t;

        self.start * (one_t2 * one_t)
            + self.ctrl1 * (three * one_t2 * t)
            + self.ctrl2 * (three * one_t * t2)
            + self.end * (t2 * t)
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    /// Split the curve at t into the parts covering [0, t] and [t, 1].
    pub fn split(&self, t: P::Scalar) -> (Self, Self) {
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        let ctrl_3ab = ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t;

        (
            CubicBezier {
                start: self.start,
                ctrl1: ctrl_1ab,
                ctrl2: ctrl_2ab,
                end: ctrl_3ab,
            },
            CubicBezier {
                start: ctrl_3ab,
                ctrl1: ctrl_2bc,
                ctrl2: ctrl_1cd,
                end: self.end,
            },
        )
    }

    /// Return the derivative function.
    /// The derivative is also a bezier curve but of degree n-1 (cubic->quadratic)
    /// Since it returns the derivative function, eval() needs to be called separately
    pub fn derivative(&self) -> QuadraticBezier<P> {
        let three: P::Scalar = 3.0f32.into();
        QuadraticBezier {
            start: (self.ctrl1 - self.start) * three,
            ctrl: (self.ctrl2 - self.ctrl1) * three,
            end: (self.end - self.ctrl2) * three,
        }
    }

    /// Rescale the curve parameter by `scale`.
    ///
    /// The returned curve satisfies `new.eval(t * z) == self.eval(t)`. The start point
    /// is kept as is, the remaining control points follow from
    /// [`rescale_weights`](crate::reparameterize::rescale_weights).
    pub fn reparameterize(&self, scale: ScaleFactor<P::Scalar>) -> Self {
        let [start, ctrl1, ctrl2, end] = rescale_weights(self.control_points(), scale);
        CubicBezier::new(start, ctrl1, ctrl2, end)
    }

    /// Like `reparameterize`, but validates the raw scale factor `z` first.
    pub fn rescale(&self, z: P::Scalar) -> Result<Self, ReparameterizeError> {
        Ok(self.reparameterize(ScaleFactor::new(z)?))
    }
}

impl<P> CubicBezier<P>
where
    P: PointIndex,
{
    /// Sample the coordinate on `axis` of the curve at t.
    /// Convenience shortcut for bezier.eval(t).axis(axis)
    pub fn axis(&self, t: P::Scalar, axis: usize) -> P::Scalar {
        let three: P::Scalar = 3.0f32.into();
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = P::Scalar::one() - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        one_t3 * self.start.axis(axis)
            + one_t2 * t * self.ctrl1.axis(axis) * three
            + one_t * t2 * self.ctrl2.axis(axis) * three
            + t3 * self.end.axis(axis)
    }

    /// Return the (min, max) extent of the curve along `axis`.
    /// Candidates are the endpoints plus the curve values at the roots of the derivative in (0, 1);
    /// intermediate control points can't form a boundary.
    pub fn axis_bounds(&self, axis: usize) -> (P::Scalar, P::Scalar) {
        let zero = P::Scalar::zero();
        let one = P::Scalar::one();

        let start = self.start.axis(axis);
        let end = self.end.axis(axis);
        let mut bounds = (start.min(end), start.max(end));

        for t in self.derivative().real_roots(axis) {
            if t > zero && t < one {
                let value = self.axis(t, axis);
                bounds = (bounds.0.min(value), bounds.1.max(value));
            }
        }
        bounds
    }

    /// Return the bounding box of the curve as an array of (min, max) tuples for the first `D` axes
    pub fn bounding_box<const D: usize>(&self) -> [(P::Scalar, P::Scalar); D] {
        core::array::from_fn(|axis| self.axis_bounds(axis))
    }
}

impl<P> From<[P; 4]> for CubicBezier<P>
where
    P: Point,
{
    fn from(points: [P; 4]) -> Self {
        let [start, ctrl1, ctrl2, end] = points;
        CubicBezier::new(start, ctrl1, ctrl2, end)
    }
}
