use tinyvec::ArrayVec;

use super::point::{Point, PointIndex};
use super::EPSILON;
use num_traits::{Float, One, Zero};

/// A quadratic Bezier curve defined by three points: the starting point, a control point and the ending point.
/// It shows up as the derivative (hodograph) of a `CubicBezier`.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * start + 2 * (1 - t) * t * ctrl + t² * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl: P,
    pub(crate) end: P,
}

impl<P> QuadraticBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl: P, end: P) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    pub fn control_points(&self) -> [P; 3] {
        [self.start, self.ctrl, self.end]
    }

    pub fn eval(&self, t: P::Scalar) -> P {
        let two: P::Scalar = 2.0f32.into();
        let one_t = P::Scalar::one() - t;

        self.start * (one_t * one_t) + self.ctrl * (two * one_t * t) + self.end * (t * t)
    }
}

impl<P> QuadraticBezier<P>
where
    P: PointIndex,
{
    /// Sample the coordinate on `axis` of the curve at t (expecting t between 0 and 1).
    pub fn axis(&self, t: P::Scalar, axis: usize) -> P::Scalar {
        let two: P::Scalar = 2.0f32.into();
        let one_t = P::Scalar::one() - t;

        self.start.axis(axis) * one_t * one_t
            + self.ctrl.axis(axis) * two * one_t * t
            + self.end.axis(axis) * t * t
    }

    /// Solve for the real roots of the curve along one coordinate `axis`,
    /// i.e. all t with `axis(t) == 0`. Roots are not restricted to [0, 1].
    pub fn real_roots(&self, axis: usize) -> ArrayVec<[P::Scalar; 2]> {
        let mut result = ArrayVec::new();
        let eps: P::Scalar = EPSILON.into();
        let two: P::Scalar = 2.0f32.into();
        let four: P::Scalar = 4.0f32.into();

        // expanded into power basis: a*t^2 + b*t + c
        let (p0, p1, p2) = (self.start.axis(axis), self.ctrl.axis(axis), self.end.axis(axis));
        let a = p0 - two * p1 + p2;
        let b = two * (p1 - p0);
        let c = p0;

        // tolerances are relative to the coefficients, curves may live at any coordinate scale
        let scale = a.abs().max(b.abs()).max(c.abs());
        if scale == P::Scalar::zero() {
            return result;
        }
        let tol = eps * scale;

        if a.abs() <= tol {
            // degenerates into a linear equation
            if b.abs() > tol {
                result.push(-c / b);
            }
            return result;
        }

        let delta = b * b - four * a * c;
        if delta.abs() <= tol * scale {
            result.push(-b / (two * a));
        } else if delta > P::Scalar::zero() {
            let sqrt_delta = delta.sqrt();
            result.push((-b - sqrt_delta) / (two * a));
            result.push((-b + sqrt_delta) / (two * a));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::PointNorm;
    use crate::PointN;

    #[test]
    fn eval_endpoints() {
        let curve = QuadraticBezier::new(
            PointN::new([0f64, 1.77f64]),
            PointN::new([1.1f64, -1f64]),
            PointN::new([3.2f64, -4f64]),
        );
        assert!((curve.eval(0.0) - curve.start).squared_length() < EPSILON.into());
        assert!((curve.eval(1.0) - curve.end).squared_length() < EPSILON.into());
    }

    #[test]
    fn axis_matches_eval() {
        let curve = QuadraticBezier::new(
            PointN::new([0f64, 1.77f64]),
            PointN::new([1.1f64, -1f64]),
            PointN::new([3.2f64, -4f64]),
        );
        let nsteps: usize = 100;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let p = curve.eval(t);
            for axis in 0..2 {
                assert!((curve.axis(t, axis) - p.axis(axis)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn real_roots_of_parabola() {
        // x(t) = (t - 0.25) * (t - 0.75) = t^2 - t + 0.1875
        // in bernstein form: p0 = c, p1 = c + b/2, p2 = a + b + c
        let curve = QuadraticBezier::new(
            PointN::new([0.1875f64, 1f64]),
            PointN::new([-0.3125f64, 1f64]),
            PointN::new([0.1875f64, 1f64]),
        );
        let roots = curve.real_roots(0);
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 0.25).abs() < 1e-12);
        assert!((roots[1] - 0.75).abs() < 1e-12);

        // constant nonzero y axis has no roots
        assert!(curve.real_roots(1).is_empty());
    }

    #[test]
    fn real_roots_linear_and_double() {
        // linear: x(t) = 2t - 1 has its root at 0.5
        let linear = QuadraticBezier::new(
            PointN::new([-1f64, 0f64]),
            PointN::new([0f64, 0f64]),
            PointN::new([1f64, 0f64]),
        );
        let roots = linear.real_roots(0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.5).abs() < 1e-12);

        // double root: x(t) = (t - 0.5)^2
        let double = QuadraticBezier::new(
            PointN::new([0.25f64, 0f64]),
            PointN::new([-0.25f64, 0f64]),
            PointN::new([0.25f64, 0f64]),
        );
        let roots = double.real_roots(0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn real_roots_at_small_scale() {
        // derivative of the x axis of (0,0), (2e-7,0), (-2e-7,0), (0,0)
        // whose extrema sit at t = 1/2 -+ sqrt(3)/6
        let hodograph = QuadraticBezier::new(
            PointN::new([6e-7f64, 0f64]),
            PointN::new([-1.2e-6f64, 0f64]),
            PointN::new([6e-7f64, 0f64]),
        );
        let roots = hodograph.real_roots(0);
        assert_eq!(roots.len(), 2);
        let offset = 3f64.sqrt() / 6.0;
        assert!((roots[0] - (0.5 - offset)).abs() < 1e-9);
        assert!((roots[1] - (0.5 + offset)).abs() < 1e-9);

        // the all-zero y axis vanishes everywhere and reports no isolated roots
        assert!(hodograph.real_roots(1).is_empty());
    }
}
