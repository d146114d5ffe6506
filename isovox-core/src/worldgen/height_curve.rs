//! Piecewise Hermite curve mapping a noise value to a terrain height.
//!
//! The curve is a sorted list of control points, each with an input, an
//! output and a slope. Between two points the curve is the Hermite cubic
//! matching both values and both slopes; outside the first or last point it
//! continues as a straight line with that point's slope.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One control point of a [`HeightCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Noise value at which the point sits.
    pub input: f32,
    /// Curve output at `input`, as a fraction of the maximum height.
    pub height: f32,
    /// Derivative of the curve at `input`.
    pub slope: f32,
}

impl CurvePoint {
    /// Shorthand constructor.
    #[must_use]
    pub const fn new(input: f32, height: f32, slope: f32) -> Self {
        Self {
            input,
            height,
            slope,
        }
    }
}

/// Reasons a list of points cannot form a curve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// No control points were given.
    #[error("height curve needs at least one control point")]
    Empty,
    /// Inputs must strictly increase.
    #[error("control point {index} (input {input}) is not after the previous one")]
    Unsorted {
        /// Index of the offending point.
        index: usize,
        /// Its input value.
        input: f32,
    },
}

/// A validated height curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct HeightCurve {
    points: Vec<CurvePoint>,
}

impl Default for HeightCurve {
    /// Flat lowlands, a gentle coast and steepening mountains.
    fn default() -> Self {
        Self {
            points: vec![
                CurvePoint::new(-1.0, 0.05, 0.1),
                CurvePoint::new(-0.3, 0.22, 0.35),
                CurvePoint::new(0.0, 0.34, 0.4),
                CurvePoint::new(0.35, 0.5, 0.6),
                CurvePoint::new(1.0, 1.0, 0.9),
            ],
        }
    }
}

impl TryFrom<Vec<CurvePoint>> for HeightCurve {
    type Error = CurveError;

    fn try_from(points: Vec<CurvePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<HeightCurve> for Vec<CurvePoint> {
    fn from(curve: HeightCurve) -> Self {
        curve.points
    }
}

impl HeightCurve {
    /// Build a curve from control points sorted by strictly increasing input.
    pub fn new(points: Vec<CurvePoint>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        for (index, pair) in points.windows(2).enumerate() {
            // NaN inputs compare as unordered and are rejected too.
            if pair[1].input.partial_cmp(&pair[0].input) != Some(Ordering::Greater) {
                return Err(CurveError::Unsorted {
                    index: index + 1,
                    input: pair[1].input,
                });
            }
        }
        Ok(Self { points })
    }

    /// The control points, sorted by input.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Evaluate the curve at `input`.
    #[must_use]
    pub fn evaluate(&self, input: f32) -> f32 {
        let Some(start) = self.interval(input) else {
            return extend(&self.points[0], input);
        };
        match self.points.get(start + 1) {
            Some(next) => hermite(&self.points[start], next, input),
            None => extend(&self.points[start], input),
        }
    }

    /// Index of the last point whose input is `<= input`, or `None` before the first.
    fn interval(&self, input: f32) -> Option<usize> {
        self.points
            .partition_point(|p| p.input <= input)
            .checked_sub(1)
    }
}

#[inline]
fn extend(point: &CurvePoint, input: f32) -> f32 {
    point.height + point.slope * (input - point.input)
}

/// `lerp(t, y1, y2) + t (1 - t) lerp(t, a, b)` with the slopes folded into `a`, `b`.
#[inline]
fn hermite(from: &CurvePoint, to: &CurvePoint, input: f32) -> f32 {
    let span = to.input - from.input;
    let rise = to.height - from.height;
    let t = (input - from.input) / span;
    let a = from.slope * span - rise;
    let b = -to.slope * span + rise;
    let line = from.height + t * rise;
    line + t * (1.0 - t) * (a + t * (b - a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear() -> HeightCurve {
        HeightCurve::new(vec![
            CurvePoint::new(0.0, 0.0, 1.0),
            CurvePoint::new(1.0, 1.0, 1.0),
            CurvePoint::new(2.0, 2.0, 1.0),
        ])
        .expect("sorted points")
    }

    #[test]
    fn hits_every_control_point() {
        let curve = HeightCurve::default();
        for p in curve.points() {
            assert!((curve.evaluate(p.input) - p.height).abs() < 1e-6);
        }
    }

    #[test]
    fn matching_slopes_give_a_straight_line() {
        let curve = linear();
        for i in -20..=60 {
            let x = i as f32 / 20.0;
            assert!((curve.evaluate(x) - x).abs() < 1e-5, "at {x}");
        }
    }

    #[test]
    fn zero_slopes_ease_between_points() {
        let curve = HeightCurve::new(vec![
            CurvePoint::new(0.0, 0.0, 0.0),
            CurvePoint::new(1.0, 1.0, 0.0),
        ])
        .expect("sorted points");
        assert!((curve.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!(curve.evaluate(0.1) < 0.1);
        assert!(curve.evaluate(0.9) > 0.9);
    }

    #[test]
    fn extrapolates_with_end_slopes() {
        let curve = HeightCurve::new(vec![
            CurvePoint::new(0.0, 0.0, 2.0),
            CurvePoint::new(1.0, 1.0, 3.0),
        ])
        .expect("sorted points");
        assert!((curve.evaluate(-1.0) + 2.0).abs() < 1e-6);
        assert!((curve.evaluate(2.0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn single_point_is_a_line() {
        let curve = HeightCurve::new(vec![CurvePoint::new(0.5, 0.25, 0.5)]).expect("one point");
        assert!((curve.evaluate(1.5) - 0.75).abs() < 1e-6);
        assert!((curve.evaluate(0.5) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn default_curve_rises_over_the_noise_range() {
        let curve = HeightCurve::default();
        let mut previous = f32::NEG_INFINITY;
        for i in -100..=100 {
            let h = curve.evaluate(i as f32 / 100.0);
            assert!(h > previous, "default curve must rise");
            assert!((0.0..=1.0).contains(&h));
            previous = h;
        }
    }

    #[test]
    fn rejects_bad_point_lists() {
        assert_eq!(HeightCurve::new(Vec::new()), Err(CurveError::Empty));
        assert_eq!(
            HeightCurve::new(vec![
                CurvePoint::new(0.0, 0.0, 0.0),
                CurvePoint::new(0.0, 1.0, 0.0),
            ]),
            Err(CurveError::Unsorted {
                index: 1,
                input: 0.0
            })
        );
        assert!(
            HeightCurve::new(vec![
                CurvePoint::new(0.0, 0.0, 0.0),
                CurvePoint::new(f32::NAN, 1.0, 0.0),
            ])
            .is_err()
        );
    }
}
