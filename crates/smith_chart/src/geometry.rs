//! Plane-space geometry of Smith chart contours.
//!
//! Everything here lives in the reflection-coefficient plane: the chart
//! boundary is the unit circle centered on the origin and +imag points up.
//!
//! ```text
//!   constant resistance r:   center (r/(1+r), 0)   radius 1/(1+r)
//!   constant reactance  x:   center (1, 1/x)       radius |1/x|
//! ```
//!
//! Both families pass through Gamma = (1, 0).

use std::f64::consts::TAU;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use smith_math::{z_to_gamma, Complex, ReflectionCoefficient};

/// Largest normalized resistance used as the far end of reactance arcs.
pub const RESISTANCE_EXTREME: f64 = 1.0e9;

/// 2D point. Used for both plane and pixel coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Point {
    /// Creates a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<Complex> for Point {
    fn from(z: Complex) -> Self {
        Self::new(z.real, z.imag)
    }
}

/// Arc sweep direction, as seen with +y pointing up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepDirection {
    /// Decreasing angle.
    Clockwise,
    /// Increasing angle.
    CounterClockwise,
}

impl SweepDirection {
    /// Fixed tie-break: positive reactance sweeps counter-clockwise,
    /// negative reactance sweeps clockwise.
    #[must_use]
    pub fn for_reactance(x: f64) -> Self {
        if x > 0.0 {
            Self::CounterClockwise
        } else {
            Self::Clockwise
        }
    }
}

/// A full circle. Constant-resistance contour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleGeometry {
    /// Center.
    pub center: Point,
    /// Radius.
    pub radius: f64,
}

impl CircleGeometry {
    /// Distance from `point` to the circle outline.
    #[must_use]
    pub fn boundary_distance(&self, point: Point) -> f64 {
        (self.center.distance(point) - self.radius).abs()
    }
}

/// A circular arc. Constant-reactance contour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    /// Center.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Start angle in [0, 2π).
    pub angle1: f64,
    /// End angle in [0, 2π).
    pub angle2: f64,
    /// Sweep direction from `angle1` to `angle2`.
    pub direction: SweepDirection,
    /// Reflection coefficient at the start of the resistance span.
    pub gamma1: ReflectionCoefficient,
    /// Reflection coefficient at the end of the resistance span.
    pub gamma2: ReflectionCoefficient,
}

impl ArcGeometry {
    /// The supporting circle of the arc.
    #[must_use]
    pub fn circle(&self) -> CircleGeometry {
        CircleGeometry {
            center: self.center,
            radius: self.radius,
        }
    }

    /// Signed angular extent: positive counter-clockwise, negative clockwise.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        match self.direction {
            SweepDirection::CounterClockwise => (self.angle2 - self.angle1).rem_euclid(TAU),
            SweepDirection::Clockwise => -(self.angle1 - self.angle2).rem_euclid(TAU),
        }
    }
}

/// A straight segment. The zero-reactance contour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
}

/// Geometry of one constant-reactance contour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReactanceContour {
    /// Nonzero reactance.
    Arc(ArcGeometry),
    /// Zero reactance: the horizontal diameter.
    Line(LineGeometry),
}

/// Range of normalized resistance a reactance arc is drawn over.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResistanceSpan {
    /// Near end (usually 0, the chart boundary).
    pub start: f64,
    /// Far end (usually very large, approaching Gamma = 1).
    pub end: f64,
}

impl ResistanceSpan {
    /// Creates a span.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The chart extremes: boundary to (almost) open circuit.
    pub const FULL: Self = Self::new(0.0, RESISTANCE_EXTREME);
}

impl Default for ResistanceSpan {
    fn default() -> Self {
        Self::FULL
    }
}

/// Folds any finite angle into [0, 2π).
#[must_use]
pub fn normalize_angle(theta: f64) -> f64 {
    // tiny negative inputs round up to exactly TAU
    let folded = theta.rem_euclid(TAU);
    if folded >= TAU {
        0.0
    } else {
        folded
    }
}

/// Constant-resistance circle for normalized resistance `r`.
///
/// `r = 0` is the chart boundary; `r = +∞` collapses to the point (1, 0).
/// Ranges are not validated: `r = -1` yields non-finite geometry.
#[must_use]
pub fn resistance_circle(r: f64) -> CircleGeometry {
    if r == f64::INFINITY {
        return CircleGeometry {
            center: Point::new(1.0, 0.0),
            radius: 0.0,
        };
    }

    CircleGeometry {
        center: Point::new(r / (1.0 + r), 0.0),
        radius: 1.0 / (1.0 + r),
    }
}

/// Constant-reactance arc for nonzero normalized reactance `x`, drawn
/// between resistances `r1` and `r2`.
///
/// `x = 0` divides by zero; use [`reactance_contour`] when zero is possible.
#[must_use]
pub fn reactance_arc(x: f64, r1: f64, r2: f64) -> ArcGeometry {
    let gamma1 = z_to_gamma(Complex::new(r1, x));
    let gamma2 = z_to_gamma(Complex::new(r2, x));

    let center = Complex::new(1.0, 1.0 / x);
    let radius = (1.0 / x).abs();

    ArcGeometry {
        center: center.into(),
        radius,
        angle1: normalize_angle((gamma1 - center).angle()),
        angle2: normalize_angle((gamma2 - center).angle()),
        direction: SweepDirection::for_reactance(x),
        gamma1,
        gamma2,
    }
}

/// Constant-reactance contour, special-casing `x = 0` as the horizontal
/// diameter from (−1, 0) to (1, 0).
#[must_use]
pub fn reactance_contour(x: f64, span: ResistanceSpan) -> ReactanceContour {
    if x == 0.0 {
        return ReactanceContour::Line(LineGeometry {
            start: Point::new(-1.0, 0.0),
            end: Point::new(1.0, 0.0),
        });
    }

    ReactanceContour::Arc(reactance_arc(x, span.start, span.end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;
    const GAMMA_OPEN: Point = Point::new(1.0, 0.0);

    #[test]
    fn test_resistance_circles_pass_through_open() {
        for r in [0.0, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0, 1e6] {
            let circle = resistance_circle(r);
            assert!(circle.boundary_distance(GAMMA_OPEN) < EPS, "r = {r}");
        }
    }

    #[test]
    fn test_zero_resistance_is_boundary() {
        let circle = resistance_circle(0.0);
        assert_eq!(circle.center, Point::ORIGIN);
        assert_eq!(circle.radius, 1.0);
    }

    #[test]
    fn test_infinite_resistance_collapses() {
        let circle = resistance_circle(f64::INFINITY);
        assert_eq!(circle.center, GAMMA_OPEN);
        assert_eq!(circle.radius, 0.0);
    }

    #[test]
    fn test_negative_one_resistance_is_not_finite() {
        let circle = resistance_circle(-1.0);
        assert!(!circle.radius.is_finite());
    }

    #[test]
    fn test_unit_resistance() {
        let circle = resistance_circle(1.0);
        assert_eq!(circle.center, Point::new(0.5, 0.0));
        assert_eq!(circle.radius, 0.5);
    }

    #[test]
    fn test_reactance_arcs_pass_through_open() {
        for x in [-10.0, -5.0, -1.0, -0.5, -0.2, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0] {
            let arc = reactance_arc(x, 0.0, RESISTANCE_EXTREME);
            assert!(arc.circle().boundary_distance(GAMMA_OPEN) < EPS, "x = {x}");
            // the r = 0 crossing sits on both the arc circle and the chart boundary
            let start = Point::from(arc.gamma1);
            assert!(arc.circle().boundary_distance(start) < EPS);
            assert!((arc.gamma1.magnitude() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_reactance_mirror_symmetry() {
        for x in [0.2, 0.5, 1.0, 3.0] {
            let pos = reactance_arc(x, 0.0, RESISTANCE_EXTREME);
            let neg = reactance_arc(-x, 0.0, RESISTANCE_EXTREME);
            assert_eq!(pos.center.x, neg.center.x);
            assert_eq!(pos.center.y, -neg.center.y);
            assert_eq!(pos.radius, neg.radius);
            assert!((pos.gamma1.imag + neg.gamma1.imag).abs() < EPS);
        }
    }

    #[test]
    fn test_unit_reactance_angles() {
        let arc = reactance_arc(1.0, 0.0, RESISTANCE_EXTREME);
        assert_eq!(arc.center, Point::new(1.0, 1.0));
        assert_eq!(arc.radius, 1.0);
        // Gamma(j) = j sits left of the center
        assert!((arc.angle1 - PI).abs() < EPS);
        // Gamma(∞ + j) ~ (1, 0) sits below the center
        assert!((arc.angle2 - 3.0 * FRAC_PI_2).abs() < 1e-6);
        assert_eq!(arc.direction, SweepDirection::CounterClockwise);
        assert!((arc.sweep() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_negative_reactance_sweeps_clockwise() {
        let arc = reactance_arc(-1.0, 0.0, RESISTANCE_EXTREME);
        assert_eq!(arc.direction, SweepDirection::Clockwise);
        assert!((arc.angle1 - PI).abs() < EPS);
        assert!((arc.angle2 - FRAC_PI_2).abs() < 1e-6);
        assert!((arc.sweep() + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_angles_are_normalized() {
        for x in [-10.0, -0.2, 0.2, 10.0] {
            let arc = reactance_arc(x, 0.0, RESISTANCE_EXTREME);
            assert!((0.0..TAU).contains(&arc.angle1));
            assert!((0.0..TAU).contains(&arc.angle2));
        }
    }

    #[test]
    fn test_zero_reactance_is_diameter() {
        match reactance_contour(0.0, ResistanceSpan::FULL) {
            ReactanceContour::Line(line) => {
                assert_eq!(line.start, Point::new(-1.0, 0.0));
                assert_eq!(line.end, Point::new(1.0, 0.0));
            }
            ReactanceContour::Arc(arc) => panic!("expected a line, got {arc:?}"),
        }
        // negative zero is still zero
        assert!(matches!(
            reactance_contour(-0.0, ResistanceSpan::FULL),
            ReactanceContour::Line(_)
        ));
    }

    #[test]
    fn test_nonzero_reactance_is_arc() {
        assert!(matches!(
            reactance_contour(0.5, ResistanceSpan::default()),
            ReactanceContour::Arc(_)
        ));
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < EPS);
        assert_eq!(normalize_angle(PI), PI);
        assert!((normalize_angle(5.0 * FRAC_PI_2) - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_normalize_angle_never_returns_tau() {
        for theta in [-1e-17, -f64::EPSILON * 1e-3, -f64::MIN_POSITIVE, TAU, -TAU] {
            let folded = normalize_angle(theta);
            assert!((0.0..TAU).contains(&folded), "{theta} -> {folded}");
        }
    }

    #[test]
    fn test_point_bytemuck() {
        let points = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&points);
        assert_eq!(bytes.len(), 32); // 2 * 2 * 8 bytes
        assert_eq!(bytemuck::bytes_of(&points[0]).len(), 16);
    }
}
