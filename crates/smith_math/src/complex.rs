//! Complex number value type.
//!
//! Every operation returns a new value. Degenerate inputs (division by a
//! zero-magnitude divisor) follow IEEE-754 and produce NaN/Infinity
//! components rather than panicking.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Complex number `real + j·imag`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Complex {
    /// Real part
    pub real: f64,
    /// Imaginary part
    pub imag: f64,
}

impl Complex {
    /// Creates a new complex number
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Creates a purely real complex number
    #[must_use]
    pub const fn from_real(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    /// Additive identity
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Multiplicative identity
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// Imaginary unit
    pub const I: Self = Self::new(0.0, 1.0);

    /// Complex conjugate
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self::new(self.real, -self.imag)
    }

    /// Squared magnitude (avoids sqrt)
    #[must_use]
    pub fn magnitude_squared(self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Euclidean norm
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Argument in (−π, π]
    #[must_use]
    pub fn angle(self) -> f64 {
        self.imag.atan2(self.real)
    }

    /// Returns true if both components are finite
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::from_real(real)
    }
}

impl std::ops::Add for Complex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl std::ops::Sub for Complex {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

impl std::ops::Div for Complex {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.real, self.imag);
        let (c, d) = (rhs.real, rhs.imag);
        let denominator = c * c + d * d;
        Self::new((a * c + b * d) / denominator, (b * c - a * d) / denominator)
    }
}

impl std::ops::Neg for Complex {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.real, -self.imag)
    }
}

impl std::ops::Mul<f64> for Complex {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.real * rhs, self.imag * rhs)
    }
}

impl std::ops::Div<f64> for Complex {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.real / rhs, self.imag / rhs)
    }
}
