//! Bilinear (Möbius) transforms between normalized load impedance and
//! reflection coefficient.
//!
//! ```text
//!   Gamma = (z - 1) / (z + 1)        z = (1 + Gamma) / (1 - Gamma)
//! ```
//!
//! Passive loads (real(z) ≥ 0) land inside the closed unit disk.

use crate::complex::Complex;

/// Load impedance divided by the characteristic impedance.
pub type NormalizedLoad = Complex;

/// Reflection coefficient (Gamma) in the reflection-coefficient plane.
pub type ReflectionCoefficient = Complex;

/// Maps a normalized load to its reflection coefficient.
#[must_use]
pub fn z_to_gamma(z: NormalizedLoad) -> ReflectionCoefficient {
    (z - Complex::ONE) / (z + Complex::ONE)
}

/// Inverse of [`z_to_gamma`].
///
/// Gamma = 1 (open circuit) has no finite image and yields non-finite
/// components.
#[must_use]
pub fn gamma_to_z(gamma: ReflectionCoefficient) -> NormalizedLoad {
    (Complex::ONE + gamma) / (Complex::ONE - gamma)
}

/// Normalizes a load impedance (ohms) against a real characteristic impedance.
#[must_use]
pub fn normalize(z_load: Complex, z0: f64) -> NormalizedLoad {
    z_load / z0
}

/// Computes the load impedance (ohms) for a reflection coefficient measured
/// against a real characteristic impedance `z0`.
#[must_use]
pub fn gamma_to_z_load(gamma: ReflectionCoefficient, z0: f64) -> Complex {
    gamma_to_z(gamma) * z0
}

/// Voltage standing wave ratio for a reflection coefficient.
///
/// Infinite for total reflection (|Gamma| = 1).
#[must_use]
pub fn vswr(gamma: ReflectionCoefficient) -> f64 {
    let mag = gamma.magnitude();
    (1.0 + mag) / (1.0 - mag)
}

/// Return loss in dB (positive for passive loads).
#[must_use]
pub fn return_loss_db(gamma: ReflectionCoefficient) -> f64 {
    -20.0 * gamma.magnitude().log10()
}
