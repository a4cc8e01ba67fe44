//! # Smith Math
//!
//! Algebraic substrate for the Smith chart engine.
//!
//! ## Contents
//!
//! - [`Complex`]: immutable complex value type with the usual field operations
//! - [`impedance`]: bilinear maps between normalized load and reflection coefficient
//!
//! Nothing here traps on degenerate input. A zero divisor produces
//! NaN/Infinity exactly like plain `f64` arithmetic.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod complex;
pub mod impedance;

pub use complex::Complex;
pub use impedance::{
    gamma_to_z, gamma_to_z_load, normalize, return_loss_db, vswr, z_to_gamma, NormalizedLoad,
    ReflectionCoefficient,
};
