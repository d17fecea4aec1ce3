//! Numeric constants shared by the formula set.
//!
//! `PI_RAD` is a rounded value and is used in place of `std::f64::consts::PI`
//! by every formula that needs π, so results carry its rounding.

/// Fixed value of π used by all formulas.
pub const PI_RAD: f64 = 3.1415927;

/// Euler's number. Reserved; no formula reads it.
pub const EULER_NUMBER: f64 = 2.71828;

/// Magnitude below which `sin(N·u/2)` counts as a null.
pub const NULL_TOLERANCE: f64 = 1e-12;
