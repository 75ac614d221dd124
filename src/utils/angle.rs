//! Angle helpers

use std::f64::consts::PI;

const TWO_PI: f64 = 2.0 * PI;

/// Wrap an angle into `[0, 2π)` using floored division.
///
/// Truncating remainder (`%`) keeps the sign of the input and would
/// return negative angles, so it must not be used here.
pub fn mod2pi(theta: f64) -> f64 {
    let wrapped = theta - TWO_PI * (theta / TWO_PI).floor();
    // -ε wraps to 2π - ε, which rounds to exactly 2π
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}
