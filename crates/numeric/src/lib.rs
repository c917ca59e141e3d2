//! Numerical-method kernels for bandwidth time series.
//!
//! Stateless functions over evenly spaced samples:
//!
//! | Kernel | Function | Boundary / precondition |
//! |--------|----------|-------------------------|
//! | Forward difference | [`forward_difference`] | 0.0 at the last index |
//! | Central difference | [`central_difference`] | 0.0 at both ends |
//! | Second derivative | [`second_derivative`] | 0.0 at both ends |
//! | Lagrange interpolation | [`lagrange_interpolate`] | ≥ 1 point, distinct times |
//! | Simpson's 1/3 rule | [`simpson_integrate`] | odd point count ≥ 3 |
//! | Runge-Kutta 4 | [`rk4_step`], [`rk4_integrate`] | state clamped to [`DOMAIN_FLOOR`] |
//!
//! # Quick start
//!
//! ```
//! use netflux_numeric::{central_differences, rk4_integrate, simpson_integrate};
//!
//! let bandwidth = [10.0, 12.0, 11.0, 9.0, 15.0];
//! let gradients = central_differences(&bandwidth, 1.0);
//! assert_eq!(gradients[0], 0.0);
//! assert_eq!(gradients[1], 0.5);
//!
//! let volume = simpson_integrate(&bandwidth, 1.0).unwrap();
//! assert!(volume > 0.0);
//!
//! let y = rk4_integrate(&|_t, _y| 0.0, 24.0, 8.0, 0.1, 30.0).unwrap();
//! assert_eq!(y, 8.0);
//! ```

mod difference;
mod error;
mod lagrange;
mod rk4;
mod simpson;

pub use difference::{
    central_difference, central_differences, forward_difference, second_derivative,
    second_derivatives,
};
pub use error::NumericError;
pub use lagrange::lagrange_interpolate;
pub use rk4::{DOMAIN_FLOOR, rk4_integrate, rk4_integrate_with_floor, rk4_step, step_count};
pub use simpson::simpson_integrate;
