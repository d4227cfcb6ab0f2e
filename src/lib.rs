//! Cubic spline fitting through a dense augmented linear system.
//!
//! Every segment between two consecutive points gets its own cubic `a*x^3 + b*x^2 + c*x + d`.
//! The curve is continuous up to the second derivative and is closed by one of the
//! [BoundaryCondition]s. The system is solved with Gaussian elimination with partial pivoting.
//! [Spline::windowed] solves arbitrarily long point sequences with constant memory per solve.
//!
//! # Example
//! ```
//! use chain_spline::{BoundaryCondition, Point, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![
//!     Point::new(-1.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ];
//! let spline = Spline::new(points, BoundaryCondition::Natural).unwrap();
//!
//! assert_approx_eq!(0.6875, spline.interpolate(0.5).unwrap(), 1e-9);
//! assert_approx_eq!(0.6875, spline.interpolate(-0.5).unwrap(), 1e-9);
//! ```

mod boundary;
mod error;
mod generator;
mod point;
mod polynomial;
pub mod solver;
mod spline;
mod system;
pub mod window;

pub use boundary::BoundaryCondition;
pub use error::SplineError;
pub use generator::{Advisory, GeneratorConfig};
pub use point::{points_from_pairs, Point};
pub use polynomial::Polynomial;
pub use spline::Spline;
pub use system::{SolvedSystem, SplineSystem};
