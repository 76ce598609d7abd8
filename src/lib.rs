//! Fixed capacity univariate polynomial. Stores up to ten coefficients in ascending power order,
//! evaluates and formats the polynomial and classifies pair of bound values for roots.
//!
//! # Example
//! ```
//! use bounded_polynomial::{Polynomial, RootLocation};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut polynomial = Polynomial::new();
//! polynomial.add_coefficient(1.0);
//! polynomial.add_coefficient(-5.2);
//! polynomial.add_coefficient(2.0);
//! polynomial.add_coefficient(-4.0);
//!
//! assert_eq!("-4.0 x^3 + 2.0 x^2 - 5.2 x^1 + 1.0 x^0", polynomial.to_string());
//! assert_approx_eq!(-6.2, polynomial.evaluate(1.0), 1e-9);
//! assert_eq!(RootLocation::Between, polynomial.find_root(-3.0, 4.0));
//! ```

mod polynomial;
mod root;

pub use polynomial::{Polynomial, MAX_COEFFICIENTS};
pub use root::{classify_bounds, classify_bounds_with_tolerance, RootLocation, TOLERANCE};
