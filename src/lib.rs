//! Sparse univariate polynomials over a generic scalar type.
//!
//! A [`Polynomial<T>`] stores only its non-zero terms, keyed by exponent.
//! Coefficients can be any [`Ring`]; division and gcd additionally need a
//! [`Field`], typically a rational type such as `num_rational::BigRational`.
//!
//! ```
//! use spoly::Polynomial;
//!
//! let p = Polynomial::new(vec![1, 2, 0, -1]);
//! assert_eq!(p.to_string(), "-x^3+2*x+1");
//! assert_eq!(p.degree(), Some(3));
//! ```

pub mod algebra;
pub mod error;
pub mod structures;

pub use algebra::field::Field;
pub use algebra::ring::Ring;

pub use error::{PolyError, Result};
pub use structures::poly::Polynomial;
