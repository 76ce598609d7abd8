use std::{error::Error, fmt::Display};

use nalgebra::DVector;

use crate::root::{classify_bounds, RootLocation};

/// Maximal number of coefficients [Polynomial] can hold.
pub const MAX_COEFFICIENTS: usize = 10;

/// Univariate polynomial with up to [MAX_COEFFICIENTS] coefficients stored in ascending power order:
/// - `coefficients` - backing storage, index `i` holds coefficient of `x^i`,
/// - `size` - number of leading slots of `coefficients` that were filled.
///
/// Only `coefficients[..size]` takes part in evaluation and formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: [f64; MAX_COEFFICIENTS],
    size: usize
}

impl Polynomial {

    /// Creates empty [Polynomial].
    pub fn new() -> Self {
        Polynomial { coefficients: [0.0; MAX_COEFFICIENTS], size: 0 }
    }

    /// Creates [Polynomial] from coefficients given in ascending power order.
    /// # Example
    /// ```
    /// use bounded_polynomial::Polynomial;
    ///
    /// let polynomial = Polynomial::from_coefficients(&[1.0, -5.2, 2.0, -4.0]).unwrap();
    /// assert_eq!("-4.0 x^3 + 2.0 x^2 - 5.2 x^1 + 1.0 x^0", polynomial.to_string());
    /// ```
    /// # Errors
    /// Error is returned when more than [MAX_COEFFICIENTS] coefficients are given.
    /// ```
    /// use bounded_polynomial::Polynomial;
    ///
    /// let polynomial = Polynomial::from_coefficients(&[1.0; 11]);
    /// assert!(polynomial.is_err());
    /// ```
    pub fn from_coefficients(coefficients: &[f64]) -> Result<Self, Box<dyn Error>> {

        if coefficients.len() > MAX_COEFFICIENTS {
            log::debug!("rejecting {} coefficients, capacity is {}", coefficients.len(), MAX_COEFFICIENTS);
            return Err(Box::new(
                PolynomialError(format!("at most {} coefficients are allowed", MAX_COEFFICIENTS))
            ))
        }

        let mut polynomial = Polynomial::new();
        for coefficient in coefficients {
            polynomial.add_coefficient(*coefficient);
        }
        Ok(polynomial)
    }

    /// Appends coefficient of the next power. When polynomial is full the coefficient is ignored.
    pub fn add_coefficient(&mut self, coefficient: f64) {
        if self.size < MAX_COEFFICIENTS {
            self.coefficients[self.size] = coefficient;
            self.size += 1;
        } else {
            log::trace!("polynomial is full, coefficient {:?} dropped", coefficient);
        }
    }

    /// Whole backing storage, including slots past [Polynomial::get_size].
    pub fn get_coefficients(&self) -> &[f64; MAX_COEFFICIENTS] {
        &self.coefficients
    }

    pub fn get_filled_coefficients(&self) -> &[f64] {
        &self.coefficients[..self.size]
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == MAX_COEFFICIENTS
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let mut result = 0.0;
        for i in 0..self.size {
            result += x.powf(i as f64) * self.coefficients[i]
        }
        result
    }

    pub fn batch_evaluate(&self, x_vector: &[f64]) -> Vec<f64> {
        x_vector.iter()
            .map(|x| self.evaluate(*x))
            .collect()
    }

    /// Filled coefficients as column vector.
    pub fn to_vector(&self) -> DVector<f64> {
        DVector::from_column_slice(self.get_filled_coefficients())
    }

    /// Classifies given bound values with [classify_bounds]. Stored coefficients are not used,
    /// `lower` and `upper` are checked directly.
    /// # Example
    /// ```
    /// use bounded_polynomial::{Polynomial, RootLocation};
    ///
    /// let polynomial = Polynomial::new();
    /// assert_eq!(RootLocation::Between, polynomial.find_root(-3.0, 4.0));
    /// assert_eq!(RootLocation::None, polynomial.find_root(2.0, 3.0));
    /// ```
    pub fn find_root(&self, lower: f64, upper: f64) -> RootLocation {
        classify_bounds(lower, upper)
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Polynomial::new()
    }
}

/// Writes polynomial from the highest power down, e.g. `-4.0 x^3 + 2.0 x^2 - 5.2 x^1 + 1.0 x^0`.
/// Terms with coefficient equal to zero are skipped, empty or all zero polynomial gives empty string.
impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut is_first = true;

        for power in (0..self.size).rev() {
            let coefficient = self.coefficients[power];
            if coefficient == 0.0 {
                continue;
            }

            let sign = if coefficient >= 0.0 { "+" } else { "-" };
            let magnitude = coefficient.abs();

            if is_first {
                if sign == "-" {
                    write!(f, "-")?;
                }
                is_first = false;
            } else {
                write!(f, " {} ", sign)?;
            }
            write!(f, "{:?} x^{}", magnitude, power)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct PolynomialError(String);

impl Display for PolynomialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Polynomial: {}", self.0)
    }
}

impl Error for PolynomialError {}
