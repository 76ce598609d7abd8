use std::fmt::Display;

/// Values with absolute value below this threshold are treated as zero by [classify_bounds].
pub const TOLERANCE: f64 = 0.0001;

/// Outcome of bounds classification:
/// - `BothBounds` - both bounds are approximately zero,
/// - `LowerBound` - only lower bound is approximately zero,
/// - `UpperBound` - only upper bound is approximately zero,
/// - `Between` - bounds have opposite signs,
/// - `None` - none of the above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootLocation {
    BothBounds,
    LowerBound,
    UpperBound,
    Between,
    None,
}

impl RootLocation {
    /// Integer code of the location: `2` both bounds, `-1` lower bound, `1` upper bound,
    /// `0` between bounds and `-2` when nothing was found.
    pub fn code(self) -> i32 {
        match self {
            RootLocation::BothBounds => 2,
            RootLocation::LowerBound => -1,
            RootLocation::UpperBound => 1,
            RootLocation::Between => 0,
            RootLocation::None => -2,
        }
    }

    pub fn is_found(self) -> bool {
        self != RootLocation::None
    }
}

impl Display for RootLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            RootLocation::BothBounds => "root at both bounds",
            RootLocation::LowerBound => "root at lower bound",
            RootLocation::UpperBound => "root at upper bound",
            RootLocation::Between => "root between bounds",
            RootLocation::None => "no root at or between bounds",
        };
        write!(f, "{}", description)
    }
}

/// Classifies pair of bound values using [TOLERANCE]. First matching rule wins:
/// both bounds near zero, lower near zero, upper near zero, opposite signs.
/// # Example
/// ```
/// use bounded_polynomial::{classify_bounds, RootLocation};
///
/// assert_eq!(RootLocation::LowerBound, classify_bounds(0.0, 5.0));
/// assert_eq!(RootLocation::UpperBound, classify_bounds(5.0, 0.0));
/// assert_eq!(RootLocation::Between, classify_bounds(-3.0, 4.0));
/// ```
pub fn classify_bounds(lower: f64, upper: f64) -> RootLocation {
    classify_bounds_with_tolerance(lower, upper, TOLERANCE)
}

pub fn classify_bounds_with_tolerance(lower: f64, upper: f64, tolerance: f64) -> RootLocation {
    let is_lower_zero = is_near_zero(lower, tolerance);
    let is_upper_zero = is_near_zero(upper, tolerance);

    if is_lower_zero && is_upper_zero {
        RootLocation::BothBounds
    } else if is_lower_zero {
        RootLocation::LowerBound
    } else if is_upper_zero {
        RootLocation::UpperBound
    } else if lower * upper < 0.0 {
        RootLocation::Between
    } else {
        RootLocation::None
    }
}

fn is_near_zero(value: f64, tolerance: f64) -> bool {
    value.abs() < tolerance
}
