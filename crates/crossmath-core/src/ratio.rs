//! Exact rational arithmetic for left-to-right expression evaluation.

use std::{
    fmt::{self, Display},
    ops::{Add, Div, Mul, Sub},
};

/// An exact rational number.
///
/// Line equations use true division, so intermediate values are not always
/// integers. Evaluating with rationals keeps "does this expression hit the
/// target exactly" and "is this target a whole number" exact questions,
/// with no floating-point comparisons involved.
///
/// Values are kept in lowest terms with a positive denominator, so derived
/// equality is structural equality.
///
/// # Examples
///
/// ```
/// use crossmath_core::Ratio;
///
/// let third = Ratio::new(1, 3);
/// assert_eq!(third * Ratio::integer(3), Ratio::integer(1));
/// assert_eq!(Ratio::integer(7) / Ratio::integer(2), Ratio::new(7, 2));
/// assert_eq!(Ratio::new(6, 3), Ratio::integer(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i64,
    den: i64,
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Ratio {
    /// Creates a rational from a numerator and a denominator, reduced to
    /// lowest terms with a positive denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "zero denominator");
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        let g = gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Creates a rational with the given integer value.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    /// Returns `true` if the value is a whole number.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Returns the value as an integer, or `None` if it has a fractional
    /// part.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossmath_core::Ratio;
    ///
    /// assert_eq!(Ratio::new(6, 3).to_integer(), Some(2));
    /// assert_eq!(Ratio::new(7, 3).to_integer(), None);
    /// ```
    #[must_use]
    pub const fn to_integer(self) -> Option<i64> {
        if self.den == 1 { Some(self.num) } else { None }
    }

    /// Returns the numerator (in lowest terms).
    #[must_use]
    pub const fn numer(self) -> i64 {
        self.num
    }

    /// Returns the denominator (in lowest terms, always positive).
    #[must_use]
    pub const fn denom(self) -> i64 {
        self.den
    }
}

impl From<u8> for Ratio {
    fn from(value: u8) -> Self {
        Self::integer(i64::from(value))
    }
}

impl From<i32> for Ratio {
    fn from(value: i32) -> Self {
        Self::integer(i64::from(value))
    }
}

impl Add for Ratio {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Sub for Ratio {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.den - rhs.num * self.den, self.den * rhs.den)
    }
}

impl Mul for Ratio {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Div for Ratio {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
