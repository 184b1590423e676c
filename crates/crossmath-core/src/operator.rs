//! The four binary arithmetic operators.

use std::fmt::{self, Display};

use crate::Ratio;

/// A binary arithmetic operator used in line equations.
///
/// Each operator has a stable wire code (1–4) used in serialized puzzles,
/// and a full-width display glyph used by the text rendering.
///
/// # Examples
///
/// ```
/// use crossmath_core::{Operator, Ratio};
///
/// let sum = Operator::Add.apply(Ratio::integer(2), Ratio::integer(4));
/// assert_eq!(sum, Ratio::integer(6));
///
/// // Division is true division.
/// let q = Operator::Div.apply(sum, Ratio::integer(4));
/// assert_eq!(q, Ratio::new(3, 2));
///
/// assert_eq!(Operator::Mul.code(), 3);
/// assert_eq!(Operator::from_code(3), Some(Operator::Mul));
/// assert_eq!(Operator::Mul.symbol(), '×');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Operator {
    /// Addition, wire code 1.
    Add = 1,
    /// Subtraction, wire code 2.
    Sub = 2,
    /// Multiplication, wire code 3.
    Mul = 3,
    /// True (non-truncating) division, wire code 4.
    Div = 4,
}

impl Operator {
    /// All four operators, in wire-code order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Applies the operator to two exact rational operands.
    ///
    /// # Panics
    ///
    /// Panics if the operator is [`Operator::Div`] and `rhs` is zero.
    /// Line equations only ever divide by cell digits (1–9), so this
    /// cannot happen during solving or generation.
    #[must_use]
    pub fn apply(self, lhs: Ratio, rhs: Ratio) -> Ratio {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }

    /// Returns the stable wire code (1–4) of the operator.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Creates an operator from its wire code, or `None` for an unknown
    /// code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Add),
            2 => Some(Self::Sub),
            3 => Some(Self::Mul),
            4 => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the full-width display glyph of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '＋',
            Self::Sub => '－',
            Self::Mul => '×',
            Self::Div => '÷',
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_code(op.code()), Some(op));
        }
        assert_eq!(Operator::from_code(0), None);
        assert_eq!(Operator::from_code(5), None);
    }

    #[test]
    fn apply() {
        let five = Ratio::integer(5);
        let two = Ratio::integer(2);
        assert_eq!(Operator::Add.apply(five, two), Ratio::integer(7));
        assert_eq!(Operator::Sub.apply(five, two), Ratio::integer(3));
        assert_eq!(Operator::Mul.apply(five, two), Ratio::integer(10));
        assert_eq!(Operator::Div.apply(five, two), Ratio::new(5, 2));
    }

    #[test]
    fn symbols() {
        assert_eq!(Operator::Add.to_string(), "＋");
        assert_eq!(Operator::Sub.to_string(), "－");
        assert_eq!(Operator::Mul.to_string(), "×");
        assert_eq!(Operator::Div.to_string(), "÷");
    }
}
