use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Number as JsonNumber;

use crate::CanonicalizeError;

/// A JSON number. Integer literals stay exact; everything else is held as
/// IEEE-754 double precision.
///
/// Equality is numeric: integers compare exactly with each other, and an
/// integer equals a float only when the float has that exact integral value.
/// `1` and `1.0` therefore compare equal, while `9007199254740993` and
/// `9007199254740992` do not.
///
/// ```
/// # use jsoneq_core::Node;
/// let int = Node::from_json_str("1")?;
/// let float = Node::from_json_str("1.0")?;
/// assert_eq!(int, float);
/// assert_ne!(
///     Node::from_json_str("9007199254740993")?,
///     Node::from_json_str("9007199254740992")?,
/// );
/// # Ok::<(), jsoneq_core::CanonicalizeError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Number(Repr);

#[derive(Clone, Copy, Debug)]
enum Repr {
    Int(i64),
    UInt(u64),
    Float(f64),
}

// Rounds to 2^127; every integral f64 below it in magnitude fits an i128.
const I128_BOUND: f64 = i128::MAX as f64;

impl Number {
    /// Creates a new floating-point [`Number`] after validating finiteness.
    ///
    /// ```
    /// # use jsoneq_core::Number;
    /// let num = Number::new(42.0)?;
    /// assert_eq!(num.as_f64(), 42.0);
    /// assert!(Number::new(f64::NAN).is_err());
    /// # Ok::<(), jsoneq_core::CanonicalizeError>(())
    /// ```
    pub fn new(value: f64) -> Result<Self, CanonicalizeError> {
        if value.is_finite() {
            Ok(Self(Repr::Float(value)))
        } else {
            Err(CanonicalizeError::NotFinite { value })
        }
    }

    /// Returns the value as a float, rounding integers beyond 2^53.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self.0 {
            Repr::Int(v) => v as f64,
            Repr::UInt(v) => v as f64,
            Repr::Float(v) => v,
        }
    }

    /// Converts the number into a `serde_json::Number`. Integers convert
    /// exactly; floats prefer the integer representation when they have no
    /// fractional part.
    #[must_use]
    pub fn to_json_number(self) -> JsonNumber {
        let value = match self.0 {
            Repr::Int(v) => return JsonNumber::from(v),
            Repr::UInt(v) => return JsonNumber::from(v),
            Repr::Float(v) => v,
        };
        if value.fract() == 0.0 && !(value == 0.0 && value.is_sign_negative()) {
            // `i64::MAX as f64` and `u64::MAX as f64` round up to 2^63 and
            // 2^64, so both upper bounds are exclusive.
            if (i64::MIN as f64) <= value && value < (i64::MAX as f64) {
                return JsonNumber::from(value as i64);
            }
            if value >= 0.0 && value < (u64::MAX as f64) {
                return JsonNumber::from(value as u64);
            }
        }
        // `Number::new` rejects non-finite values, so `from_f64` cannot fail.
        JsonNumber::from_f64(value).unwrap_or_else(|| JsonNumber::from(0))
    }

    fn as_exact_integer(self) -> Option<i128> {
        match self.0 {
            Repr::Int(v) => Some(i128::from(v)),
            Repr::UInt(v) => Some(i128::from(v)),
            Repr::Float(v) if v.fract() == 0.0 && v.abs() < I128_BOUND => Some(v as i128),
            Repr::Float(_) => None,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self(Repr::Int(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self(Repr::UInt(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(Repr::Int(i64::from(value)))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (Repr::Float(lhs), Repr::Float(rhs)) => lhs == rhs,
            _ => match (self.as_exact_integer(), other.as_exact_integer()) {
                (Some(lhs), Some(rhs)) => lhs == rhs,
                _ => false,
            },
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Repr::Int(v) => serializer.serialize_i64(v),
            Repr::UInt(v) => serializer.serialize_u64(v),
            Repr::Float(_) => self.to_json_number().serialize(serializer),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_serialize_without_fraction() {
        let number = Number::new(5.0).unwrap();
        assert_eq!(serde_json::to_string(&number).unwrap(), "5");
        assert_eq!(number.to_string(), "5");
    }

    #[test]
    fn fractional_values_keep_fraction() {
        let number = Number::new(2.5).unwrap();
        assert_eq!(serde_json::to_string(&number).unwrap(), "2.5");
    }

    #[test]
    fn negative_zero_stays_float() {
        let number = Number::new(-0.0).unwrap();
        assert_eq!(serde_json::to_string(&number).unwrap(), "-0.0");
    }

    #[test]
    fn infinity_is_rejected() {
        let err = Number::new(f64::INFINITY).unwrap_err();
        assert!(matches!(err, CanonicalizeError::NotFinite { .. }));
    }

    #[test]
    fn integers_beyond_double_precision_stay_distinct() {
        assert_ne!(Number::from(9_007_199_254_740_993_i64), Number::from(9_007_199_254_740_992_i64));
        assert_ne!(Number::from(u64::MAX), Number::from(u64::MAX - 1));
        assert_eq!(Number::from(u64::MAX), Number::from(u64::MAX));
    }

    #[test]
    fn signed_and_unsigned_integers_compare_by_value() {
        assert_eq!(Number::from(7_i64), Number::from(7_u64));
        assert_ne!(Number::from(-1_i64), Number::from(u64::MAX));
    }

    #[test]
    fn integers_equal_floats_with_the_same_integral_value() {
        assert_eq!(Number::from(1_i64), Number::new(1.0).unwrap());
        assert_eq!(Number::new(-3.0).unwrap(), Number::from(-3_i64));
        assert_ne!(Number::from(1_i64), Number::new(1.5).unwrap());
        // 2^53 + 1 has no exact double; the nearest double is 2^53.
        assert_ne!(Number::from(9_007_199_254_740_993_i64), Number::new(9_007_199_254_740_992.0).unwrap());
        assert_eq!(Number::from(9_007_199_254_740_992_i64), Number::new(9_007_199_254_740_992.0).unwrap());
    }

    #[test]
    fn two_to_the_sixty_three_is_not_saturated() {
        let number = Number::new(2_f64.powi(63)).unwrap();
        assert_eq!(number.to_string(), "9223372036854775808");
        assert_eq!(serde_json::to_string(&number).unwrap(), "9223372036854775808");
    }

    #[test]
    fn two_to_the_sixty_four_falls_back_to_float_text() {
        let number = Number::new(2_f64.powi(64)).unwrap();
        assert_ne!(number.to_string(), "18446744073709551615");
        assert_eq!(number.as_f64(), 2_f64.powi(64));
    }

    #[test]
    fn integers_serialize_exactly() {
        assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Number::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(serde_json::to_string(&Number::from(-12_i64)).unwrap(), "-12");
    }
}
