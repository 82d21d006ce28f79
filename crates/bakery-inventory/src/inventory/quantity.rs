use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stock amount in an ingredient's own unit. Always finite and never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Quantity(f64);

impl Quantity {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Result<Self, QuantityError> {
        if !value.is_finite() {
            return Err(QuantityError::NotANumber {
                input: value.to_string(),
            });
        }
        if value < 0.0 {
            return Err(QuantityError::Negative { value });
        }
        // -0.0 passes the sign check; store it as plain zero.
        if value == 0.0 {
            return Ok(Self::ZERO);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Removes `used` from this amount, flooring the result at zero.
    pub fn saturating_sub(self, used: Quantity) -> Quantity {
        let remaining = self.0 - used.0;
        if remaining > 0.0 {
            Self(remaining)
        } else {
            Self::ZERO
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.0),
            // Shortest round-trip form that still shows a decimal point: 5.0, 2.5.
            None => write!(f, "{:?}", self.0),
        }
    }
}

impl TryFrom<f64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for f64 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_quantity(raw)
    }
}

/// Rejection reasons for operator-entered amounts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    #[error("Please enter a valid number (e.g., 2 or 2.5).")]
    NotANumber { input: String },
    #[error("Please enter a non-negative number.")]
    Negative { value: f64 },
}

/// Parses operator input into a [`Quantity`].
///
/// Surrounding whitespace is ignored. Text that is not a finite real number
/// (including `NaN` and `inf`) is [`QuantityError::NotANumber`]; anything below
/// zero is [`QuantityError::Negative`].
pub fn parse_quantity(raw: &str) -> Result<Quantity, QuantityError> {
    let trimmed = raw.trim();
    let not_a_number = || QuantityError::NotANumber {
        input: trimmed.to_string(),
    };

    let value: f64 = trimmed.parse().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }
    Quantity::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(parse_quantity("2").expect("whole").value(), 2.0);
        assert_eq!(parse_quantity(" 2.5 ").expect("fraction").value(), 2.5);
        assert_eq!(parse_quantity("0").expect("zero"), Quantity::ZERO);
        assert_eq!(parse_quantity("1e3").expect("exponent").value(), 1000.0);
    }

    #[test]
    fn str_parse_uses_the_same_rules() {
        let quantity: Quantity = " 0.75 ".parse().expect("valid amount");
        assert_eq!(quantity.value(), 0.75);
        assert!(matches!(
            "-2".parse::<Quantity>(),
            Err(QuantityError::Negative { .. })
        ));
    }

    #[test]
    fn rejects_text() {
        assert_eq!(
            parse_quantity("abc"),
            Err(QuantityError::NotANumber {
                input: "abc".to_string()
            })
        );
        assert!(matches!(
            parse_quantity(""),
            Err(QuantityError::NotANumber { .. })
        ));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert_eq!(
            parse_quantity("-1"),
            Err(QuantityError::Negative { value: -1.0 })
        );
    }

    #[test]
    fn rejects_non_finite_amounts() {
        for raw in ["NaN", "inf", "-inf", "infinity"] {
            assert!(
                matches!(parse_quantity(raw), Err(QuantityError::NotANumber { .. })),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let quantity = parse_quantity("-0").expect("negative zero is not below zero");
        assert_eq!(quantity.to_string(), "0.0");
    }

    #[test]
    fn error_messages_match_prompts() {
        assert_eq!(
            parse_quantity("-3").unwrap_err().to_string(),
            "Please enter a non-negative number."
        );
        assert_eq!(
            parse_quantity("two").unwrap_err().to_string(),
            "Please enter a valid number (e.g., 2 or 2.5)."
        );
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let stock = Quantity::new(3.0).expect("valid");
        let used = Quantity::new(5.0).expect("valid");
        assert_eq!(stock.saturating_sub(used), Quantity::ZERO);

        let used = Quantity::new(1.25).expect("valid");
        assert_eq!(stock.saturating_sub(used).value(), 1.75);
    }

    #[test]
    fn display_honours_precision() {
        let quantity = Quantity::new(5.0).expect("valid");
        assert_eq!(quantity.to_string(), "5.0");
        assert_eq!(format!("{quantity:.2}"), "5.00");
    }

    #[test]
    fn deserializing_rejects_negative_amounts() {
        assert!(serde_json::from_str::<Quantity>("-2.0").is_err());
        let quantity: Quantity = serde_json::from_str("2.5").expect("valid amount");
        assert_eq!(quantity.value(), 2.5);
    }
}
