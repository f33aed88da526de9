//! Denomination calculator.

use std::fmt;

use thiserror::Error;

/// Errors of the denomination calculator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoneyError {
    /// A negative value was supplied for the named field.
    #[error("{0} can't be negative")]
    InvalidArgument(&'static str),

    /// The price is zero.
    #[error("Can't divide by zero")]
    DivisionByZero,

    /// The total does not fit into `i32`.
    #[error("Arithmetic operation resulted in an overflow.")]
    ArithmeticOverflow,
}

/// A number of banknotes or coins of the same denomination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Money {
    unit_value: i32,
    count: i32,
}

impl Money {
    /// Creates a new value. Fails if either argument is negative.
    pub fn new(unit_value: i32, count: i32) -> Result<Self, MoneyError> {
        Ok(Self {
            unit_value: check_non_negative("Unit value", unit_value)?,
            count: check_non_negative("Count", count)?,
        })
    }

    /// Returns the value of a single unit.
    pub fn unit_value(&self) -> i32 {
        self.unit_value
    }

    /// Returns the number of units.
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Sets the value of a single unit. The value is unchanged on failure.
    pub fn set_unit_value(&mut self, unit_value: i32) -> Result<(), MoneyError> {
        self.unit_value = check_non_negative("Unit value", unit_value)?;
        Ok(())
    }

    /// Sets the number of units. The value is unchanged on failure.
    pub fn set_count(&mut self, count: i32) -> Result<(), MoneyError> {
        self.count = check_non_negative("Count", count)?;
        Ok(())
    }

    /// Returns `unit_value * count`.
    ///
    /// The product of two `i32` values always fits into `i64`.
    pub fn total(&self) -> i64 {
        i64::from(self.unit_value) * i64::from(self.count)
    }

    /// Returns true if an item with the given price is affordable.
    pub fn can_buy(&self, price: i32) -> bool {
        i64::from(price) <= self.total()
    }

    /// Returns how many items with the given price are affordable.
    ///
    /// The total is computed in `i32` and overflow is reported as [`MoneyError::ArithmeticOverflow`].
    pub fn calculate_items(&self, price: i32) -> Result<i32, MoneyError> {
        if price == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        check_non_negative("Price", price)?;
        let total = self
            .unit_value
            .checked_mul(self.count)
            .ok_or(MoneyError::ArithmeticOverflow)?;
        Ok(total / price)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit value: {}, count: {}", self.unit_value, self.count)
    }
}

fn check_non_negative(field: &'static str, value: i32) -> Result<i32, MoneyError> {
    if value < 0 {
        Err(MoneyError::InvalidArgument(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_update_keeps_value() {
        let mut money = Money::new(10, 5).unwrap();
        assert_eq!(money.set_count(-1), Err(MoneyError::InvalidArgument("Count")));
        assert_eq!(money.count(), 5);
        money.set_unit_value(3).unwrap();
        assert_eq!(money.total(), 15);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Money::new(-1, 0).unwrap_err().to_string(),
            "Unit value can't be negative"
        );
        assert_eq!(Money::new(1, -1).unwrap_err().to_string(), "Count can't be negative");
        assert_eq!(MoneyError::DivisionByZero.to_string(), "Can't divide by zero");
        assert_eq!(
            MoneyError::ArithmeticOverflow.to_string(),
            "Arithmetic operation resulted in an overflow."
        );
    }

    #[test]
    fn display() {
        assert_eq!(Money::new(10, 5).unwrap().to_string(), "Unit value: 10, count: 5");
    }
}
