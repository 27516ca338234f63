// Value proxy: a percentage is not a plain float
//
// Conversions are explicit: `from_percentage(5.0)` stores 0.05, `to_value()` returns it.

use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Percentage {
    value: f32,
}

impl Percentage {
    /// `Percentage::from_percentage(5.0)` is five percent.
    pub fn from_percentage(percent: f32) -> Self {
        Self {
            value: percent / 100.0,
        }
    }

    /// Builds a percentage from its fractional value (`0.05` is five percent).
    pub fn from_value(value: f32) -> Self {
        Self { value }
    }

    /// Fractional value (`0.05` for five percent).
    pub fn to_value(self) -> f32 {
        self.value
    }

    /// This percentage of `amount`.
    pub fn of(self, amount: f32) -> f32 {
        amount * self.value
    }
}

impl Add for Percentage {
    type Output = Percentage;

    fn add(self, rhs: Percentage) -> Percentage {
        Percentage::from_value(self.value + rhs.value)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // three decimals hide f32 noise such as 5.0000005
        let percent = (self.value * 100.0 * 1000.0).round() / 1000.0;
        write!(f, "{percent}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_amount() {
        let five = Percentage::from_percentage(5.0);
        assert!((five.of(10.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_addition_and_display() {
        let sum = Percentage::from_percentage(2.0) + Percentage::from_percentage(3.0);
        assert_eq!(sum.to_string(), "5%");
        assert!((sum.to_value() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_fractional_display() {
        assert_eq!(Percentage::from_value(0.125).to_string(), "12.5%");
    }
}
