//! Currency formatting.

use std::fmt;

/// A dollar amount shown with two decimals, e.g. `$35.00`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency(pub f64);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = if self.0.is_finite() { self.0 } else { 0.0 };
        if amount < 0.0 {
            write!(f, "-${:.2}", -amount)
        } else {
            write!(f, "${amount:.2}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency(35.0).to_string(), "$35.00");
        assert_eq!(Currency(20.5).to_string(), "$20.50");
        assert_eq!(Currency(0.0).to_string(), "$0.00");
        assert_eq!(Currency(-3.25).to_string(), "-$3.25");
        assert_eq!(Currency(f64::NAN).to_string(), "$0.00");
    }
}
