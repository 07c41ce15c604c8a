use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign},
};

/// Represents an amount of money in USD currency.
///
/// The amount is stored as an unrounded number of dollars, so sums stay
/// exact to floating-point precision. The [`Display`] implementation
/// truncates it toward zero and formats it as `$<dollars>`, respecting any
/// width and alignment given in the format string.
///
/// ```
/// # use payroll::Usd;
/// let mut pay = Usd::new(1048.95);
/// pay += Usd::new(0.5);
/// assert_eq!(format!("{pay}"), "$1049");
/// assert_eq!(format!("{:>8}", Usd::new(12.99)), "     $12");
/// ```
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Usd(f64);

impl Usd {
    #[must_use]
    pub fn new(dollars: f64) -> Self {
        Self(dollars)
    }

    /// Returns the exact, unrounded amount.
    #[must_use]
    pub fn dollars(self) -> f64 {
        self.0
    }
}

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Usd({})", self.0)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!("${}", whole(self.0)))
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Add for Usd {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Truncates `value` toward zero for display.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn whole(value: f64) -> i64 {
    value.trunc() as i64
}
