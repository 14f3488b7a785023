//! Monetary amounts split into whole dollars and a cents part.
//!
//! Receipt totals and prices arrive as decimal strings with any number of whole digits.
//! The round-dollar and quarter checks depend only on the cents part, so they stay exact
//! however large the dollar figure is; the dollar figure saturates at `u128::MAX`.

use std::fmt;

const CENTS_PER_DOLLAR: u128 = 100;
const QUARTER_CENTS: u8 = 25;

/// Non-negative monetary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    dollars: u128,
    cents: u8,
}

impl Amount {
    #[inline]
    pub const fn from_cents(cents: u128) -> Self {
        Amount {
            dollars: cents / CENTS_PER_DOLLAR,
            cents: (cents % CENTS_PER_DOLLAR) as u8,
        }
    }

    #[inline]
    pub const fn dollars(&self) -> u128 {
        self.dollars
    }

    /// Cents component, always `0..=99`.
    #[inline]
    pub const fn cents_part(&self) -> u8 {
        self.cents
    }

    /// Parse `<digits>` or `<digits>.<one or two digits>`, ignoring surrounding whitespace.
    ///
    /// Returns `None` for anything else, including signs, exponents, empty parts, and more
    /// than two fractional digits. Whole parts beyond `u128` saturate rather than fail.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (whole, fraction) = match raw.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (raw, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Digits only, so the sole failure left is overflow.
        let dollars = whole.parse::<u128>().unwrap_or(u128::MAX);

        let cents = match fraction {
            None => 0,
            Some(fraction)
                if (1..=2).contains(&fraction.len())
                    && fraction.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let value: u8 = fraction.parse().ok()?;
                if fraction.len() == 1 {
                    value * 10
                } else {
                    value
                }
            }
            Some(_) => return None,
        };

        Some(Amount { dollars, cents })
    }

    /// True when the cents component is zero.
    pub const fn is_round_dollar(&self) -> bool {
        self.cents == 0
    }

    /// True when the amount is an exact multiple of 0.25.
    pub const fn is_quarter_multiple(&self) -> bool {
        self.cents % QUARTER_CENTS == 0
    }

    /// `ceil(amount * percent / 100)` in whole dollars, saturating at `u64::MAX`.
    pub fn ceil_percent_dollars(&self, percent: u64) -> u64 {
        let cents = self
            .dollars
            .saturating_mul(CENTS_PER_DOLLAR)
            .saturating_add(u128::from(self.cents));
        let scaled = cents.saturating_mul(u128::from(percent));
        let dollars = scaled.div_ceil(CENTS_PER_DOLLAR * 100);
        u64::try_from(dollars).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars, self.cents)
    }
}
