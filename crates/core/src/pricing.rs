//! Nightly pricing derived from a stay range
//!
//! Pure derivation, no error conditions: an incomplete range simply
//! prices to zero.

use crate::models::DateRange;

/// Derived price for a stay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub nights: u32,
    pub price_per_night: u32,
    pub total: u64,
}

impl Quote {
    /// Price a stay against a zone's nightly rate.
    ///
    /// With both dates set, nights is the whole-day difference clamped
    /// to at least 1 - a same-day or inverted range books one night
    /// rather than failing. An incomplete range yields zero nights and
    /// a zero total.
    pub fn for_stay(range: &DateRange, price_per_night: u32) -> Self {
        let nights = match (range.from, range.to) {
            (Some(from), Some(to)) => (to - from).num_days().max(1) as u32,
            _ => 0,
        };

        Self {
            nights,
            price_per_night,
            total: u64::from(nights) * u64::from(price_per_night),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn two_night_stay() {
        let range = DateRange::between(date(1), date(3));
        let quote = Quote::for_stay(&range, 300);
        assert_eq!(quote.nights, 2);
        assert_eq!(quote.total, 600);
    }

    #[test]
    fn same_day_clamps_to_one_night() {
        let range = DateRange::between(date(1), date(1));
        let quote = Quote::for_stay(&range, 300);
        assert_eq!(quote.nights, 1);
        assert_eq!(quote.total, 300);
    }

    #[test]
    fn inverted_range_clamps_to_one_night() {
        let range = DateRange::between(date(5), date(2));
        let quote = Quote::for_stay(&range, 400);
        assert_eq!(quote.nights, 1);
        assert_eq!(quote.total, 400);
    }

    #[test]
    fn unset_range_prices_to_zero() {
        let quote = Quote::for_stay(&DateRange::default(), 350);
        assert_eq!(quote.nights, 0);
        assert_eq!(quote.total, 0);
    }

    #[test]
    fn partial_range_prices_to_zero() {
        let range = DateRange::new(Some(date(1)), None);
        let quote = Quote::for_stay(&range, 350);
        assert_eq!(quote.nights, 0);
        assert_eq!(quote.total, 0);
    }
}
