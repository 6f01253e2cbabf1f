// Per-page derived tables. Each submodule turns a `DashboardContext` into
// the rows one dashboard page displays; nothing here renders.

pub mod bets;
pub mod fantasy;
pub mod home;
pub mod matchup;
pub mod player;
pub mod team;

use std::cmp::Ordering;

/// Round half-to-even at `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}

/// Descending order for floats, NaN treated as equal.
pub(crate) fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to(66.666, 1), 66.7);
        assert_eq!(round_to(50.0, 1), 50.0);
        assert_eq!(round_to(2.25, 1), 2.2);
    }

    #[test]
    fn desc_orders_high_first() {
        let mut v = vec![1.0, 3.0, 2.0];
        v.sort_by(|a, b| desc(*a, *b));
        assert_eq!(v, vec![3.0, 2.0, 1.0]);
    }
}
