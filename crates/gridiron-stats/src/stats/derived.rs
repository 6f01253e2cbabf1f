// Per-row derived fields: composite yardage/touchdowns, franchise name, and
// the season-week key.

use crate::stats::record::{DerivedStats, PlayerWeekRecord};
use crate::teams;

/// Fill the derived columns of every record from its base columns.
///
/// Each derived value is recomputed from the base stats, so calling this on
/// an already-derived table leaves it unchanged.
pub fn apply_derived_fields(records: &mut [PlayerWeekRecord]) {
    for record in records.iter_mut() {
        derive_record(record);
    }
}

fn derive_record(record: &mut PlayerWeekRecord) {
    record.derived = DerivedStats::from_stats(&record.stats);
    record.real_team = teams::real_team(&record.team).map(str::to_string);
    record.year_week = year_week(record.season, &record.week_padded);
}

/// `{season}_{week_padded}` composite key.
pub fn year_week(season: i32, week_padded: &str) -> String {
    format!("{season}_{week_padded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::record::StatLine;

    fn sample() -> Vec<PlayerWeekRecord> {
        vec![
            PlayerWeekRecord::new(
                "QB1",
                "KAN",
                2023,
                Some(1),
                StatLine {
                    passing_yds: 300.0,
                    rushing_yds: 20.0,
                    rushing_td: 1.0,
                    ..Default::default()
                },
            ),
            PlayerWeekRecord::new(
                "WR1",
                "XYZ",
                2023,
                Some(2),
                StatLine {
                    rushing_yds: 5.0,
                    receiving_yds: 110.0,
                    receiving_td: 2.0,
                    receiving_tgt: 11.0,
                    receiving_rec: 8.0,
                    ..Default::default()
                },
            ),
        ]
    }

    #[test]
    fn composites_are_sums_of_base_columns() {
        let mut rows = sample();
        apply_derived_fields(&mut rows);
        for r in &rows {
            let s = &r.stats;
            assert_eq!(
                r.derived.passing_rushing_receiving_yds,
                s.passing_yds + s.rushing_yds + s.receiving_yds
            );
            assert_eq!(r.derived.rushing_receiving_td, s.rushing_td + s.receiving_td);
            assert_eq!(r.derived.passing_rushing_yds, s.passing_yds + s.rushing_yds);
            assert_eq!(r.derived.rushing_receiving_yds, s.rushing_yds + s.receiving_yds);
        }
        assert_eq!(rows[1].derived.targets_not_caught, 3.0);
    }

    #[test]
    fn real_team_and_year_week() {
        let mut rows = sample();
        apply_derived_fields(&mut rows);
        assert_eq!(rows[0].real_team.as_deref(), Some("Kansas City Chiefs"));
        assert_eq!(rows[0].year_week, "2023_01");
        assert_eq!(rows[1].real_team, None);
        assert_eq!(rows[1].year_week, "2023_02");
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut once = sample();
        apply_derived_fields(&mut once);
        let mut twice = once.clone();
        apply_derived_fields(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_week_gives_trailing_underscore_key() {
        let mut rows = vec![PlayerWeekRecord::new("X", "KAN", 2024, None, StatLine::default())];
        apply_derived_fields(&mut rows);
        assert_eq!(rows[0].year_week, "2024_");
    }
}
