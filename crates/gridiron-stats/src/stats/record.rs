// Typed schema for weekly box-score rows.

use std::ops::AddAssign;

// ---------------------------------------------------------------------------
// Raw stat columns
// ---------------------------------------------------------------------------

/// The numeric box-score columns of one player-week. Absent or unparseable
/// source cells are 0, so every field is always safe to add.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatLine {
    pub passing_cmp: f64,
    pub passing_att: f64,
    pub passing_yds: f64,
    pub passing_td: f64,
    pub passing_int: f64,
    pub passing_rate: f64,
    pub rushing_att: f64,
    pub rushing_yds: f64,
    pub rushing_td: f64,
    pub rushing_lng: f64,
    pub receiving_tgt: f64,
    pub receiving_rec: f64,
    pub receiving_yds: f64,
    pub receiving_td: f64,
    pub receiving_lng: f64,
    pub fumbles_lost: f64,
}

impl AddAssign<&StatLine> for StatLine {
    /// Counting stats sum; longest-play columns keep the maximum.
    fn add_assign(&mut self, rhs: &StatLine) {
        self.passing_cmp += rhs.passing_cmp;
        self.passing_att += rhs.passing_att;
        self.passing_yds += rhs.passing_yds;
        self.passing_td += rhs.passing_td;
        self.passing_int += rhs.passing_int;
        self.passing_rate += rhs.passing_rate;
        self.rushing_att += rhs.rushing_att;
        self.rushing_yds += rhs.rushing_yds;
        self.rushing_td += rhs.rushing_td;
        self.rushing_lng = self.rushing_lng.max(rhs.rushing_lng);
        self.receiving_tgt += rhs.receiving_tgt;
        self.receiving_rec += rhs.receiving_rec;
        self.receiving_yds += rhs.receiving_yds;
        self.receiving_td += rhs.receiving_td;
        self.receiving_lng = self.receiving_lng.max(rhs.receiving_lng);
        self.fumbles_lost += rhs.fumbles_lost;
    }
}

// ---------------------------------------------------------------------------
// Composite columns
// ---------------------------------------------------------------------------

/// Per-row composites. Always computed from a `StatLine`, never accumulated
/// in place, so recomputing them cannot double-count.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedStats {
    pub passing_rushing_yds: f64,
    pub rushing_receiving_yds: f64,
    pub passing_rushing_receiving_yds: f64,
    pub rushing_receiving_td: f64,
    pub targets_not_caught: f64,
}

impl DerivedStats {
    pub fn from_stats(s: &StatLine) -> Self {
        Self {
            passing_rushing_yds: s.passing_yds + s.rushing_yds,
            rushing_receiving_yds: s.rushing_yds + s.receiving_yds,
            passing_rushing_receiving_yds: s.passing_yds + s.rushing_yds + s.receiving_yds,
            rushing_receiving_td: s.rushing_td + s.receiving_td,
            targets_not_caught: s.receiving_tgt - s.receiving_rec,
        }
    }
}

impl AddAssign<&DerivedStats> for DerivedStats {
    fn add_assign(&mut self, rhs: &DerivedStats) {
        self.passing_rushing_yds += rhs.passing_rushing_yds;
        self.rushing_receiving_yds += rhs.rushing_receiving_yds;
        self.passing_rushing_receiving_yds += rhs.passing_rushing_receiving_yds;
        self.rushing_receiving_td += rhs.rushing_receiving_td;
        self.targets_not_caught += rhs.targets_not_caught;
    }
}

// ---------------------------------------------------------------------------
// Player-week record
// ---------------------------------------------------------------------------

/// One player's box score for one week of one season.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerWeekRecord {
    pub player: String,
    /// Box-score team code as it appears in the source (e.g. `KAN`).
    pub team: String,
    pub season: i32,
    /// 1-based week, `None` when the source file has no week column.
    pub week: Option<u32>,
    /// Two-digit week (`"01"`), empty when `week` is `None`.
    pub week_padded: String,
    pub stats: StatLine,
    pub derived: DerivedStats,
    /// Franchise name for `team`; `None` for unknown codes.
    pub real_team: Option<String>,
    /// `{season}_{week_padded}` sort/join key.
    pub year_week: String,
}

impl PlayerWeekRecord {
    /// Build a record with base columns only; derived columns are filled by
    /// `stats::derived::apply_derived_fields`.
    pub fn new(player: &str, team: &str, season: i32, week: Option<u32>, stats: StatLine) -> Self {
        Self {
            player: player.to_string(),
            team: team.to_string(),
            season,
            week,
            week_padded: pad_week(week),
            stats,
            derived: DerivedStats::default(),
            real_team: None,
            year_week: String::new(),
        }
    }

    pub fn stat(&self, kind: StatKind) -> f64 {
        kind.value(&self.stats, &self.derived)
    }
}

/// Zero-padded two-digit week, or an empty string when there is no week.
pub fn pad_week(week: Option<u32>) -> String {
    week.map(|w| format!("{w:02}")).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Column selector
// ---------------------------------------------------------------------------

/// Every numeric column a view can select, base or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    PassingCmp,
    PassingAtt,
    PassingYds,
    PassingTd,
    PassingInt,
    PassingRate,
    RushingAtt,
    RushingYds,
    RushingTd,
    RushingLng,
    ReceivingTgt,
    ReceivingRec,
    ReceivingYds,
    ReceivingTd,
    ReceivingLng,
    FumblesLost,
    PassingRushingYds,
    RushingReceivingYds,
    PassingRushingReceivingYds,
    RushingReceivingTd,
    TargetsNotCaught,
}

impl StatKind {
    pub fn value(self, s: &StatLine, d: &DerivedStats) -> f64 {
        match self {
            StatKind::PassingCmp => s.passing_cmp,
            StatKind::PassingAtt => s.passing_att,
            StatKind::PassingYds => s.passing_yds,
            StatKind::PassingTd => s.passing_td,
            StatKind::PassingInt => s.passing_int,
            StatKind::PassingRate => s.passing_rate,
            StatKind::RushingAtt => s.rushing_att,
            StatKind::RushingYds => s.rushing_yds,
            StatKind::RushingTd => s.rushing_td,
            StatKind::RushingLng => s.rushing_lng,
            StatKind::ReceivingTgt => s.receiving_tgt,
            StatKind::ReceivingRec => s.receiving_rec,
            StatKind::ReceivingYds => s.receiving_yds,
            StatKind::ReceivingTd => s.receiving_td,
            StatKind::ReceivingLng => s.receiving_lng,
            StatKind::FumblesLost => s.fumbles_lost,
            StatKind::PassingRushingYds => d.passing_rushing_yds,
            StatKind::RushingReceivingYds => d.rushing_receiving_yds,
            StatKind::PassingRushingReceivingYds => d.passing_rushing_receiving_yds,
            StatKind::RushingReceivingTd => d.rushing_receiving_td,
            StatKind::TargetsNotCaught => d.targets_not_caught,
        }
    }

    /// Source column name.
    pub fn column(self) -> &'static str {
        match self {
            StatKind::PassingCmp => "Passing_Cmp",
            StatKind::PassingAtt => "Passing_Att",
            StatKind::PassingYds => "Passing_Yds",
            StatKind::PassingTd => "Passing_TD",
            StatKind::PassingInt => "Passing_Int",
            StatKind::PassingRate => "Passing_Rate",
            StatKind::RushingAtt => "Rushing_Att",
            StatKind::RushingYds => "Rushing_Yds",
            StatKind::RushingTd => "Rushing_TD",
            StatKind::RushingLng => "Rushing_Lng",
            StatKind::ReceivingTgt => "Receiving_Tgt",
            StatKind::ReceivingRec => "Receiving_Rec",
            StatKind::ReceivingYds => "Receiving_Yds",
            StatKind::ReceivingTd => "Receiving_TD",
            StatKind::ReceivingLng => "Receiving_Lng",
            StatKind::FumblesLost => "Fumbles_FL",
            StatKind::PassingRushingYds => "Passing_Rushing_Yds",
            StatKind::RushingReceivingYds => "Rushing_Receiving_Yds",
            StatKind::PassingRushingReceivingYds => "Passing_Rushing_Receiving_Yds",
            StatKind::RushingReceivingTd => "Rushing_Receiving_TD",
            StatKind::TargetsNotCaught => "Targets_not_caught",
        }
    }
}

/// The three yardage categories that drive role classification and the
/// team/matchup breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YardageKind {
    Passing,
    Rushing,
    Receiving,
}

impl YardageKind {
    pub const ALL: [YardageKind; 3] = [YardageKind::Passing, YardageKind::Rushing, YardageKind::Receiving];

    pub fn stat(self) -> StatKind {
        match self {
            YardageKind::Passing => StatKind::PassingYds,
            YardageKind::Rushing => StatKind::RushingYds,
            YardageKind::Receiving => StatKind::ReceivingYds,
        }
    }
}
