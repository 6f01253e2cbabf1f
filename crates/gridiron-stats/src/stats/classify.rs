// Player role classification from yardage totals.

use std::collections::BTreeMap;
use std::fmt;

use crate::stats::season::{CareerAggregate, YardageTotals};

/// A player's primary offensive role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerCategory {
    Quarterback,
    RunningBack,
    Receiver,
}

impl PlayerCategory {
    pub const ALL: [PlayerCategory; 3] = [
        PlayerCategory::Quarterback,
        PlayerCategory::RunningBack,
        PlayerCategory::Receiver,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayerCategory::Quarterback => "Quarterback",
            PlayerCategory::RunningBack => "Running Back",
            PlayerCategory::Receiver => "Receiver",
        }
    }
}

impl fmt::Display for PlayerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick the strictly dominant yardage type. Passing is checked first, then
/// rushing; any tie (including all zeros) falls through to `Receiver`.
pub fn classify(totals: &YardageTotals) -> PlayerCategory {
    if totals.passing > totals.rushing && totals.passing > totals.receiving {
        PlayerCategory::Quarterback
    } else if totals.rushing > totals.passing && totals.rushing > totals.receiving {
        PlayerCategory::RunningBack
    } else {
        PlayerCategory::Receiver
    }
}

/// Classify every player from career totals.
pub fn classify_careers(
    careers: &BTreeMap<String, CareerAggregate>,
) -> BTreeMap<String, PlayerCategory> {
    careers
        .iter()
        .map(|(player, career)| (player.clone(), classify(&career.yardage())))
        .collect()
}
