// Team-perspective view of completed games.
//
// Every completed game is re-expressed once per participant so a team's own
// score and its opponent's score can be read without caring which raw side
// (`tm_*` or `opp_*`) the team was listed on.

use std::collections::BTreeMap;

use crate::schedule::games::CompletedGame;

/// Win or loss from the searched team's perspective.
///
/// Only a strictly higher team score is a win; a tied score is recorded as a
/// loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
        }
    }
}

/// One completed game seen from `searched_team`'s side.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGame {
    pub searched_team: String,
    pub opponent_team: String,
    pub team_score: f64,
    pub opponent_score: f64,
    pub season: i32,
    pub week: u32,
    pub year_week: String,
}

impl NormalizedGame {
    pub fn outcome(&self) -> Outcome {
        if self.opponent_score - self.team_score < 0.0 {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

/// Both perspectives of one game: `[team1's view, team2's view]`.
pub fn perspectives(game: &CompletedGame) -> [NormalizedGame; 2] {
    [
        NormalizedGame {
            searched_team: game.team1.clone(),
            opponent_team: game.team2.clone(),
            team_score: game.team1_score,
            opponent_score: game.team2_score,
            season: game.season,
            week: game.week,
            year_week: game.year_week.clone(),
        },
        NormalizedGame {
            searched_team: game.team2.clone(),
            opponent_team: game.team1.clone(),
            team_score: game.team2_score,
            opponent_score: game.team1_score,
            season: game.season,
            week: game.week,
            year_week: game.year_week.clone(),
        },
    ]
}

/// Both perspectives of every game.
pub fn normalize_all(games: &[CompletedGame]) -> Vec<NormalizedGame> {
    games.iter().flat_map(perspectives).collect()
}

/// Both perspectives of every game that involves at least one of `teams`.
pub fn normalize_for(games: &[CompletedGame], teams: &[&str]) -> Vec<NormalizedGame> {
    games
        .iter()
        .filter(|g| teams.iter().any(|t| g.involves(t)))
        .flat_map(perspectives)
        .collect()
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Win/loss record and scoring averages for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub avg_scored: f64,
    pub avg_allowed: f64,
}

impl TeamRecord {
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Mean points scored minus mean points allowed.
    pub fn avg_differential(&self) -> f64 {
        self.avg_scored - self.avg_allowed
    }

    /// `"W-L"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

/// Records for every searched team in `normalized`.
pub fn team_records(normalized: &[NormalizedGame]) -> BTreeMap<String, TeamRecord> {
    #[derive(Default)]
    struct Acc {
        wins: u32,
        losses: u32,
        scored: f64,
        allowed: f64,
    }

    let mut accs: BTreeMap<String, Acc> = BTreeMap::new();
    for game in normalized {
        let acc = accs.entry(game.searched_team.clone()).or_default();
        match game.outcome() {
            Outcome::Win => acc.wins += 1,
            Outcome::Loss => acc.losses += 1,
        }
        acc.scored += game.team_score;
        acc.allowed += game.opponent_score;
    }

    accs.into_iter()
        .map(|(team, acc)| {
            let n = (acc.wins + acc.losses) as f64;
            let record = TeamRecord {
                team: team.clone(),
                wins: acc.wins,
                losses: acc.losses,
                avg_scored: acc.scored / n,
                avg_allowed: acc.allowed / n,
            };
            (team, record)
        })
        .collect()
}

/// Record for one team; `None` when the team has no games in `normalized`.
pub fn team_record(normalized: &[NormalizedGame], team: &str) -> Option<TeamRecord> {
    let own: Vec<NormalizedGame> = normalized
        .iter()
        .filter(|g| g.searched_team == team)
        .cloned()
        .collect();
    team_records(&own).remove(team)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(season: i32, week: u32, t1: &str, s1: f64, t2: &str, s2: f64) -> CompletedGame {
        CompletedGame {
            season,
            week,
            team1: t1.into(),
            team2: t2.into(),
            team1_score: s1,
            team2_score: s2,
            year_week: format!("{season}_{week:02}"),
        }
    }

    const KC: &str = "Kansas City Chiefs";
    const LV: &str = "Las Vegas Raiders";
    const BUF: &str = "Buffalo Bills";
    const MIA: &str = "Miami Dolphins";

    #[test]
    fn chiefs_raiders_example() {
        let games = vec![game(2024, 1, KC, 31.0, LV, 17.0)];
        let normalized = normalize_all(&games);
        assert_eq!(normalized.len(), 2);

        let kc = normalized.iter().find(|g| g.searched_team == KC).unwrap();
        assert_eq!(kc.opponent_team, LV);
        assert_eq!(kc.team_score, 31.0);
        assert_eq!(kc.opponent_score, 17.0);
        assert_eq!(kc.outcome(), Outcome::Win);

        let lv = normalized.iter().find(|g| g.searched_team == LV).unwrap();
        assert_eq!(lv.opponent_team, KC);
        assert_eq!(lv.team_score, 17.0);
        assert_eq!(lv.opponent_score, 31.0);
        assert_eq!(lv.outcome(), Outcome::Loss);
    }

    #[test]
    fn perspectives_are_symmetric() {
        let games = vec![
            game(2024, 1, KC, 31.0, LV, 17.0),
            game(2024, 2, BUF, 10.0, KC, 24.0),
            game(2024, 3, MIA, 21.0, BUF, 28.0),
        ];
        for g in &games {
            let [a, b] = perspectives(g);
            assert_eq!(a.opponent_team, b.searched_team);
            assert_eq!(b.opponent_team, a.searched_team);
            assert_eq!(a.team_score, b.opponent_score);
            assert_eq!(b.team_score, a.opponent_score);
            assert_eq!(a.year_week, b.year_week);
        }
    }

    #[test]
    fn team_on_opp_side_gets_swapped_scores() {
        let games = vec![game(2024, 2, BUF, 10.0, KC, 24.0)];
        let normalized = normalize_for(&games, &[KC]);
        let kc = normalized.iter().find(|g| g.searched_team == KC).unwrap();
        assert_eq!(kc.team_score, 24.0);
        assert_eq!(kc.opponent_score, 10.0);
        assert_eq!(kc.opponent_team, BUF);
    }

    #[test]
    fn normalize_for_keeps_only_games_touching_teams() {
        let games = vec![
            game(2024, 1, KC, 31.0, LV, 17.0),
            game(2024, 3, MIA, 21.0, BUF, 28.0),
        ];
        let normalized = normalize_for(&games, &[KC, LV]);
        assert_eq!(normalized.len(), 2);
        assert!(normalized.iter().all(|g| g.year_week == "2024_01"));
    }

    #[test]
    fn tie_counts_as_loss() {
        let games = vec![game(2024, 4, KC, 20.0, LV, 20.0)];
        let normalized = normalize_all(&games);
        assert!(normalized.iter().all(|g| g.outcome() == Outcome::Loss));
    }

    #[test]
    fn records_and_averages() {
        let games = vec![
            game(2024, 1, KC, 31.0, LV, 17.0),
            game(2024, 2, BUF, 10.0, KC, 24.0),
            game(2024, 3, KC, 13.0, MIA, 20.0),
        ];
        let normalized = normalize_all(&games);
        let kc = team_record(&normalized, KC).unwrap();
        assert_eq!(kc.wins, 2);
        assert_eq!(kc.losses, 1);
        assert_eq!(kc.label(), "2-1");
        assert!((kc.avg_scored - 68.0 / 3.0).abs() < 1e-9);
        assert!((kc.avg_allowed - 47.0 / 3.0).abs() < 1e-9);
        assert!((kc.avg_differential() - 7.0).abs() < 1e-9);

        let records = team_records(&normalized);
        assert_eq!(records.len(), 4);
        assert_eq!(records[LV].label(), "0-1");
    }

    #[test]
    fn team_without_games_has_no_record() {
        let games = vec![game(2024, 1, KC, 31.0, LV, 17.0)];
        let normalized = normalize_all(&games);
        assert!(team_record(&normalized, MIA).is_none());
    }
}
