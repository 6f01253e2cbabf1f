// Franchise abbreviation table and team-name normalization.

/// Box-score team code -> franchise name. `OAK` is the pre-relocation code
/// for the Raiders and resolves to the current franchise.
const FRANCHISES: &[(&str, &str)] = &[
    ("ARI", "Arizona Cardinals"),
    ("ATL", "Atlanta Falcons"),
    ("BAL", "Baltimore Ravens"),
    ("BUF", "Buffalo Bills"),
    ("CAR", "Carolina Panthers"),
    ("CHI", "Chicago Bears"),
    ("CIN", "Cincinnati Bengals"),
    ("CLE", "Cleveland Browns"),
    ("DAL", "Dallas Cowboys"),
    ("DEN", "Denver Broncos"),
    ("DET", "Detroit Lions"),
    ("GNB", "Green Bay Packers"),
    ("HOU", "Houston Texans"),
    ("IND", "Indianapolis Colts"),
    ("JAX", "Jacksonville Jaguars"),
    ("KAN", "Kansas City Chiefs"),
    ("LAC", "Los Angeles Chargers"),
    ("LAR", "Los Angeles Rams"),
    ("LVR", "Las Vegas Raiders"),
    ("MIA", "Miami Dolphins"),
    ("MIN", "Minnesota Vikings"),
    ("NOR", "New Orleans Saints"),
    ("NWE", "New England Patriots"),
    ("NYG", "New York Giants"),
    ("NYJ", "New York Jets"),
    ("OAK", "Las Vegas Raiders"),
    ("PHI", "Philadelphia Eagles"),
    ("PIT", "Pittsburgh Steelers"),
    ("SEA", "Seattle Seahawks"),
    ("SFO", "San Francisco 49ers"),
    ("TAM", "Tampa Bay Buccaneers"),
    ("TEN", "Tennessee Titans"),
    ("WAS", "Washington Commanders"),
];

/// Codes that are historical aliases and never returned by `team_code`.
const ALIAS_CODES: &[&str] = &["OAK"];

/// Franchise name for a box-score team code, or `None` for unknown codes.
pub fn real_team(code: &str) -> Option<&'static str> {
    let code = code.trim();
    FRANCHISES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Current box-score code for a franchise name.
pub fn team_code(full_name: &str) -> Option<&'static str> {
    FRANCHISES
        .iter()
        .filter(|(c, _)| !ALIAS_CODES.contains(c))
        .find(|(_, name)| *name == full_name)
        .map(|(c, _)| *c)
}

/// Normalize a schedule nickname: the interim "Football Team" name is
/// reported as "Commanders" so schedule names line up with `real_team`.
pub fn normalize_nickname(name: &str) -> String {
    name.trim().replace("Football Team", "Commanders")
}

/// Join a schedule market and nickname into a franchise name.
pub fn franchise_name(market: &str, nickname: &str) -> String {
    format!("{} {}", market.trim(), normalize_nickname(nickname))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_franchises() {
        assert_eq!(real_team("KAN"), Some("Kansas City Chiefs"));
        assert_eq!(real_team("LVR"), Some("Las Vegas Raiders"));
        assert_eq!(real_team("OAK"), Some("Las Vegas Raiders"));
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(real_team("KC"), None);
        assert_eq!(real_team(""), None);
    }

    #[test]
    fn table_covers_32_franchises() {
        let mut names: Vec<&str> = FRANCHISES.iter().map(|(_, n)| *n).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 32);
    }

    #[test]
    fn reverse_lookup_prefers_current_code() {
        assert_eq!(team_code("Las Vegas Raiders"), Some("LVR"));
        assert_eq!(team_code("Kansas City Chiefs"), Some("KAN"));
        assert_eq!(team_code("Nowhere Nobodies"), None);
    }

    #[test]
    fn football_team_becomes_commanders() {
        assert_eq!(franchise_name("Washington", "Football Team"), "Washington Commanders");
        assert_eq!(franchise_name("Kansas City", "Chiefs"), "Kansas City Chiefs");
    }
}
