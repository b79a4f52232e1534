//! NFL team registry
//!
//! The fixed list of selectable teams, sorted by display name, plus lookup
//! by abbreviation. Everything here is compile-time data.

use phf::phf_map;
use std::fmt;

/// NFL conference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conference {
    Afc,
    Nfc,
}

impl Conference {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Afc => "AFC",
            Self::Nfc => "NFC",
        }
    }

    pub fn all() -> [Self; 2] {
        [Self::Afc, Self::Nfc]
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Division within a conference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    North,
    South,
    East,
    West,
}

impl Division {
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::North, Self::South, Self::East, Self::West]
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single team record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Team {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub conference: Conference,
    pub division: Division,
}

const fn team(
    name: &'static str,
    abbreviation: &'static str,
    conference: Conference,
    division: Division,
) -> Team {
    Team {
        name,
        abbreviation,
        conference,
        division,
    }
}

use Conference::{Afc, Nfc};
use Division::{East, North, South, West};

/// All 32 teams, sorted by name
static TEAMS: [Team; 32] = [
    team("Arizona Cardinals", "ARI", Nfc, West),
    team("Atlanta Falcons", "ATL", Nfc, South),
    team("Baltimore Ravens", "BAL", Afc, North),
    team("Buffalo Bills", "BUF", Afc, East),
    team("Carolina Panthers", "CAR", Nfc, South),
    team("Chicago Bears", "CHI", Nfc, North),
    team("Cincinnati Bengals", "CIN", Afc, North),
    team("Cleveland Browns", "CLE", Afc, North),
    team("Dallas Cowboys", "DAL", Nfc, East),
    team("Denver Broncos", "DEN", Afc, West),
    team("Detroit Lions", "DET", Nfc, North),
    team("Green Bay Packers", "GB", Nfc, North),
    team("Houston Texans", "HOU", Afc, South),
    team("Indianapolis Colts", "IND", Afc, South),
    team("Jacksonville Jaguars", "JAX", Afc, South),
    team("Kansas City Chiefs", "KC", Afc, West),
    team("Las Vegas Raiders", "LV", Afc, West),
    team("Los Angeles Chargers", "LAC", Afc, West),
    team("Los Angeles Rams", "LAR", Nfc, West),
    team("Miami Dolphins", "MIA", Afc, East),
    team("Minnesota Vikings", "MIN", Nfc, North),
    team("New England Patriots", "NE", Afc, East),
    team("New Orleans Saints", "NO", Nfc, South),
    team("New York Giants", "NYG", Nfc, East),
    team("New York Jets", "NYJ", Afc, East),
    team("Philadelphia Eagles", "PHI", Nfc, East),
    team("Pittsburgh Steelers", "PIT", Afc, North),
    team("San Francisco 49ers", "SF", Nfc, West),
    team("Seattle Seahawks", "SEA", Nfc, West),
    team("Tampa Bay Buccaneers", "TB", Nfc, South),
    team("Tennessee Titans", "TEN", Afc, South),
    team("Washington Commanders", "WAS", Nfc, East),
];

/// Abbreviation -> index into `TEAMS`
static BY_ABBREV: phf::Map<&'static str, usize> = phf_map! {
    "ARI" => 0,
    "ATL" => 1,
    "BAL" => 2,
    "BUF" => 3,
    "CAR" => 4,
    "CHI" => 5,
    "CIN" => 6,
    "CLE" => 7,
    "DAL" => 8,
    "DEN" => 9,
    "DET" => 10,
    "GB" => 11,
    "HOU" => 12,
    "IND" => 13,
    "JAX" => 14,
    "KC" => 15,
    "LV" => 16,
    "LAC" => 17,
    "LAR" => 18,
    "MIA" => 19,
    "MIN" => 20,
    "NE" => 21,
    "NO" => 22,
    "NYG" => 23,
    "NYJ" => 24,
    "PHI" => 25,
    "PIT" => 26,
    "SF" => 27,
    "SEA" => 28,
    "TB" => 29,
    "TEN" => 30,
    "WAS" => 31,
};

/// Every team in the registry, sorted by name
pub fn all() -> &'static [Team] {
    &TEAMS
}

/// Look up a team by its exact abbreviation (e.g. "BUF")
pub fn find(abbreviation: &str) -> Option<&'static Team> {
    BY_ABBREV.get(abbreviation).map(|&idx| &TEAMS[idx])
}

/// Position of a team in `all()`
pub fn index_of(abbreviation: &str) -> Option<usize> {
    BY_ABBREV.get(abbreviation).copied()
}

/// Teams in a conference, in name order
pub fn in_conference(conference: Conference) -> impl Iterator<Item = &'static Team> {
    TEAMS.iter().filter(move |t| t.conference == conference)
}

/// Teams in one division of a conference, in name order
pub fn in_division(
    conference: Conference,
    division: Division,
) -> impl Iterator<Item = &'static Team> {
    in_conference(conference).filter(move |t| t.division == division)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_32_teams() {
        assert_eq!(all().len(), 32);
    }

    #[test]
    fn test_registry_sorted_by_name() {
        for pair in all().windows(2) {
            assert!(
                pair[0].name < pair[1].name,
                "{} should sort before {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn test_abbreviations_and_names_unique() {
        let abbrevs: HashSet<_> = all().iter().map(|t| t.abbreviation).collect();
        let names: HashSet<_> = all().iter().map(|t| t.name).collect();
        assert_eq!(abbrevs.len(), 32);
        assert_eq!(names.len(), 32);
    }

    #[test]
    fn test_find_every_abbreviation() {
        for team in all() {
            let found = find(team.abbreviation).unwrap();
            assert_eq!(found.abbreviation, team.abbreviation);
            assert_eq!(found, team);
        }
    }

    #[test]
    fn test_index_map_matches_registry() {
        assert_eq!(BY_ABBREV.len(), TEAMS.len());
        for (idx, team) in all().iter().enumerate() {
            assert_eq!(index_of(team.abbreviation), Some(idx));
        }
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("").is_none());
        assert!(find("XYZ").is_none());
        // lookup is exact
        assert!(find("buf").is_none());
        assert!(find(" BUF").is_none());
    }

    #[test]
    fn test_find_known_teams() {
        assert_eq!(find("BUF").unwrap().name, "Buffalo Bills");
        assert_eq!(find("KC").unwrap().name, "Kansas City Chiefs");
        let sf = find("SF").unwrap();
        assert_eq!(sf.conference, Conference::Nfc);
        assert_eq!(sf.division, Division::West);
    }

    #[test]
    fn test_every_division_has_four_teams() {
        for conference in Conference::all() {
            assert_eq!(in_conference(conference).count(), 16);
            for division in Division::all() {
                assert_eq!(
                    in_division(conference, division).count(),
                    4,
                    "{} {}",
                    conference,
                    division
                );
            }
        }
    }

    #[test]
    fn test_in_division_keeps_name_order() {
        let names: Vec<_> = in_division(Conference::Afc, Division::East)
            .map(|t| t.abbreviation)
            .collect();
        assert_eq!(names, vec!["BUF", "MIA", "NE", "NYJ"]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Conference::Afc.to_string(), "AFC");
        assert_eq!(Division::West.to_string(), "West");
    }
}
