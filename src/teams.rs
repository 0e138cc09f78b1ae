//! Static directory of MLB clubs and venue aliases
//!
//! Schedule items are looked up here by abbreviation (`BOS`) or by venue alias
//! (`FENWAY`). The feed identifies teams only by numeric id, so the directory is
//! also the bridge from feed ids to abbreviations and local timezones.

use chrono_tz::America;
use chrono_tz::Tz;
use serde::Serialize;

/// Display colors for a rendered schedule, as `#RRGGBB` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamColors {
    pub background: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
}

/// One entry of the directory.
///
/// A venue alias shares `id`, `abbreviation` and `time_zone` with its club but
/// carries its own `key` and colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Team {
    /// Name the entry is requested by and the output file is named after
    pub key: &'static str,
    /// Numeric team id used by the schedule feed
    pub id: u32,
    /// Club abbreviation used to match feed games
    pub abbreviation: &'static str,
    pub name: &'static str,
    /// Calendar days for this team are counted in this timezone
    pub time_zone: Tz,
    pub colors: TeamColors,
}

impl Team {
    /// True for venue aliases such as `FENWAY`.
    pub fn is_venue(&self) -> bool {
        self.key != self.abbreviation
    }
}

const fn club(
    id: u32,
    abbreviation: &'static str,
    name: &'static str,
    time_zone: Tz,
    colors: [&'static str; 3],
) -> Team {
    Team {
        key: abbreviation,
        id,
        abbreviation,
        name,
        time_zone,
        colors: TeamColors {
            background: colors[0],
            accent: colors[1],
            text: colors[2],
        },
    }
}

static CLUBS: [Team; 30] = [
    club(108, "LAA", "Los Angeles Angels", America::Los_Angeles, ["#BA0021", "#003263", "#C4CED4"]),
    club(109, "ARI", "Arizona Diamondbacks", America::Phoenix, ["#A71930", "#E3D4AD", "#FFFFFF"]),
    club(110, "BAL", "Baltimore Orioles", America::New_York, ["#DF4601", "#000000", "#FFFFFF"]),
    club(111, "BOS", "Boston Red Sox", America::New_York, ["#BD3039", "#0C2340", "#FFFFFF"]),
    club(112, "CHC", "Chicago Cubs", America::Chicago, ["#0E3386", "#CC3433", "#FFFFFF"]),
    club(113, "CIN", "Cincinnati Reds", America::New_York, ["#C6011F", "#000000", "#FFFFFF"]),
    club(114, "CLE", "Cleveland Guardians", America::New_York, ["#0C2340", "#E31937", "#FFFFFF"]),
    club(115, "COL", "Colorado Rockies", America::Denver, ["#33006F", "#C4CED4", "#C4CED4"]),
    club(116, "DET", "Detroit Tigers", America::New_York, ["#0C2340", "#FA4616", "#FFFFFF"]),
    club(117, "HOU", "Houston Astros", America::Chicago, ["#002D62", "#EB6E1F", "#FFFFFF"]),
    club(118, "KC", "Kansas City Royals", America::Chicago, ["#004687", "#BD9B60", "#FFFFFF"]),
    club(119, "LAD", "Los Angeles Dodgers", America::Los_Angeles, ["#005A9C", "#EF3E42", "#FFFFFF"]),
    club(120, "WSH", "Washington Nationals", America::New_York, ["#AB0003", "#14225A", "#FFFFFF"]),
    club(121, "NYM", "New York Mets", America::New_York, ["#002D72", "#FF5910", "#FFFFFF"]),
    club(133, "OAK", "Oakland Athletics", America::Los_Angeles, ["#003831", "#EFB21E", "#FFFFFF"]),
    club(134, "PIT", "Pittsburgh Pirates", America::New_York, ["#27251F", "#FDB827", "#FFFFFF"]),
    club(135, "SD", "San Diego Padres", America::Los_Angeles, ["#2F241D", "#FFC425", "#FFFFFF"]),
    club(136, "SEA", "Seattle Mariners", America::Los_Angeles, ["#0C2C56", "#005C5C", "#C4CED4"]),
    club(137, "SF", "San Francisco Giants", America::Los_Angeles, ["#FD5A1E", "#27251F", "#FFFFFF"]),
    club(138, "STL", "St. Louis Cardinals", America::Chicago, ["#C41E3A", "#FEDB00", "#FFFFFF"]),
    club(139, "TB", "Tampa Bay Rays", America::New_York, ["#092C5C", "#8FBCE6", "#F5D130"]),
    club(140, "TEX", "Texas Rangers", America::Chicago, ["#003278", "#C0111F", "#FFFFFF"]),
    club(141, "TOR", "Toronto Blue Jays", America::New_York, ["#134A8E", "#E8291C", "#FFFFFF"]),
    club(142, "MIN", "Minnesota Twins", America::Chicago, ["#002B5C", "#D31145", "#FFFFFF"]),
    club(143, "PHI", "Philadelphia Phillies", America::New_York, ["#E81828", "#002D72", "#FFFFFF"]),
    club(144, "ATL", "Atlanta Braves", America::New_York, ["#13274F", "#CE1141", "#FFFFFF"]),
    club(145, "CWS", "Chicago White Sox", America::Chicago, ["#27251F", "#C4CED4", "#FFFFFF"]),
    club(146, "MIA", "Miami Marlins", America::New_York, ["#000000", "#00A3E0", "#FFFFFF"]),
    club(147, "NYY", "New York Yankees", America::New_York, ["#003087", "#E4002C", "#FFFFFF"]),
    club(158, "MIL", "Milwaukee Brewers", America::Chicago, ["#12284B", "#FFC52F", "#FFFFFF"]),
];

static VENUES: [Team; 1] = [Team {
    key: "FENWAY",
    id: 111,
    abbreviation: "BOS",
    name: "Boston Red Sox",
    time_zone: America::New_York,
    colors: TeamColors {
        background: "#4F7359",
        accent: "#E0E0E0",
        text: "#E0E0E0",
    },
}];

/// Looks up a club by abbreviation or a venue by alias, case-insensitively.
///
/// # Example
/// ```
/// use baseball_schedule::teams::lookup_team;
///
/// let fenway = lookup_team("fenway").unwrap();
/// assert_eq!(fenway.abbreviation, "BOS");
/// assert!(lookup_team("XYZ").is_none());
/// ```
pub fn lookup_team(name: &str) -> Option<&'static Team> {
    let name = name.trim();
    CLUBS
        .iter()
        .chain(VENUES.iter())
        .find(|team| team.key.eq_ignore_ascii_case(name))
}

/// Looks up a club by the numeric id used in the schedule feed.
pub fn lookup_team_by_id(id: u32) -> Option<&'static Team> {
    CLUBS.iter().find(|team| team.id == id)
}

/// All clubs, without venue aliases.
pub fn all_teams() -> &'static [Team] {
    &CLUBS
}

/// All venue aliases.
pub fn all_venues() -> &'static [Team] {
    &VENUES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_directory_has_unique_clubs() {
        let ids: HashSet<u32> = all_teams().iter().map(|t| t.id).collect();
        let abbreviations: HashSet<&str> = all_teams().iter().map(|t| t.abbreviation).collect();
        assert_eq!(ids.len(), 30);
        assert_eq!(abbreviations.len(), 30);
        assert!(all_teams().iter().all(|t| !t.is_venue()));
    }

    #[test]
    fn test_lookup_by_abbreviation_is_case_insensitive() {
        let team = lookup_team("sea").unwrap();
        assert_eq!(team.abbreviation, "SEA");
        assert_eq!(team.id, 136);
        assert_eq!(team.time_zone, America::Los_Angeles);

        assert_eq!(lookup_team(" NYY ").unwrap().id, 147);
    }

    #[test]
    fn test_lookup_venue_alias() {
        let fenway = lookup_team("FENWAY").unwrap();
        assert!(fenway.is_venue());
        assert_eq!(fenway.key, "FENWAY");
        assert_eq!(fenway.abbreviation, "BOS");
        assert_ne!(fenway.colors, lookup_team("BOS").unwrap().colors);
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(lookup_team_by_id(114).unwrap().abbreviation, "CLE");
        assert_eq!(lookup_team_by_id(158).unwrap().abbreviation, "MIL");
        assert!(lookup_team_by_id(999).is_none());
    }

    #[test]
    fn test_venue_aliases_point_at_clubs() {
        for venue in all_venues() {
            let club = lookup_team_by_id(venue.id).unwrap();
            assert_eq!(club.abbreviation, venue.abbreviation);
            assert_eq!(club.time_zone, venue.time_zone);
        }
    }

    #[test]
    fn test_unknown_names() {
        assert!(lookup_team("").is_none());
        assert!(lookup_team("Boston").is_none());
    }
}
