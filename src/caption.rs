use crate::nhl::GameSummary;

pub struct Team {
    pub abbreviation: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub hashtag: &'static str,
}

const TEAMS: [Team; 31] = [
    Team { abbreviation: "NJD", name: "New Jersey Devils", short_name: "Devils", hashtag: "#NJDevils" },
    Team { abbreviation: "NYI", name: "New York Islanders", short_name: "Islanders", hashtag: "#Isles" },
    Team { abbreviation: "NYR", name: "New York Rangers", short_name: "Rangers", hashtag: "#NYR" },
    Team { abbreviation: "PHI", name: "Philadelphia Flyers", short_name: "Flyers", hashtag: "#FlyOrDie" },
    Team { abbreviation: "PIT", name: "Pittsburgh Penguins", short_name: "Penguins", hashtag: "#LetsGoPens" },
    Team { abbreviation: "BOS", name: "Boston Bruins", short_name: "Bruins", hashtag: "#NHLBruins" },
    Team { abbreviation: "BUF", name: "Buffalo Sabres", short_name: "Sabres", hashtag: "#Sabres50" },
    Team { abbreviation: "MTL", name: "Montréal Canadiens", short_name: "Canadiens", hashtag: "#GoHabsGo" },
    Team { abbreviation: "OTT", name: "Ottawa Senators", short_name: "Senators", hashtag: "#GoSensGo" },
    Team { abbreviation: "TOR", name: "Toronto Maple Leafs", short_name: "Maple Leafs", hashtag: "#LeafsForever" },
    Team { abbreviation: "CAR", name: "Carolina Hurricanes", short_name: "Hurricanes", hashtag: "#LetsGoCanes" },
    Team { abbreviation: "FLA", name: "Florida Panthers", short_name: "Panthers", hashtag: "#FLAPanthers" },
    Team { abbreviation: "TBL", name: "Tampa Bay Lightning", short_name: "Lightning", hashtag: "#GoBolts" },
    Team { abbreviation: "WSH", name: "Washington Capitals", short_name: "Capitals", hashtag: "#ALLCAPS" },
    Team { abbreviation: "CHI", name: "Chicago Blackhawks", short_name: "Blackhawks", hashtag: "#Blackhawks" },
    Team { abbreviation: "DET", name: "Detroit Red Wings", short_name: "Red Wings", hashtag: "#LGRW" },
    Team { abbreviation: "NSH", name: "Nashville Predators", short_name: "Predators", hashtag: "#Preds" },
    Team { abbreviation: "STL", name: "St. Louis Blues", short_name: "Blues", hashtag: "#STLBlues" },
    Team { abbreviation: "CGY", name: "Calgary Flames", short_name: "Flames", hashtag: "#Flames" },
    Team { abbreviation: "COL", name: "Colorado Avalanche", short_name: "Avalanche", hashtag: "#GoAvsGo" },
    Team { abbreviation: "EDM", name: "Edmonton Oilers", short_name: "Oilers", hashtag: "#LetsGoOilers" },
    Team { abbreviation: "VAN", name: "Vancouver Canucks", short_name: "Canucks", hashtag: "#Canucks" },
    Team { abbreviation: "ANA", name: "Anaheim Ducks", short_name: "Ducks", hashtag: "#LetsGoDucks" },
    Team { abbreviation: "DAL", name: "Dallas Stars", short_name: "Stars", hashtag: "#GoStars" },
    Team { abbreviation: "LAK", name: "Los Angeles Kings", short_name: "Kings", hashtag: "#GoKingsGo" },
    Team { abbreviation: "SJS", name: "San Jose Sharks", short_name: "Sharks", hashtag: "#SJSharks" },
    Team { abbreviation: "CBJ", name: "Columbus Blue Jackets", short_name: "Blue Jackets", hashtag: "#CBJ" },
    Team { abbreviation: "MIN", name: "Minnesota Wild", short_name: "Wild", hashtag: "#MNWild" },
    Team { abbreviation: "WPG", name: "Winnipeg Jets", short_name: "Jets", hashtag: "#GoJetsGo" },
    Team { abbreviation: "ARI", name: "Arizona Coyotes", short_name: "Coyotes", hashtag: "#Yotes" },
    Team { abbreviation: "VGK", name: "Vegas Golden Knights", short_name: "Golden Knights", hashtag: "#VegasBorn" },
];

pub fn team(abbreviation: &str) -> Option<&'static Team> {
    // The feed still uses dotted abbreviations for a few teams.
    let abbreviation = match abbreviation {
        "L.A" => "LAK",
        "N.J" => "NJD",
        "S.J" => "SJS",
        "T.B" => "TBL",
        other => other,
    };

    TEAMS.iter().find(|team| team.abbreviation == abbreviation)
}

pub fn build(game_id: &str, summary: &GameSummary) -> String {
    let (Some(home), Some(away)) = (team(&summary.home_abbr), team(&summary.away_abbr)) else {
        return format!("Shotmap for game {game_id}.");
    };

    let game_hashtag = format!("#{}vs{}", away.abbreviation, home.abbreviation);

    if summary.home_goals == summary.away_goals {
        return format!(
            "At the end of the {} period, the {} & {} are tied at {}.\n\n{}",
            summary.period_ordinal, home.short_name, away.short_name, summary.home_goals, game_hashtag
        );
    }

    let game_status = if summary.game_end {
        "game".to_string()
    } else {
        format!("{} period", summary.period_ordinal)
    };
    let lead_trail_status = match (summary.home_goals > summary.away_goals, summary.game_end) {
        (true, true) => "defeat",
        (true, false) => "lead",
        (false, true) => "lose to",
        (false, false) => "trail",
    };

    format!(
        "At the end of the {} the {} {} the {} by a score of {} to {}.\n\n{} {} {}",
        game_status,
        home.short_name,
        lead_trail_status,
        away.short_name,
        summary.home_goals,
        summary.away_goals,
        home.hashtag,
        away.hashtag,
        game_hashtag
    )
}

pub fn alt_text(summary: &GameSummary) -> String {
    match (team(&summary.home_abbr), team(&summary.away_abbr)) {
        (Some(home), Some(away)) => {
            format!("Shot density map for {} vs. {}", away.name, home.name)
        }
        _ => format!(
            "Shot density map for {} vs. {}",
            summary.away_abbr, summary.home_abbr
        ),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn summary(
        home_abbr: &str,
        away_abbr: &str,
        goals: (u32, u32),
        period_ordinal: &str,
        game_end: bool,
    ) -> GameSummary {
        GameSummary {
            home_abbr: home_abbr.to_string(),
            away_abbr: away_abbr.to_string(),
            home_goals: goals.0,
            away_goals: goals.1,
            period_ordinal: period_ordinal.to_string(),
            game_end,
        }
    }

    #[test]
    fn corrects_dotted_abbreviations() {
        assert_eq!(team("L.A").unwrap().abbreviation, "LAK");
        assert_eq!(team("T.B").unwrap().short_name, "Lightning");
        assert!(team("XXX").is_none());
    }

    #[test]
    fn tied_game_caption() {
        let caption = build("2018020020", &summary("NJD", "WSH", (2, 2), "2nd", false));

        assert_eq!(
            caption,
            "At the end of the 2nd period, the Devils & Capitals are tied at 2.\n\n#WSHvsNJD"
        );
    }

    #[test]
    fn home_lead_caption() {
        let caption = build("2018020020", &summary("NJD", "WSH", (3, 1), "2nd", false));

        assert_eq!(
            caption,
            "At the end of the 2nd period the Devils lead the Capitals by a score of 3 to 1.\
             \n\n#NJDevils #ALLCAPS #WSHvsNJD"
        );
    }

    #[test]
    fn final_score_captions() {
        let win = build("2018020020", &summary("NJD", "WSH", (4, 2), "3rd", true));
        assert!(win.contains("the Devils defeat the Capitals by a score of 4 to 2"));
        assert!(win.contains("end of the game"));

        let loss = build("2018020020", &summary("NJD", "WSH", (1, 5), "3rd", true));
        assert!(loss.contains("the Devils lose to the Capitals by a score of 1 to 5"));
    }

    #[test]
    fn trailing_home_team_caption() {
        let caption = build("2018020020", &summary("NJD", "WSH", (0, 2), "1st", false));
        assert!(caption.contains("the Devils trail the Capitals"));
    }

    #[test]
    fn unknown_team_falls_back_to_game_id() {
        let caption = build("2018020020", &summary("???", "WSH", (0, 0), "1st", false));
        assert_eq!(caption, "Shotmap for game 2018020020.");
    }

    #[test]
    fn alt_text_names_both_teams() {
        let alt = alt_text(&summary("NJD", "WSH", (0, 0), "1st", false));
        assert_eq!(
            alt,
            "Shot density map for Washington Capitals vs. New Jersey Devils"
        );
    }
}
