use crate::nhl::LiveFeed;
use crate::rink;

// The only events that get plotted on the shotmap.
const MAPPED_EVENTS: [&str; 3] = ["SHOT", "MISSED_SHOT", "GOAL"];

/// One shot attempt in rink feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotEvent {
    pub x: f64,
    pub y: f64,
}

/// Shot attempts split per side, each normalized to its own end of the rink.
#[derive(Debug, Default)]
pub struct ShotReport {
    pub home: Vec<ShotEvent>,
    pub away: Vec<ShotEvent>,
}

impl ShotReport {
    pub fn total(&self) -> usize {
        self.home.len() + self.away.len()
    }
}

pub fn extract(feed: &LiveFeed) -> ShotReport {
    let home_team = &feed.game_data.teams.home.name;
    let mut report = ShotReport::default();

    for play in &feed.live_data.plays.all_plays {
        let event_type = play.result.event_type_id.as_str();
        if !MAPPED_EVENTS.contains(&event_type) {
            continue;
        }

        let Some(team) = &play.team else { continue };
        let Some(coordinates) = &play.coordinates else {
            continue;
        };
        let (Some(mut x), Some(mut y)) = (coordinates.x, coordinates.y) else {
            continue;
        };

        // The density estimator requires finite inputs.
        if !x.is_finite() || !y.is_finite() {
            continue;
        }

        // Teams swap ends every period; mirror even periods so each team
        // always attacks the same net.
        if play.about.period % 2 == 0 {
            x = -x;
            y = -y;
        }

        // Off-rink coordinates are feed noise, unless the play was a goal.
        if event_type != "GOAL" && (x.abs() > rink::X_EXTENT || y.abs() > rink::Y_EXTENT) {
            continue;
        }

        if team.name == *home_team {
            // Home attempts plot on the positive-x end.
            if x < 0.0 {
                x = -x;
                y = -y;
            }
            report.home.push(ShotEvent { x, y });
        } else {
            // Away attempts plot on the negative-x end.
            if x > 0.0 {
                x = -x;
                y = -y;
            }
            report.away.push(ShotEvent { x, y });
        }
    }

    report
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nhl::test::sample_feed;
    use serde_json::json;

    fn play(event: &str, period: i32, team: &str, x: f64, y: f64) -> serde_json::Value {
        json!({
            "result": { "eventTypeId": event },
            "about": { "period": period },
            "coordinates": { "x": x, "y": y },
            "team": { "name": team }
        })
    }

    const HOME: &str = "New Jersey Devils";
    const AWAY: &str = "Washington Capitals";

    #[test]
    fn keeps_only_shot_attempt_events() {
        let feed = sample_feed(
            "Live",
            Some("1st"),
            (0, 0),
            json!([
                play("SHOT", 1, HOME, 60.0, 10.0),
                play("MISSED_SHOT", 1, HOME, 55.0, -8.0),
                play("GOAL", 1, AWAY, -80.0, 2.0),
                play("HIT", 1, HOME, 30.0, 30.0),
                play("FACEOFF", 1, AWAY, 0.0, 0.0),
                play("BLOCKED_SHOT", 1, AWAY, -40.0, 12.0),
            ]),
        );

        let report = extract(&feed);
        assert_eq!(report.home.len(), 2);
        assert_eq!(report.away.len(), 1);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn skips_plays_without_coordinates() {
        let feed = sample_feed(
            "Live",
            Some("1st"),
            (0, 0),
            json!([
                {
                    "result": { "eventTypeId": "SHOT" },
                    "about": { "period": 1 },
                    "team": { "name": HOME }
                },
                {
                    "result": { "eventTypeId": "SHOT" },
                    "about": { "period": 1 },
                    "coordinates": { "x": 12.0 },
                    "team": { "name": HOME }
                }
            ]),
        );

        assert_eq!(extract(&feed).total(), 0);
    }

    #[test]
    fn mirrors_even_period_coordinates() {
        let feed = sample_feed(
            "Live",
            Some("2nd"),
            (0, 0),
            json!([play("SHOT", 2, HOME, -62.0, 15.0)]),
        );

        // Mirrored once for the period swap, landing on the home end.
        let report = extract(&feed);
        assert_eq!(report.home, vec![ShotEvent { x: 62.0, y: -15.0 }]);
    }

    #[test]
    fn drops_off_rink_non_goal_events() {
        let feed = sample_feed(
            "Live",
            Some("1st"),
            (1, 0),
            json!([
                play("SHOT", 1, HOME, 120.0, 10.0),
                play("SHOT", 1, HOME, 50.0, 44.0),
                play("GOAL", 1, HOME, 120.0, 10.0),
            ]),
        );

        // Both wild shots are discarded; the goal survives the bounds check.
        let report = extract(&feed);
        assert_eq!(report.home, vec![ShotEvent { x: 120.0, y: 10.0 }]);
    }

    #[test]
    fn normalizes_each_side_to_its_own_end() {
        let feed = sample_feed(
            "Live",
            Some("1st"),
            (0, 0),
            json!([
                play("SHOT", 1, HOME, -70.0, 20.0),
                play("SHOT", 1, AWAY, 70.0, 20.0),
            ]),
        );

        let report = extract(&feed);
        assert_eq!(report.home, vec![ShotEvent { x: 70.0, y: -20.0 }]);
        assert_eq!(report.away, vec![ShotEvent { x: -70.0, y: -20.0 }]);
    }

    #[test]
    fn empty_feed_yields_empty_report() {
        let feed = sample_feed("Preview", None, (0, 0), json!([]));
        let report = extract(&feed);

        assert!(report.home.is_empty());
        assert!(report.away.is_empty());
    }
}
