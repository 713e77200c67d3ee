//! Sporting fixtures as delivered by the odds provider.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::id::FixtureId;
use super::quote::BookmakerQuoteSet;
use super::sequencer::MATCH_RESULT_MARKET;

/// How long after kickoff a fixture is treated as in play.
const LIVE_WINDOW_HOURS: i64 = 2;

/// A fixture with the bookmaker prices quoted for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub sport_key: String,
    #[serde(default)]
    pub sport_title: String,
    pub commence_time: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<BookmakerQuoteSet>,
}

impl Fixture {
    /// True when at least one bookmaker quoted this fixture.
    #[must_use]
    pub fn has_odds(&self) -> bool {
        !self.bookmakers.is_empty()
    }

    /// True from kickoff until the live window closes.
    #[must_use]
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now >= self.commence_time
            && now <= self.commence_time + Duration::hours(LIVE_WINDOW_HOURS)
    }

    /// True when kickoff is not past and falls within `days` of `now`.
    ///
    /// A window reaching past the representable calendar has no upper bound.
    #[must_use]
    pub fn within_days(&self, now: DateTime<Utc>, days: i64) -> bool {
        self.commence_time >= now
            && window_end(now, days).map_or(true, |end| self.commence_time <= end)
    }

    /// Countdown to kickoff: `"Started"`, `"2d 3h"`, or `"5h 12m"`.
    #[must_use]
    pub fn time_until_kickoff(&self, now: DateTime<Utc>) -> String {
        let remaining = self.commence_time - now;
        if remaining < Duration::zero() {
            return "Started".to_string();
        }

        let hours = remaining.num_hours();
        let minutes = remaining.num_minutes() % 60;
        if hours > 24 {
            return format!("{}d {}h", hours / 24, hours % 24);
        }
        format!("{hours}h {minutes}m")
    }

    /// Display label for an outcome of this fixture.
    ///
    /// Match-result outcomes named after a team gain a `(Home)`/`(Away)`
    /// suffix; totals outcomes keep the side and the first token after it.
    #[must_use]
    pub fn outcome_label(&self, market_key: &str, name: &str) -> String {
        outcome_label(&self.home_team, &self.away_team, market_key, name)
    }

    /// Lightweight view without prices.
    #[must_use]
    pub fn summary(&self) -> FixtureSummary {
        FixtureSummary {
            id: self.id.clone(),
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            commence_time: self.commence_time,
            has_odds: self.has_odds(),
        }
    }
}

/// Fixture identity and kickoff, as listed in fixture menus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureSummary {
    pub id: FixtureId,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
    pub has_odds: bool,
}

impl FixtureSummary {
    /// Display label for an outcome; see [`Fixture::outcome_label`].
    #[must_use]
    pub fn outcome_label(&self, market_key: &str, name: &str) -> String {
        outcome_label(&self.home_team, &self.away_team, market_key, name)
    }
}

/// End of a look-ahead window of `days` from `now`.
///
/// Returns `None` when the end lies beyond the representable calendar.
#[must_use]
pub fn window_end(now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|span| now.checked_add_signed(span))
}

fn outcome_label(home: &str, away: &str, market_key: &str, name: &str) -> String {
    if market_key == MATCH_RESULT_MARKET {
        if name == home {
            return format!("{name} (Home)");
        }
        if name == away {
            return format!("{name} (Away)");
        }
    }

    if market_key == "totals" {
        for side in ["Over", "Under"] {
            if name.contains(side) {
                return match name.split_whitespace().nth(1) {
                    Some(line) => format!("{side} {line}"),
                    None => side.to_string(),
                };
            }
        }
    }

    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::fixture;
    use chrono::TimeZone;

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 14, 0, 0).unwrap()
    }

    #[test]
    fn is_live_within_two_hours_of_kickoff() {
        let f = fixture("f1", "Arsenal", "Chelsea", kickoff(), vec![]);
        assert!(!f.is_live(kickoff() - Duration::minutes(1)));
        assert!(f.is_live(kickoff()));
        assert!(f.is_live(kickoff() + Duration::hours(2)));
        assert!(!f.is_live(kickoff() + Duration::hours(2) + Duration::seconds(1)));
    }

    #[test]
    fn time_until_kickoff_formats() {
        let f = fixture("f1", "Arsenal", "Chelsea", kickoff(), vec![]);
        assert_eq!(f.time_until_kickoff(kickoff() + Duration::minutes(5)), "Started");
        assert_eq!(
            f.time_until_kickoff(kickoff() - Duration::minutes(5 * 60 + 12)),
            "5h 12m"
        );
        assert_eq!(
            f.time_until_kickoff(kickoff() - Duration::hours(51)),
            "2d 3h"
        );
        assert_eq!(f.time_until_kickoff(kickoff() - Duration::hours(24)), "24h 0m");
    }

    #[test]
    fn within_days_excludes_past_and_far_future() {
        let f = fixture("f1", "Arsenal", "Chelsea", kickoff(), vec![]);
        assert!(f.within_days(kickoff() - Duration::days(3), 7));
        assert!(!f.within_days(kickoff() - Duration::days(8), 7));
        assert!(!f.within_days(kickoff() + Duration::minutes(1), 7));
    }

    #[test]
    fn within_days_with_huge_window_has_no_upper_bound() {
        let f = fixture("f1", "Arsenal", "Chelsea", kickoff(), vec![]);
        let now = kickoff() - Duration::days(3);
        assert!(f.within_days(now, i64::from(u32::MAX)));
        assert!(f.within_days(now, i64::MAX));
        assert!(!f.within_days(kickoff() + Duration::minutes(1), i64::MAX));
    }

    #[test]
    fn window_end_saturates_to_none() {
        assert_eq!(window_end(kickoff(), 7), Some(kickoff() + Duration::days(7)));
        assert_eq!(window_end(kickoff(), i64::from(u32::MAX)), None);
        assert_eq!(window_end(kickoff(), i64::MAX), None);
    }

    #[test]
    fn outcome_labels() {
        let f = fixture("f1", "Arsenal", "Chelsea", kickoff(), vec![]);
        assert_eq!(f.outcome_label("h2h", "Arsenal"), "Arsenal (Home)");
        assert_eq!(f.outcome_label("h2h", "Chelsea"), "Chelsea (Away)");
        assert_eq!(f.outcome_label("h2h", "Draw"), "Draw");
        assert_eq!(f.outcome_label("totals", "Over 2.5 goals"), "Over 2.5");
        assert_eq!(f.outcome_label("totals", "Under"), "Under");
        assert_eq!(f.outcome_label("spreads", "Arsenal"), "Arsenal");
    }

    #[test]
    fn summary_reports_odds_presence() {
        let f = fixture("f1", "Arsenal", "Chelsea", kickoff(), vec![]);
        let summary = f.summary();
        assert_eq!(summary.id.as_str(), "f1");
        assert!(!summary.has_odds);
        assert_eq!(summary.outcome_label("h2h", "Arsenal"), "Arsenal (Home)");
    }

    #[test]
    fn deserializes_provider_event() {
        let json = r#"{
            "id": "e912304de2b2ce35b473ce2ecd3d1502",
            "sport_key": "soccer_epl",
            "sport_title": "EPL",
            "commence_time": "2026-10-18T14:00:00Z",
            "home_team": "Arsenal",
            "away_team": "Chelsea"
        }"#;
        let f: Fixture = serde_json::from_str(json).unwrap();
        assert_eq!(f.commence_time, kickoff());
        assert!(f.bookmakers.is_empty());
    }
}
