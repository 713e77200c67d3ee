//! The Odds API REST client.
//!
//! Fixtures and prices both come from the `/sports/{sport}/odds` endpoint,
//! which returns each event together with its bookmakers. Every response
//! carries the account's remaining request credits in headers, which are
//! logged.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::HeaderMap;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use super::settings::OddsApiConfig;
use crate::domain::{window_end, BookmakerKey, Fixture, FixtureId, MATCH_RESULT_MARKET};
use crate::error::{ConfigError, ProviderError, Result};
use crate::port::OddsSource;

const REQUESTS_REMAINING: &str = "x-requests-remaining";
const REQUESTS_USED: &str = "x-requests-used";

/// Query for the odds endpoint.
#[derive(Debug, Clone, Default)]
pub struct OddsQuery<'a> {
    /// Comma-separated market keys.
    pub markets: &'a str,
    /// Restrict to a single event.
    pub event_id: Option<&'a FixtureId>,
    /// Restrict to these bookmakers; empty means all in the region.
    pub bookmakers: &'a [BookmakerKey],
    /// Restrict kickoff to `[from, to]`; without `to` the window is open-ended.
    pub commence_window: Option<(DateTime<Utc>, Option<DateTime<Utc>>)>,
}

/// HTTP client for The Odds API (v4).
pub struct OddsApiClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    sport: String,
    regions: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl OddsApiClient {
    /// Build a client from provider settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when no API key was supplied.
    pub fn from_config(config: &OddsApiConfig) -> Result<Self> {
        let api_key = match config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => {
                return Err(ConfigError::MissingField {
                    field: "ODDS_API_KEY",
                }
                .into())
            }
        };

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            sport: config.sport.clone(),
            regions: config.regions.clone(),
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        })
    }

    /// Build the odds endpoint URL for a query.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`](crate::error::Error::Url) if the configured base URL is malformed.
    pub fn odds_url(&self, query: &OddsQuery<'_>) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/sports/{}/odds", self.base_url, self.sport))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("apiKey", &self.api_key)
                .append_pair("regions", &self.regions)
                .append_pair("markets", query.markets)
                .append_pair("oddsFormat", "decimal")
                .append_pair("dateFormat", "iso");

            if let Some(event_id) = query.event_id {
                pairs.append_pair("eventIds", event_id.as_str());
            }
            if !query.bookmakers.is_empty() {
                let keys: Vec<&str> = query.bookmakers.iter().map(BookmakerKey::as_str).collect();
                pairs.append_pair("bookmakers", &keys.join(","));
            }
            if let Some((from, to)) = query.commence_window {
                pairs.append_pair(
                    "commenceTimeFrom",
                    &from.to_rfc3339_opts(SecondsFormat::Secs, true),
                );
                if let Some(to) = to {
                    pairs.append_pair(
                        "commenceTimeTo",
                        &to.to_rfc3339_opts(SecondsFormat::Secs, true),
                    );
                }
            }
        }
        Ok(url)
    }

    /// Fetch events with bookmaker prices.
    pub async fn get_odds(&self, query: &OddsQuery<'_>) -> Result<Vec<Fixture>> {
        let url = self.odds_url(query)?;

        info!(
            endpoint = url.path(),
            markets = query.markets,
            event = query.event_id.map(FixtureId::as_str),
            "Fetching odds"
        );

        let fixtures: Vec<Fixture> = self.get_with_retry(url).await?;
        debug!(count = fixtures.len(), "Fetched fixtures");

        Ok(fixtures)
    }

    async fn get_with_retry<T>(&self, url: Url) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    let err = err.without_url();
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            Self::log_credits(response.headers());

            let status = response.status();
            if !status.is_success() {
                return Err(ProviderError::Status {
                    endpoint: url.path().to_string(),
                    status,
                }
                .into());
            }

            match response.json::<T>().await {
                Ok(parsed) => return Ok(parsed),
                Err(err) => {
                    let err = err.without_url();
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }

    fn log_credits(headers: &HeaderMap) {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
        if let Some(remaining) = header(REQUESTS_REMAINING) {
            info!(
                remaining,
                used = header(REQUESTS_USED).unwrap_or("unknown"),
                "Odds API credits"
            );
        }
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn fixtures(&self, days: u32) -> Result<Vec<Fixture>> {
        let now = Utc::now();
        let query = OddsQuery {
            markets: MATCH_RESULT_MARKET,
            commence_window: Some((now, window_end(now, i64::from(days)))),
            ..OddsQuery::default()
        };
        self.get_odds(&query).await
    }

    async fn fixture_odds(
        &self,
        fixture_id: &FixtureId,
        market_key: &str,
        bookmakers: &[BookmakerKey],
    ) -> Result<Option<Fixture>> {
        let query = OddsQuery {
            markets: market_key,
            event_id: Some(fixture_id),
            bookmakers,
            commence_window: None,
        };
        let fixtures = self.get_odds(&query).await?;
        Ok(fixtures.into_iter().find(|f| &f.id == fixture_id))
    }

    fn source_name(&self) -> &'static str {
        "The Odds API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::TimeZone;

    fn client() -> OddsApiClient {
        let config = OddsApiConfig {
            base_url: "https://odds.example.test/v4/".into(),
            api_key: Some("secret".into()),
            ..OddsApiConfig::default()
        };
        OddsApiClient::from_config(&config).unwrap()
    }

    fn query_value(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn requires_api_key() {
        let result = OddsApiClient::from_config(&OddsApiConfig::default());
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "ODDS_API_KEY"
            }))
        ));
    }

    #[test]
    fn odds_url_carries_required_parameters() {
        let url = client()
            .odds_url(&OddsQuery {
                markets: "h2h",
                ..OddsQuery::default()
            })
            .unwrap();

        assert_eq!(url.path(), "/v4/sports/soccer_epl/odds");
        assert_eq!(query_value(&url, "apiKey").as_deref(), Some("secret"));
        assert_eq!(query_value(&url, "regions").as_deref(), Some("au"));
        assert_eq!(query_value(&url, "markets").as_deref(), Some("h2h"));
        assert_eq!(query_value(&url, "oddsFormat").as_deref(), Some("decimal"));
        assert!(query_value(&url, "eventIds").is_none());
        assert!(query_value(&url, "bookmakers").is_none());
    }

    #[test]
    fn odds_url_filters_event_and_bookmakers() {
        let event = FixtureId::from("abc123");
        let books = [BookmakerKey::from("tab"), BookmakerKey::from("neds")];
        let url = client()
            .odds_url(&OddsQuery {
                markets: "totals",
                event_id: Some(&event),
                bookmakers: &books,
                commence_window: None,
            })
            .unwrap();

        assert_eq!(query_value(&url, "eventIds").as_deref(), Some("abc123"));
        assert_eq!(query_value(&url, "bookmakers").as_deref(), Some("tab,neds"));
    }

    #[test]
    fn odds_url_formats_commence_window() {
        let from = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2026, 10, 25, 9, 30, 0).unwrap();
        let url = client()
            .odds_url(&OddsQuery {
                markets: "h2h",
                commence_window: Some((from, Some(to))),
                ..OddsQuery::default()
            })
            .unwrap();

        assert_eq!(
            query_value(&url, "commenceTimeFrom").as_deref(),
            Some("2026-10-18T09:30:00Z")
        );
        assert_eq!(
            query_value(&url, "commenceTimeTo").as_deref(),
            Some("2026-10-25T09:30:00Z")
        );
    }

    #[test]
    fn open_ended_commence_window_omits_upper_bound() {
        let from = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let url = client()
            .odds_url(&OddsQuery {
                markets: "h2h",
                commence_window: Some((from, window_end(from, i64::from(u32::MAX)))),
                ..OddsQuery::default()
            })
            .unwrap();

        assert_eq!(
            query_value(&url, "commenceTimeFrom").as_deref(),
            Some("2026-10-18T09:30:00Z")
        );
        assert_eq!(query_value(&url, "commenceTimeTo"), None);
    }

    #[test]
    fn malformed_base_url_is_an_error() {
        let config = OddsApiConfig {
            base_url: "not a url".into(),
            api_key: Some("secret".into()),
            ..OddsApiConfig::default()
        };
        let client = OddsApiClient::from_config(&config).unwrap();
        assert!(matches!(
            client.odds_url(&OddsQuery::default()),
            Err(Error::Url(_))
        ));
    }
}
