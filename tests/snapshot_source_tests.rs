mod support;

use oddsboard::adapter::outbound::SnapshotSource;
use oddsboard::application::ComparisonService;
use oddsboard::domain::{BookmakerKey, DomainError, FixtureId};
use oddsboard::error::{Error, ProviderError};
use oddsboard::port::OddsSource;
use oddsboard::testkit::domain::{fixed_time, fixture, priced_fixture};

use support::write_snapshot;

#[tokio::test]
async fn snapshot_round_trips_provider_schema() {
    let file = write_snapshot(&[priced_fixture("afc-cfc")]);
    let source = SnapshotSource::new(file.path());

    let fixtures = source.fixtures(7).await.unwrap();

    assert_eq!(fixtures, vec![priced_fixture("afc-cfc")]);
}

#[tokio::test]
async fn fixture_odds_filters_bookmakers() {
    let file = write_snapshot(&[priced_fixture("afc-cfc")]);
    let source = SnapshotSource::new(file.path());

    let fixture = source
        .fixture_odds(
            &FixtureId::from("afc-cfc"),
            "h2h",
            &[BookmakerKey::from("tab"), BookmakerKey::from("neds")],
        )
        .await
        .unwrap()
        .unwrap();

    let keys: Vec<_> = fixture.bookmakers.iter().map(|b| b.bookmaker.as_str()).collect();
    assert_eq!(keys, ["tab", "neds"]);
}

#[tokio::test]
async fn service_compares_from_snapshot() {
    let file = write_snapshot(&[
        fixture("other", "Spurs", "Wolves", fixed_time(), vec![]),
        priced_fixture("afc-cfc"),
    ]);
    let service = ComparisonService::new(SnapshotSource::new(file.path()));

    let result = service
        .compare(&FixtureId::from("afc-cfc"), "h2h", &[])
        .await
        .unwrap();

    let draw = &result.table.outcomes()[1];
    assert_eq!(draw.outcome(), "Draw");
    let tied: Vec<_> = draw.tied_bookmakers().iter().map(|k| k.as_str()).collect();
    assert_eq!(tied, ["tab", "neds"]);

    let margins = result.table.bookmaker_margins();
    assert_eq!(margins.len(), 3);
}

#[tokio::test]
async fn service_reports_missing_fixture() {
    let file = write_snapshot(&[priced_fixture("afc-cfc")]);
    let service = ComparisonService::new(SnapshotSource::new(file.path()));

    let err = service
        .compare(&FixtureId::from("missing"), "h2h", &[])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Domain(DomainError::FixtureNotFound { .. })
    ));
}

#[test]
fn missing_snapshot_file_is_a_provider_error() {
    let source = SnapshotSource::new("/nonexistent/snapshot.json");
    let err = tokio_test::block_on(source.fixtures(7)).unwrap_err();
    assert!(matches!(err, Error::Provider(ProviderError::Snapshot { .. })));
}

#[test]
fn malformed_snapshot_is_a_json_error() {
    let file = support::write_config("not json");
    let source = SnapshotSource::new(file.path());
    let err = tokio_test::block_on(source.fixtures(7)).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
