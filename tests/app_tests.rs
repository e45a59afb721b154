//! End-to-end flows through the orchestration layer with port doubles.

mod support;

use std::time::Duration;

use chrono::Local;

use quotidian::app::App;
use quotidian::domain::{QuoteId, SelectionPolicy};
use quotidian::widget::WidgetStyle;
use support::{catalog, CaptureRender, MemorySource, MemoryStore};

const TTL: Duration = Duration::from_secs(24 * 3600);

fn app(source: MemorySource, store: MemoryStore) -> App<MemorySource, MemoryStore> {
    App::new(
        source,
        store,
        SelectionPolicy::NoRepeatRandom,
        WidgetStyle::default(),
        TTL,
    )
}

#[tokio::test]
async fn fetch_failure_without_a_cache_renders_the_placeholder() {
    let app = app(MemorySource::failing(), MemoryStore::new());
    let render = CaptureRender::new();

    let quote = app.refresh(false, Local::now(), &render).await.unwrap();

    assert_eq!(quote.quote, "Stay hungry, stay foolish.");
    assert_eq!(quote.attribution, "Steve Jobs");
    assert_eq!(render.rendered().len(), 1);
}

#[tokio::test]
async fn a_successful_fetch_is_persisted_to_the_cache() {
    let store = MemoryStore::new();
    let app = app(MemorySource::serving(catalog(5)), store);
    let render = CaptureRender::new();

    let quote = app.refresh(false, Local::now(), &render).await.unwrap();

    assert!(quote.id.is_some());
    let cached = app_store(&app).cached_catalog().unwrap();
    assert_eq!(cached.len(), 5);
}

#[tokio::test]
async fn a_fresh_cache_short_circuits_the_fetch() {
    let store = MemoryStore::new().with_cached_catalog(catalog(5), Duration::from_secs(60));
    let app = app(MemorySource::serving(catalog(5)), store);

    app.refresh(false, Local::now(), &CaptureRender::new()).await.unwrap();

    assert_eq!(app_source(&app).fetch_count(), 0);
}

#[tokio::test]
async fn a_stale_cache_triggers_a_refetch() {
    let store = MemoryStore::new().with_cached_catalog(catalog(5), Duration::from_secs(25 * 3600));
    let app = app(MemorySource::serving(catalog(5)), store);

    app.refresh(false, Local::now(), &CaptureRender::new()).await.unwrap();

    assert_eq!(app_source(&app).fetch_count(), 1);
}

#[tokio::test]
async fn force_bypasses_even_a_fresh_cache() {
    let store = MemoryStore::new().with_cached_catalog(catalog(5), Duration::from_secs(60));
    let app = app(MemorySource::serving(catalog(5)), store);

    app.refresh(true, Local::now(), &CaptureRender::new()).await.unwrap();

    assert_eq!(app_source(&app).fetch_count(), 1);
}

#[tokio::test]
async fn stale_cache_is_served_when_the_fetch_fails() {
    let store = MemoryStore::new().with_cached_catalog(catalog(5), Duration::from_secs(48 * 3600));
    let app = app(MemorySource::failing(), store);

    let quote = app.refresh(false, Local::now(), &CaptureRender::new()).await.unwrap();

    assert!(quote.quote.starts_with("quote "), "expected a catalog quote, got {:?}", quote.quote);
}

#[tokio::test]
async fn two_refreshes_on_the_same_day_show_the_same_quote() {
    let store = MemoryStore::new().with_cached_catalog(catalog(20), Duration::from_secs(60));
    let app = app(MemorySource::serving(catalog(20)), store);
    let now = Local::now();

    let first = app.refresh(false, now, &CaptureRender::new()).await.unwrap();
    let used_after_first = app_store(&app).used_ids();
    let second = app.refresh(false, now, &CaptureRender::new()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(app_store(&app).used_ids(), used_after_first);
}

#[tokio::test]
async fn forced_refresh_rolls_a_different_quote() {
    let store = MemoryStore::new().with_cached_catalog(catalog(20), Duration::from_secs(60));
    let app = app(MemorySource::serving(catalog(20)), store);
    let now = Local::now();

    let first = app.refresh(false, now, &CaptureRender::new()).await.unwrap();
    let second = app.refresh(true, now, &CaptureRender::new()).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(app_store(&app).used_ids().len(), 2);
}

#[tokio::test]
async fn persistence_failure_still_renders_the_selection() {
    let store = MemoryStore::new().with_cached_catalog(catalog(5), Duration::from_secs(60));
    store.fail_writes();
    let app = app(MemorySource::serving(catalog(5)), store);
    let render = CaptureRender::new();

    let quote = app.refresh(false, Local::now(), &render).await.unwrap();

    assert!(quote.id.is_some());
    assert_eq!(render.rendered().len(), 1);
}

#[tokio::test]
async fn usage_report_matches_the_store() {
    let used = vec![QuoteId::new(2), QuoteId::new(4), QuoteId::new(6)];
    let store = MemoryStore::new()
        .with_cached_catalog(catalog(10), Duration::from_secs(60))
        .with_used_ids(used);
    let app = app(MemorySource::serving(catalog(10)), store);

    let report = app.usage_report();

    assert_eq!(report.summary.total, 10);
    assert_eq!(report.summary.used, 3);
    assert_eq!(report.summary.remaining, 7);
    assert_eq!(report.summary.percent_used(), "30.0%");
    assert_eq!(report.used.len(), 3);
    assert_eq!(report.remaining.len(), 7);
    assert!(report.used.iter().all(|(_, q)| q.is_some()));
}

#[tokio::test]
async fn usage_report_marks_orphaned_ids() {
    let store = MemoryStore::new()
        .with_cached_catalog(catalog(3), Duration::from_secs(60))
        .with_used_ids(vec![QuoteId::new(1), QuoteId::new(42)]);
    let app = app(MemorySource::serving(catalog(3)), store);

    let report = app.usage_report();

    assert_eq!(report.summary.used, 1);
    let orphan = report.used.iter().find(|(id, _)| *id == QuoteId::new(42)).unwrap();
    assert!(orphan.1.is_none());
}

#[tokio::test]
async fn reset_clears_the_cycle() {
    let store = MemoryStore::new()
        .with_cached_catalog(catalog(3), Duration::from_secs(60))
        .with_used_ids(vec![QuoteId::new(1), QuoteId::new(2)]);
    let app = app(MemorySource::serving(catalog(3)), store);

    assert_eq!(app.reset_used_ids().unwrap(), 2);
    assert!(app_store(&app).used_ids().is_empty());
}

// App owns its ports; these helpers reach them for assertions.
fn app_store<'a>(app: &'a App<MemorySource, MemoryStore>) -> &'a MemoryStore {
    app.store()
}

fn app_source<'a>(app: &'a App<MemorySource, MemoryStore>) -> &'a MemorySource {
    app.source()
}
