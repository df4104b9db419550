//! tests/store_tests.rs
//! Pruebas de `SqliteTrackingStore` contra un archivo SQLite real.

use chrono::{Duration, Utc};
use futures_util::future::join_all;

use super::sqlite_store;
use crate::errors::StoreError;
use crate::services::id_generator::new_tracking_id;
use crate::services::tracking_store::TrackingStore;

#[actix_rt::test]
async fn create_then_lookup_returns_unopened_record() {
    let (_dir, store) = sqlite_store().await;
    let id = new_tracking_id();
    let created_at = Utc::now();

    store
        .create(&id, "a@example.com", "Hello", created_at)
        .await
        .unwrap();

    let rec = store.lookup(&id).await.unwrap();
    assert_eq!(rec.id, id);
    assert_eq!(rec.recipient_email, "a@example.com");
    assert_eq!(rec.subject, "Hello");
    assert_eq!(rec.created_at, created_at);
    assert!(rec.opened_at.is_none());
    assert!(rec.client_ip.is_none());
    assert!(rec.client_user_agent.is_none());
}

#[actix_rt::test]
async fn lookup_unknown_id_is_not_found() {
    let (_dir, store) = sqlite_store().await;
    let err = store.lookup("no-existe").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[actix_rt::test]
async fn duplicate_id_is_rejected() {
    let (_dir, store) = sqlite_store().await;
    let id = new_tracking_id();

    store.create(&id, "a@example.com", "Uno", Utc::now()).await.unwrap();
    let err = store
        .create(&id, "b@example.com", "Dos", Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey));

    // El original queda intacto
    let rec = store.lookup(&id).await.unwrap();
    assert_eq!(rec.subject, "Uno");
}

#[actix_rt::test]
async fn first_open_wins() {
    let (_dir, store) = sqlite_store().await;
    let id = new_tracking_id();
    store.create(&id, "a@example.com", "Hello", Utc::now()).await.unwrap();

    let t1 = Utc::now();
    let t2 = t1 + Duration::minutes(5);

    let first = store
        .record_open_if_unset(&id, t1, "1.2.3.4", "UA1")
        .await
        .unwrap();
    let second = store
        .record_open_if_unset(&id, t2, "5.6.7.8", "UA2")
        .await
        .unwrap();
    assert!(first);
    assert!(!second);

    let rec = store.lookup(&id).await.unwrap();
    assert_eq!(rec.opened_at, Some(t1));
    assert_eq!(rec.client_ip.as_deref(), Some("1.2.3.4"));
    assert_eq!(rec.client_user_agent.as_deref(), Some("UA1"));
}

#[actix_rt::test]
async fn earlier_timestamp_does_not_overwrite_later_first_open() {
    // Gana el primero en escribir, no el timestamp más antiguo
    let (_dir, store) = sqlite_store().await;
    let id = new_tracking_id();
    store.create(&id, "a@example.com", "Hello", Utc::now()).await.unwrap();

    let late = Utc::now();
    let early = late - Duration::hours(1);

    store.record_open_if_unset(&id, late, "1.1.1.1", "A").await.unwrap();
    store.record_open_if_unset(&id, early, "2.2.2.2", "B").await.unwrap();

    let rec = store.lookup(&id).await.unwrap();
    assert_eq!(rec.opened_at, Some(late));
    assert_eq!(rec.client_ip.as_deref(), Some("1.1.1.1"));
}

#[actix_rt::test]
async fn open_on_unknown_id_is_a_silent_noop() {
    let (_dir, store) = sqlite_store().await;

    let applied = store
        .record_open_if_unset("fantasma", Utc::now(), "1.2.3.4", "UA")
        .await
        .unwrap();
    assert!(!applied);

    let err = store.lookup("fantasma").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[actix_rt::test]
async fn concurrent_opens_write_exactly_once() {
    let (_dir, store) = sqlite_store().await;
    let id = new_tracking_id();
    store.create(&id, "a@example.com", "Hello", Utc::now()).await.unwrap();

    let base = Utc::now();
    let n = 16;
    let attempts = (0..n).map(|i| {
        let store = store.clone();
        let id = id.clone();
        async move {
            store
                .record_open_if_unset(
                    &id,
                    base + Duration::seconds(i),
                    &format!("10.0.0.{i}"),
                    &format!("UA{i}"),
                )
                .await
        }
    });

    let results = join_all(attempts).await;
    let applied = results
        .into_iter()
        .map(|r| r.expect("Open should not fail"))
        .filter(|applied| *applied)
        .count();
    assert_eq!(applied, 1);

    // IP, user agent y timestamp salen de la misma llamada
    let rec = store.lookup(&id).await.unwrap();
    let ip = rec.client_ip.expect("ip should be set");
    let winner: i64 = ip.trim_start_matches("10.0.0.").parse().unwrap();
    assert!((0..n).contains(&winner));
    assert_eq!(rec.opened_at, Some(base + Duration::seconds(winner)));
    assert_eq!(rec.client_user_agent, Some(format!("UA{winner}")));
}

#[actix_rt::test]
async fn opens_on_different_ids_are_independent() {
    let (_dir, store) = sqlite_store().await;
    let a = new_tracking_id();
    let b = new_tracking_id();
    store.create(&a, "a@example.com", "A", Utc::now()).await.unwrap();
    store.create(&b, "b@example.com", "B", Utc::now()).await.unwrap();

    assert!(store.record_open_if_unset(&a, Utc::now(), "1.1.1.1", "UA").await.unwrap());

    assert!(store.lookup(&a).await.unwrap().opened_at.is_some());
    assert!(store.lookup(&b).await.unwrap().opened_at.is_none());
}
