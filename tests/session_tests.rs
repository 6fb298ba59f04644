mod common;

use common::{probe_response, FakeBackend};
use gosearch_web::session::SessionStore;
use gosearch_web::types::{SessionStatus, Settings};
use rstest::rstest;

#[test]
fn test_probe_reports_signed_in_user() {
    let backend = FakeBackend::signed_in("manoj", Settings::default());
    let mut store = SessionStore::new();

    let ticket = store.begin_probe();
    store.probe_resolved(ticket, backend.who_am_i());

    assert_eq!(store.status(), &SessionStatus::authenticated("manoj"));
}

#[rstest]
#[case(500, r#"{"error":"boom"}"#)]
#[case(502, "Bad Gateway")]
#[case(401, "")]
#[case(200, "not json")]
fn test_failed_probe_is_anonymous(#[case] status: u16, #[case] body: &str) {
    let mut store = SessionStore::new();
    let first = store.begin_probe();
    store.probe_resolved(first, Ok(SessionStatus::authenticated("manoj")));

    let second = store.begin_probe();
    store.probe_resolved(second, probe_response(status, body));

    assert_eq!(
        store.status(),
        &SessionStatus {
            is_authenticated: false,
            username: String::new()
        }
    );
}

#[test]
fn test_unreachable_backend_is_anonymous() {
    let backend = FakeBackend::unreachable();
    let mut store = SessionStore::new();

    let ticket = store.begin_probe();
    store.probe_resolved(ticket, backend.who_am_i());

    assert_eq!(store.status(), &SessionStatus::anonymous());
}

#[test]
fn test_reprobe_after_server_side_logout() {
    let mut backend = FakeBackend::signed_in("manoj", Settings::default());
    let mut store = SessionStore::new();

    let ticket = store.begin_probe();
    store.probe_resolved(ticket, backend.who_am_i());
    assert!(store.status().is_authenticated);

    backend.expire_session();
    let ticket = store.begin_probe();
    store.probe_resolved(ticket, backend.who_am_i());
    assert_eq!(store.status(), &SessionStatus::anonymous());
}

#[test]
fn test_local_logout_needs_no_probe() {
    let mut backend = FakeBackend::signed_in("manoj", Settings::default());
    let mut store = SessionStore::new();
    let ticket = store.begin_probe();
    store.probe_resolved(ticket, backend.who_am_i());

    assert!(store.logout_resolved(backend.logout()));
    assert_eq!(store.status(), &SessionStatus::anonymous());
}

#[test]
fn test_logout_against_unreachable_backend_stays_signed_in() {
    let backend = FakeBackend::signed_in("manoj", Settings::default());
    let mut store = SessionStore::new();
    let ticket = store.begin_probe();
    store.probe_resolved(ticket, backend.who_am_i());

    let mut broken = FakeBackend::unreachable();
    assert!(!store.logout_resolved(broken.logout()));
    assert_eq!(store.status(), &SessionStatus::authenticated("manoj"));
}
