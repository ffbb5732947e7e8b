//! Session lifecycle tests against a real preference store.

use std::path::PathBuf;

use ctf_tracker::beacon::Beacon;
use ctf_tracker::storage::PrefStore;
use ctf_tracker::{SessionClient, TEAM_ID_KEY};

fn client_at(dir: &std::path::Path) -> SessionClient {
    SessionClient::with_store(PrefStore::at(dir.to_path_buf()), &cert_path(dir))
}

fn cert_path(dir: &std::path::Path) -> PathBuf {
    dir.join("cert.der")
}

#[test]
fn fresh_store_starts_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let client = client_at(dir.path());

    assert!(!client.is_logged_in());
    assert_eq!(client.team_id(), None);
    assert_eq!(client.user_id(), None);
}

#[test]
fn login_sets_identity_and_persists_team_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut client = client_at(dir.path());

    assert!(client.log_in(42, 7));
    assert!(client.is_logged_in());
    assert_eq!(client.team_id(), Some(42));
    assert_eq!(client.user_id(), Some(7));

    let store = PrefStore::at(dir.path().to_path_buf());
    assert!(store.exists(TEAM_ID_KEY));
    assert_eq!(store.load::<i64>(TEAM_ID_KEY).unwrap(), 42);
}

#[test]
fn restart_restores_team_id_with_placeholder_user() {
    let dir = tempfile::tempdir().unwrap();

    let mut client = client_at(dir.path());
    client.log_in(42, 7);
    drop(client);

    // A fresh process only gets the team id back; the user id is the
    // fixed placeholder, not the 7 supplied at login.
    let restored = client_at(dir.path());
    assert!(restored.is_logged_in());
    assert_eq!(restored.team_id(), Some(42));
    assert_eq!(restored.user_id(), Some(1));
}

#[test]
fn relogin_overwrites_persisted_team_id() {
    let dir = tempfile::tempdir().unwrap();

    let mut client = client_at(dir.path());
    client.log_in(1, 1);
    client.log_in(9, 3);
    drop(client);

    let restored = client_at(dir.path());
    assert_eq!(restored.team_id(), Some(9));
}

#[test]
fn logout_clears_identity_and_storage() {
    let dir = tempfile::tempdir().unwrap();

    let mut client = client_at(dir.path());
    client.log_in(42, 7);
    assert!(client.log_out());
    assert!(!client.is_logged_in());

    let store = PrefStore::at(dir.path().to_path_buf());
    assert!(!store.exists(TEAM_ID_KEY));

    // A fresh initialize finds no session.
    let restored = client_at(dir.path());
    assert!(!restored.is_logged_in());
}

#[test]
fn logout_without_login_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let mut client = client_at(dir.path());

    assert!(client.log_out());
    assert!(!client.is_logged_in());
}

#[test]
fn observation_without_session_is_a_silent_noop() {
    let dir = tempfile::tempdir().unwrap();
    let client = client_at(dir.path());

    client.send_observation(50.06, 19.94, &[Beacon::Bc1, Beacon::Bc2]);
    assert!(!client.is_logged_in());
}
