//! CTF Tracker network client
//!
//! Session identity, credential persistence, and fire-and-forget position
//! reporting with a pinned server certificate.

pub mod auth;
pub mod beacon;
pub mod logging;
pub mod storage;
pub mod sync;
pub mod tls;

use std::path::Path;

use tracing::{debug, error};

use auth::SessionManager;
use beacon::Beacon;
use storage::PrefStore;
use sync::{ApiClient, PositionReport};

/// Storage key for the persisted team id.
pub const TEAM_ID_KEY: &str = "teamID";

/// Client facade owned by the application lifecycle. One instance per
/// process; pass it by reference wherever positions are reported.
pub struct SessionClient {
    session: SessionManager,
    store: PrefStore,
    api: ApiClient,
}

impl SessionClient {
    /// Create the client and restore any persisted identity.
    ///
    /// `cert_path` points at the DER certificate bundled with the app, used
    /// to pin the API host.
    pub fn new(cert_path: &Path) -> Self {
        Self::with_store(PrefStore::new(), cert_path)
    }

    /// Same, with an explicit preference store.
    pub fn with_store(store: PrefStore, cert_path: &Path) -> Self {
        let mut session = SessionManager::new();

        match store.load::<i64>(TEAM_ID_KEY) {
            Ok(team_id) => session.restore(team_id),
            Err(_) => debug!("No stored team id"),
        }

        Self {
            session,
            store,
            api: ApiClient::new(cert_path),
        }
    }

    /// Check if currently logged in.
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn team_id(&self) -> Option<i64> {
        self.session.session().team_id
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.session().user_id
    }

    /// Log in. Always succeeds; a storage failure is logged and does not
    /// fail the login.
    pub fn log_in(&mut self, team_id: i64, user_id: i64) -> bool {
        self.session.set(team_id, user_id);

        if let Err(e) = self.store.save(TEAM_ID_KEY, &team_id) {
            error!("Failed to persist team id: {}", e);
        }

        true
    }

    /// Log out and forget the persisted team id. Always succeeds.
    pub fn log_out(&mut self) -> bool {
        self.session.clear();

        if let Err(e) = self.store.delete(TEAM_ID_KEY) {
            error!("Failed to remove persisted team id: {}", e);
        }

        true
    }

    /// Report the device position and nearby beacons.
    ///
    /// Silent no-op when logged out. Otherwise the request is dispatched to
    /// the background runtime and nothing is reported back to the caller.
    pub fn send_observation(&self, latitude: f64, longitude: f64, beacons: &[Beacon]) {
        let Some((team_id, user_id)) = self.session.session().credentials() else {
            return;
        };

        let report = PositionReport::new(latitude, longitude, beacons);
        self.api.send_position(team_id, user_id, &report);
    }
}
