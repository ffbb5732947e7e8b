//! API Sync Module
//!
//! Fire-and-forget position reporting to the CTF backend.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::beacon::{self, Beacon};
use crate::tls::{evaluate_server_trust, file_cert_loader, Challenge, TrustDecision};

/// Base URL of the CTF backend.
const API_BASE: &str = "https://michalgalka.pl:5000";

/// API client for the CTF backend.
///
/// Owns a dedicated single-worker runtime; sends are dispatched onto it and
/// never report back to the caller.
pub struct ApiClient {
    client: Option<reqwest::Client>,
    runtime: tokio::runtime::Runtime,
}

impl ApiClient {
    /// Create a client pinned to the bundled DER certificate at `cert_path`.
    ///
    /// If the certificate cannot be loaded or parsed, the client stays
    /// connectionless and every send aborts at the trust step.
    pub fn new(cert_path: &Path) -> Self {
        let base = reqwest::Url::parse(API_BASE).expect("API base URL is valid");
        let host = base.host_str().unwrap_or_default();

        let client = match evaluate_server_trust(
            host,
            Challenge::ServerTrust,
            file_cert_loader(cert_path),
        ) {
            TrustDecision::Accept(der) => Self::build_pinned(&der),
            TrustDecision::Cancel => None,
            TrustDecision::UseDefault => Self::build_default(),
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to create background runtime");

        Self { client, runtime }
    }

    /// Report a position. Errors are logged; nothing is surfaced to the
    /// caller and nothing is retried.
    pub fn send_position(&self, team_id: i64, user_id: i64, report: &PositionReport) {
        let Some(client) = self.client.clone() else {
            error!("Connection aborted: no trusted certificate for {}", API_BASE);
            return;
        };

        let url = position_url(team_id, user_id);

        let body = match serde_json::to_string(report) {
            Ok(body) => body,
            Err(e) => {
                error!("JSON serialization error: {}", e);
                return;
            }
        };

        info!("{}: {}", url, body);

        self.runtime.spawn(async move {
            match client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
            {
                Ok(response) => match response.json::<serde_json::Value>().await {
                    Ok(json) => debug!("response: {}", json),
                    Err(e) => error!("Response JSON error: {}", e),
                },
                Err(e) => debug!("Position report not delivered: {}", e),
            }
        });
    }

    fn build_pinned(der: &[u8]) -> Option<reqwest::Client> {
        let cert = match reqwest::Certificate::from_der(der) {
            Ok(cert) => cert,
            Err(e) => {
                error!("Rejected pinned certificate: {}", e);
                return None;
            }
        };

        let builder = reqwest::Client::builder()
            .add_root_certificate(cert)
            .tls_built_in_root_certs(false);

        match builder.build() {
            Ok(client) => Some(client),
            Err(e) => {
                error!("Failed to create HTTP client: {}", e);
                None
            }
        }
    }

    fn build_default() -> Option<reqwest::Client> {
        match reqwest::Client::builder().build() {
            Ok(client) => Some(client),
            Err(e) => {
                error!("Failed to create HTTP client: {}", e);
                None
            }
        }
    }
}

/// Outgoing observation body.
#[derive(Debug, Serialize)]
pub struct PositionReport {
    pub lat: f64,
    pub lon: f64,
    pub beacons: Vec<&'static str>,
}

impl PositionReport {
    /// Build a report from raw coordinates and observed beacons. Beacons
    /// without a wire name are dropped, order preserved.
    pub fn new(lat: f64, lon: f64, beacons: &[Beacon]) -> Self {
        Self {
            lat,
            lon,
            beacons: beacon::wire_names(beacons),
        }
    }
}

fn position_url(team_id: i64, user_id: i64) -> String {
    format!("{}/api/ctf/pos/{}/{}", API_BASE, team_id, user_id)
}
