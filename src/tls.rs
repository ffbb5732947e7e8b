//! Server Trust Module
//!
//! Certificate pinning for the API host. Trust evaluation is a pure
//! function over an injected certificate loader, so the policy can be
//! tested without a network stack.

use std::io;
use std::path::Path;
use tracing::warn;

/// Host whose TLS trust is pinned to the bundled certificate.
pub const PINNED_HOST: &str = "michalgalka.pl";

/// Kind of authentication challenge raised by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Challenge {
    /// The transport is validating the server's certificate chain.
    ServerTrust,
    /// Any other authentication method.
    Other,
}

/// Outcome of evaluating an authentication challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustDecision {
    /// Trust exactly this DER-encoded certificate as the sole anchor.
    Accept(Vec<u8>),
    /// Abort the connection attempt.
    Cancel,
    /// Defer to the platform trust store.
    UseDefault,
}

/// Decide how to resolve an authentication challenge for `host`.
///
/// Only server-trust challenges are explicitly handled. For the pinned host
/// the loaded certificate becomes the sole anchor; any loader failure
/// cancels the connection. Every other host keeps default trust handling,
/// without touching the loader.
pub fn evaluate_server_trust<F>(host: &str, challenge: Challenge, load_cert: F) -> TrustDecision
where
    F: FnOnce() -> io::Result<Vec<u8>>,
{
    if challenge != Challenge::ServerTrust {
        return TrustDecision::UseDefault;
    }

    if host != PINNED_HOST {
        return TrustDecision::UseDefault;
    }

    match load_cert() {
        Ok(der) => TrustDecision::Accept(der),
        Err(e) => {
            warn!("Pinned certificate for {} unavailable: {}", host, e);
            TrustDecision::Cancel
        }
    }
}

/// Loader for the DER certificate bundled at `path`.
pub fn file_cert_loader(path: &Path) -> impl FnOnce() -> io::Result<Vec<u8>> + '_ {
    move || std::fs::read(path)
}
