//! Session-based authentication.
//!
//! Sessions are opaque UUID tokens carried in the `sessionid` cookie and
//! resolved against an in-process store. There is no global mutable auth
//! state: each handler receives the authenticated identity for its own
//! request via the [`SessionIdentity`] extractor and nothing else.
//!
//! Passwords are stored as salted SHA-256 digests and compared in
//! constant time.

use std::collections::HashMap;
use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sessionid";

/// In-process session store: opaque token → username.
///
/// Cheap to clone; all clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, String>>>,
}

impl SessionStore {
    /// Establish a session for `username` and return its token.
    pub fn create(&self, username: &str) -> Uuid {
        let token = Uuid::new_v4();
        self.inner.write().insert(token, username.to_string());
        token
    }

    /// Resolve a token to the username it was issued for.
    pub fn resolve(&self, token: Uuid) -> Option<String> {
        self.inner.read().get(&token).cloned()
    }

    /// Terminate a session. Revoking an unknown token is a no-op.
    pub fn revoke(&self, token: Uuid) {
        self.inner.write().remove(&token);
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

/// `Set-Cookie` value establishing a session.
pub fn session_cookie(token: Uuid) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value clearing the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extract the session token from the request's `Cookie` headers.
pub fn session_token(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (name, token) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then_some(token)
        })
        .find_map(|token| Uuid::parse_str(token).ok())
}

/// Per-request authenticated identity, if any.
///
/// Extraction never fails: an absent or stale cookie yields `None` and the
/// handler decides how to respond (the proxied endpoints answer with their
/// own in-body status contract rather than a generic 401).
#[derive(Debug, Clone)]
pub struct SessionIdentity(pub Option<String>);

impl SessionIdentity {
    /// The authenticated username, if a live session was presented.
    pub fn username(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SessionIdentity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = session_token(&parts.headers).and_then(|token| state.sessions.resolve(token));
        Ok(Self(identity))
    }
}

/// Generate a fresh random salt.
pub fn new_salt() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Salted SHA-256 password digest, hex-encoded.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex_encode(&hasher.finalize())
}

/// Constant-time check of a candidate password against a stored digest.
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    let candidate = hash_password(password, salt);
    candidate.as_bytes().ct_eq(expected_hash.as_bytes()).into()
}

fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}
