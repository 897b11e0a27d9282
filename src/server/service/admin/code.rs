//! One-time admin registration codes.
//!
//! While no admin account exists the server prints a random code at startup. Registering
//! with that code grants the admin role. The code lives only in memory, expires after a
//! short TTL and is consumed by the first successful registration.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default time-to-live for admin codes.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);

const CODE_LENGTH: usize = 32;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Clone)]
struct IssuedCode {
    code: String,
    expires_at: Instant,
}

impl IssuedCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Issues and redeems the one-time admin registration code.
///
/// Cloning shares the same stored code, so the instance in `AppState` and the one used
/// at startup see the same state.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<IssuedCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    /// Creates a service with no active code and the default TTL.
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    /// Creates a service whose codes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// How long a generated code stays valid.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Generates a new random code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The 32 character alphanumeric code
    pub async fn generate(&self) -> String {
        let code = Self::random_code();
        *self.code.write().await = Some(IssuedCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
        });
        code
    }

    /// Checks `input` against the active code and consumes it on success.
    ///
    /// An expired code is discarded and never matches. A wrong guess leaves a valid
    /// code in place.
    ///
    /// # Returns
    /// - `true` - The code matched and has been consumed
    /// - `false` - No active code, expired code or mismatch
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut code = self.code.write().await;

        let Some(issued) = code.as_ref() else {
            return false;
        };

        if issued.is_expired() {
            *code = None;
            return false;
        }

        if issued.code == input {
            *code = None;
            return true;
        }

        false
    }

    /// Whether an unexpired code is currently active.
    pub async fn has_valid_code(&self) -> bool {
        self.code
            .read()
            .await
            .as_ref()
            .is_some_and(|issued| !issued.is_expired())
    }

    fn random_code() -> String {
        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
