//! OTP issue, verification, and resend gating.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use moka::future::Cache;
use rand::Rng;
use tokio::sync::watch;

use pressgate_core::config::auth::AuthConfig;
use pressgate_core::{AppError, AppResult};

use super::cooldown::ResendCooldown;

/// Length of generated codes.
const OTP_DIGITS: u32 = 6;

/// Issues and verifies six-digit email verification codes.
///
/// Codes live in a TTL cache keyed by email; a parallel cooldown map
/// throttles resends. The cooldowns are driven by [`OtpService::run_ticker`],
/// which must be spawned alongside the server.
pub struct OtpService {
    codes: Cache<String, String>,
    cooldowns: DashMap<String, ResendCooldown>,
    cooldown_seconds: u32,
}

impl OtpService {
    /// Build the service from authentication configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let codes = Cache::builder()
            .time_to_live(Duration::from_secs(config.otp_ttl_minutes * 60))
            .build();
        Self {
            codes,
            cooldowns: DashMap::new(),
            cooldown_seconds: config.otp_resend_cooldown_seconds,
        }
    }

    /// Generate and store a fresh code for `email`, starting the resend
    /// cooldown. Used on registration, where no cooldown can be running yet.
    pub async fn issue(&self, email: &str) -> String {
        let code = generate_code();
        self.codes.insert(email.to_string(), code.clone()).await;
        self.cooldowns.insert(
            email.to_string(),
            ResendCooldown::started(self.cooldown_seconds),
        );
        code
    }

    /// Re-issue a code for `email` if the cooldown allows it.
    ///
    /// While the countdown is above zero this is a no-op and fails with a
    /// rate-limit error carrying the seconds remaining. At zero, a new code
    /// is generated and the countdown restarts at the configured window.
    pub async fn resend(&self, email: &str) -> AppResult<String> {
        {
            let mut entry = self.cooldowns.entry(email.to_string()).or_default();
            if !entry.try_start(self.cooldown_seconds) {
                return Err(AppError::rate_limited(format!(
                    "OTP resend available in {} seconds",
                    entry.remaining()
                )));
            }
        }
        let code = generate_code();
        self.codes.insert(email.to_string(), code.clone()).await;
        Ok(code)
    }

    /// Check `code` against the stored one for `email`.
    ///
    /// The code is consumed on success. A missing entry means the code
    /// expired or was never issued.
    pub async fn verify(&self, email: &str, code: &str) -> AppResult<()> {
        match self.codes.get(email).await {
            Some(expected) if expected == code => {
                self.codes.invalidate(email).await;
                self.cooldowns.remove(email);
                Ok(())
            }
            Some(_) => Err(AppError::validation("Incorrect verification code")),
            None => Err(AppError::validation(
                "Verification code expired or not issued",
            )),
        }
    }

    /// The currently pending code for `email`, if one is stored. Used by
    /// operators debugging delivery and by integration tests.
    pub async fn pending_code(&self, email: &str) -> Option<String> {
        self.codes.get(email).await
    }

    /// Seconds until a resend is allowed for `email`. Zero means ready.
    pub fn resend_remaining(&self, email: &str) -> u32 {
        self.cooldowns
            .get(email)
            .map(|cooldown| cooldown.remaining())
            .unwrap_or(0)
    }

    /// Advance every cooldown by one second, dropping finished ones.
    pub fn tick_cooldowns(&self) {
        self.cooldowns.retain(|_, cooldown| {
            cooldown.tick();
            !cooldown.is_ready()
        });
    }

    /// Drive the cooldowns at 1 Hz until shutdown is signalled.
    pub async fn run_ticker(self: Arc<Self>, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => self.tick_cooldowns(),
                _ = shutdown.changed() => {
                    tracing::debug!("OTP cooldown ticker stopping");
                    return;
                }
            }
        }
    }
}

impl std::fmt::Debug for OtpService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtpService")
            .field("cooldown_seconds", &self.cooldown_seconds)
            .finish_non_exhaustive()
    }
}

fn generate_code() -> String {
    let n = rand::thread_rng().gen_range(0..10u32.pow(OTP_DIGITS));
    format!("{n:06}")
}
