//! Resend cooldown countdown.

/// A per-email countdown guarding OTP resends.
///
/// The countdown is decremented once per second by the cooldown ticker.
/// Resending is a no-op while the countdown is above zero; starting it
/// when it reads zero resets it to the configured window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendCooldown {
    remaining: u32,
}

impl ResendCooldown {
    /// A countdown that is already at zero.
    pub fn ready() -> Self {
        Self { remaining: 0 }
    }

    /// A countdown started at `seconds`.
    pub fn started(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    /// Seconds left until a resend is allowed.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether a resend is currently allowed.
    pub fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    /// One second elapsed.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Attempt to start the countdown. Returns `false` (no-op) while it is
    /// still running; otherwise resets it to `seconds` and returns `true`.
    pub fn try_start(&mut self, seconds: u32) -> bool {
        if self.remaining > 0 {
            return false;
        }
        self.remaining = seconds;
        true
    }
}

impl Default for ResendCooldown {
    fn default() -> Self {
        Self::ready()
    }
}
