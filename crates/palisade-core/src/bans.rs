//! Ban records and the host-side ban store contract.

use serde::{Deserialize, Serialize};

/// Default reason attached to bans issued without one.
pub const DEFAULT_BAN_REASON: &str = "Permanently Banned";

/// A single ban record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ban {
    /// Name of the banned player.
    pub subject: String,
    /// Name of the issuer (player or console).
    pub moderator: String,
    /// Reason shown to the banned player.
    pub reason: String,
    /// Expiry as unix millis; `None` means permanent.
    pub expiry: Option<i64>,
}

impl Ban {
    pub fn new(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
            moderator: String::new(),
            reason: DEFAULT_BAN_REASON.to_string(),
            expiry: None,
        }
    }

    /// Set the issuing moderator.
    #[must_use]
    pub fn with_moderator(mut self, moderator: &str) -> Self {
        self.moderator = moderator.to_string();
        self
    }

    /// Set the ban reason.
    #[must_use]
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = reason.to_string();
        self
    }

    /// Set the expiry timestamp (unix millis).
    #[must_use]
    pub fn with_expiry(mut self, expiry: i64) -> Self {
        self.expiry = Some(expiry);
        self
    }

    pub fn is_permanent(&self) -> bool {
        self.expiry.is_none()
    }
}

/// Ban storage owned by the host.
pub trait BanRegistry: Send + Sync {
    /// Record a ban and enforce it.
    fn issue(&self, ban: Ban);

    /// Lift any ban on the given subject.
    fn lift(&self, subject: &str);
}
