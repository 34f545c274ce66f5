//! Player-scoped hook payloads.

use std::fmt;

use crate::api::Position;
use crate::hooks::Cancelable;

/// Fired after a ban is issued, before the subject is kicked.
#[derive(Debug, Clone)]
pub struct BanHook {
    /// Name of the banned player.
    pub player: String,
    /// IP the player was last seen from.
    pub ip: String,
    /// Name of the issuer.
    pub moderator: String,
    pub reason: String,
    /// Expiry as unix millis; `None` means permanent.
    pub expiry: Option<i64>,
}

impl fmt::Display for BanHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BanHook[player={}, moderator={}, reason={}]",
            self.player, self.moderator, self.reason
        )
    }
}

/// Fired when a player starts entering a bed. Cancelable.
#[derive(Debug, Clone)]
pub struct BedEnterHook {
    /// Name of the player entering the bed.
    pub player: String,
    /// Position of the bed block.
    pub bed: Position,
    canceled: bool,
}

impl BedEnterHook {
    pub fn new(player: &str, bed: Position) -> Self {
        Self {
            player: player.to_string(),
            bed,
            canceled: false,
        }
    }
}

impl Cancelable for BedEnterHook {
    fn is_canceled(&self) -> bool {
        self.canceled
    }

    fn set_canceled(&mut self, canceled: bool) {
        self.canceled = canceled;
    }
}

impl fmt::Display for BedEnterHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BedEnterHook[player={}, bed={}]", self.player, self.bed)
    }
}
