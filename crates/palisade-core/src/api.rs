//! Host capability contracts.
//!
//! The host runtime owns world state, player records, warps and the ban
//! store; palisade code only calls into them through these traits.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A point in a world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {:.2} Y: {:.2} Z: {:.2}", self.x, self.y, self.z)
    }
}

/// Game mode of a player or a world default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Survival,
    Creative,
    Adventure,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Survival => write!(f, "Survival"),
            Self::Creative => write!(f, "Creative"),
            Self::Adventure => write!(f, "Adventure"),
        }
    }
}

/// A known player, online or offline.
///
/// Offline references answer the record-backed queries (join dates, groups,
/// ban-relevant identity); vitals are only meaningful while online.
pub trait PlayerReference: Send + Sync {
    fn name(&self) -> &str;
    fn uuid(&self) -> String;
    fn ip(&self) -> String;
    fn is_online(&self) -> bool;

    /// First join date, host-formatted.
    fn first_joined(&self) -> String;
    /// Last join date, host-formatted.
    fn last_joined(&self) -> String;
    /// Total playtime in seconds.
    fn time_played(&self) -> u64;

    fn is_muted(&self) -> bool;
    fn prefix(&self) -> String;
    /// Name of the primary permission group.
    fn primary_group(&self) -> String;
    /// Names of all groups, primary first.
    fn group_names(&self) -> Vec<String>;

    fn health(&self) -> f32;
    fn mode(&self) -> GameMode;
    fn hunger(&self) -> u32;
    fn exhaustion(&self) -> f32;
    fn level(&self) -> u32;
    fn experience(&self) -> u32;
    fn position(&self) -> Position;
    /// Fully qualified name of the world the player is in.
    fn world_name(&self) -> String;

    /// Disconnect the player with the given reason. No-op while offline.
    fn kick(&self, reason: &str);
}

/// Player lookup surface of the host server.
pub trait Server: Send + Sync {
    /// Exact-name lookup among online players.
    fn player(&self, name: &str) -> Option<Arc<dyn PlayerReference>>;

    /// Exact-name lookup in the offline player records.
    fn offline_player(&self, name: &str) -> Option<Arc<dyn PlayerReference>>;

    /// Best-effort pattern match among online players.
    fn match_player(&self, pattern: &str) -> Option<Arc<dyn PlayerReference>>;

    /// Best-effort pattern match among all known players, online first.
    fn match_known_player(&self, pattern: &str) -> Option<Arc<dyn PlayerReference>>;

    /// Names of all currently online players, for completion.
    fn online_player_names(&self) -> Vec<String>;
}

/// Warp storage owned by the host.
pub trait Warps: Send + Sync {
    /// Location of the player's home warp, if one is set.
    fn home(&self, player: &str) -> Option<Position>;
}
