//! Chat-side contract between commands and the host runtime.

use crate::api::PlayerReference;

/// A capability-bearing principal that issues commands and receives text.
///
/// Implemented by the host for players, the console, and command blocks.
/// Permission storage is host-owned; the dispatch core only queries it.
pub trait MessageReceiver: Send + Sync {
    /// Name of the receiver (player name, "Console", ...).
    fn name(&self) -> &str;

    /// Whether this receiver holds the given permission node.
    fn has_permission(&self, node: &str) -> bool;

    /// Send a regular chat message.
    fn message(&self, text: &str);

    /// Send an out-of-band notice (moderation feedback, errors).
    fn notice(&self, text: &str);

    /// The player behind this receiver, when there is one.
    fn as_player(&self) -> Option<&dyn PlayerReference> {
        None
    }
}

/// Legacy section-sign chat formatting codes understood by the client.
pub mod colors {
    pub const GREEN: &str = "\u{a7}2";
    pub const LIGHT_GREEN: &str = "\u{a7}a";
    pub const ORANGE: &str = "\u{a7}6";
    pub const YELLOW: &str = "\u{a7}e";
    pub const RED: &str = "\u{a7}c";
    pub const GRAY: &str = "\u{a7}7";
    pub const RESET: &str = "\u{a7}r";
}
