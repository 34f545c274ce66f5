//! Hook payloads delivered over the host event bus.
//!
//! Hooks are plain data: the host constructs them at the event site, hands
//! them to every registered listener in turn, and then reads back any state
//! a listener changed (cancellation). Delivery is synchronous.

pub mod player;

pub use player::{BanHook, BedEnterHook};

/// A hook whose action listeners may veto.
pub trait Cancelable {
    fn is_canceled(&self) -> bool;
    fn set_canceled(&mut self, canceled: bool);
}

/// Player-scoped hook payloads, wrapped for bus dispatch.
#[derive(Debug, Clone)]
pub enum PlayerHook {
    Ban(BanHook),
    BedEnter(BedEnterHook),
}

impl PlayerHook {
    /// Name of the wrapped hook, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ban(_) => "BanHook",
            Self::BedEnter(_) => "BedEnterHook",
        }
    }
}

/// Synchronous event delivery surface of the host.
pub trait HookBus: Send + Sync {
    /// Deliver the hook to all registered listeners.
    fn call(&self, hook: &mut PlayerHook);
}
