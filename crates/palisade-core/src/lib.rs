//! Palisade Core Library
//!
//! Shared functionality for Palisade components:
//! - Command dispatch framework (descriptors, command nodes, tab completion)
//! - Host capability contracts (server, players, bans, warps, hook bus)
//! - Configuration resolution (server settings, per-world files)
//! - Hook payloads delivered over the host event bus
//! - Common error types

pub mod api;
pub mod bans;
pub mod chat;
pub mod commandsys;
pub mod config;
pub mod error;
pub mod hooks;
pub mod tracing_init;

pub use chat::MessageReceiver;
pub use commandsys::{CommandDescriptor, CommandHandler, CommandNode};
pub use config::ServerConfig;
pub use error::{Error, Result};
