//! Native in-game commands for Palisade.
//!
//! Each command implements [`CommandHandler`](palisade_core::commandsys::CommandHandler)
//! and is wired to a [`CommandNode`] by [`native_nodes`]; the host registry
//! owns alias resolution and node storage.

pub mod ban;
pub mod completers;
pub mod player_info;
pub mod time;
pub mod unban;

pub use ban::BanCommand;
pub use player_info::PlayerInformation;
pub use unban::UnbanCommand;

use std::sync::Arc;

use palisade_core::api::{Server, Warps};
use palisade_core::bans::BanRegistry;
use palisade_core::commandsys::{
    CommandDescriptor, CommandNode, DispatchContext, Translator,
};
use palisade_core::error::Result;
use palisade_core::hooks::HookBus;

use crate::completers::PlayerNameComplete;

/// Host capabilities the native commands call into.
#[derive(Clone)]
pub struct NativeServices {
    pub server: Arc<dyn Server>,
    pub bans: Arc<dyn BanRegistry>,
    pub hooks: Arc<dyn HookBus>,
    pub warps: Arc<dyn Warps>,
    pub translator: Arc<dyn Translator>,
}

/// Build the command nodes for the native command set.
///
/// The returned nodes are root-level; the registry registers them under
/// their aliases.
pub fn native_nodes(
    services: &NativeServices,
    context: &DispatchContext,
) -> Result<Vec<Arc<CommandNode>>> {
    Ok(vec![
        CommandNode::with_completer(
            CommandDescriptor::new(&["ban"], "Bans a player")
                .with_permissions(&["palisade.command.ban"])
                .with_tool_tip("/ban <player> [reason] [amount unit]")
                .with_min(2),
            Box::new(BanCommand::new(
                services.server.clone(),
                services.bans.clone(),
                services.hooks.clone(),
                services.translator.clone(),
            )),
            Box::new(PlayerNameComplete::new(services.server.clone())),
            context.clone(),
        )?,
        CommandNode::with_completer(
            CommandDescriptor::new(&["unban"], "Unbans a player")
                .with_permissions(&["palisade.command.unban"])
                .with_tool_tip("/unban <player>")
                .with_min(2)
                .with_max(2),
            Box::new(UnbanCommand::new(
                services.server.clone(),
                services.bans.clone(),
                services.translator.clone(),
            )),
            Box::new(PlayerNameComplete::new(services.server.clone())),
            context.clone(),
        )?,
        CommandNode::with_completer(
            CommandDescriptor::new(&["playerinfo", "pinfo"], "Shows info about a player")
                .with_permissions(&["palisade.command.playerinfo"])
                .with_tool_tip("/playerinfo [player]")
                .with_max(2),
            Box::new(PlayerInformation::new(
                services.server.clone(),
                services.warps.clone(),
            )),
            Box::new(PlayerNameComplete::new(services.server.clone())),
            context.clone(),
        )?,
    ])
}
