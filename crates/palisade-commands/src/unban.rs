//! The `/unban` command.

use std::sync::Arc;

use palisade_core::api::Server;
use palisade_core::bans::BanRegistry;
use palisade_core::chat::{MessageReceiver, colors};
use palisade_core::commandsys::{CommandHandler, Translator};

/// Lifts a ban by player name: `/unban <player>`.
pub struct UnbanCommand {
    server: Arc<dyn Server>,
    bans: Arc<dyn BanRegistry>,
    translator: Arc<dyn Translator>,
}

impl UnbanCommand {
    pub fn new(
        server: Arc<dyn Server>,
        bans: Arc<dyn BanRegistry>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            server,
            bans,
            translator,
        }
    }
}

impl CommandHandler for UnbanCommand {
    fn execute(&self, caller: &dyn MessageReceiver, args: &[String]) {
        let Some(name) = args.get(1) else {
            return;
        };
        let player = self
            .server
            .player(name)
            .or_else(|| self.server.offline_player(name));

        match player {
            Some(player) => {
                self.bans.lift(player.name());
                caller.message(&format!(
                    "{}{}",
                    colors::YELLOW,
                    self.translator
                        .translate_format("unban success", &[player.name()]),
                ));
            }
            None => {
                caller.notice(
                    &self
                        .translator
                        .translate_format("unknown player", &[name.as_str()]),
                );
            }
        }
    }
}
