//! Tab-completion dispatches for the native commands.

use std::sync::Arc;

use palisade_core::api::Server;
use palisade_core::chat::MessageReceiver;
use palisade_core::commandsys::{TabCompleteDispatch, TabCompleteError, match_to};

/// Completes the player-name token against the online player list.
pub struct PlayerNameComplete {
    server: Arc<dyn Server>,
}

impl PlayerNameComplete {
    pub fn new(server: Arc<dyn Server>) -> Self {
        Self { server }
    }
}

impl TabCompleteDispatch for PlayerNameComplete {
    fn complete(
        &self,
        _caller: &dyn MessageReceiver,
        args: &[String],
    ) -> Result<Option<Vec<String>>, TabCompleteError> {
        // Only the token right after the command word names a player.
        if args.len() != 2 {
            return Ok(None);
        }
        let names = self.server.online_player_names();
        let candidates: Vec<&str> = names.iter().map(String::as_str).collect();
        Ok(match_to(&args[1], &candidates))
    }
}
