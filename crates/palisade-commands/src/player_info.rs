//! The `/playerinfo` command.

use std::fmt::Display;
use std::sync::Arc;

use palisade_core::api::{PlayerReference, Server, Warps};
use palisade_core::chat::{MessageReceiver, colors};
use palisade_core::commandsys::CommandHandler;

use crate::time::format_duration;

/// Shows a player's record sheet: `/playerinfo [player]`.
///
/// Without an argument the caller is the subject, provided the caller is a
/// player.
pub struct PlayerInformation {
    server: Arc<dyn Server>,
    warps: Arc<dyn Warps>,
}

impl PlayerInformation {
    pub fn new(server: Arc<dyn Server>, warps: Arc<dyn Warps>) -> Self {
        Self { server, warps }
    }

    fn send_sheet(&self, caller: &dyn MessageReceiver, subject: &dyn PlayerReference) {
        caller.message(&format!("{}{}'s info:", colors::GREEN, subject.name()));
        send_data(caller, "First Joined: ", &subject.first_joined());
        send_data(caller, "Last Joined: ", &subject.last_joined());
        send_data(caller, "Time Played: ", &format_duration(subject.time_played()));
        send_data(caller, "Muted: ", &subject.is_muted());
        send_data(caller, "Prefix: ", &subject.prefix());
        send_data(caller, "IP: ", &subject.ip());
        send_data(caller, "Primary Group: ", &subject.primary_group());
        let groups = subject.group_names();
        let others = groups.get(1..).unwrap_or_default().join(", ");
        send_data(caller, "Other Groups: ", &others);
        send_data(caller, "Health: ", &format!("{:.1}", subject.health()));
        send_data(caller, "Mode: ", &subject.mode());
        send_data(caller, "Food Level: ", &subject.hunger());
        send_data(
            caller,
            "Food Exhaustion: ",
            &format!("{:.2}", subject.exhaustion()),
        );
        send_data(caller, "XP Level: ", &subject.level());
        send_data(caller, "XP Total: ", &subject.experience());
        send_data(caller, "Position: ", &subject.position());
        send_data(caller, "World: ", &subject.world_name());
        match self.warps.home(subject.name()) {
            Some(home) => send_data(caller, "Home: ", &home),
            None => send_data(caller, "Home: ", &"Not set"),
        }
    }
}

impl CommandHandler for PlayerInformation {
    fn execute(&self, caller: &dyn MessageReceiver, args: &[String]) {
        let fetched;
        let subject: Option<&dyn PlayerReference> = if let Some(name) = args.get(1) {
            fetched = self
                .server
                .match_player(name)
                .or_else(|| self.server.offline_player(name));
            fetched.as_deref()
        } else {
            caller.as_player()
        };

        match subject {
            Some(subject) => self.send_sheet(caller, subject),
            None => caller.notice(&format!(
                "Can't find player {}",
                args.get(1).map_or("", String::as_str)
            )),
        }
    }
}

fn send_data(caller: &dyn MessageReceiver, caption: &str, value: &dyn Display) {
    caller.message(&format!(
        "{}{}{}{}",
        colors::LIGHT_GREEN,
        caption,
        colors::ORANGE,
        value
    ));
}
