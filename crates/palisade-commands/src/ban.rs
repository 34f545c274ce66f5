//! The `/ban` command.

use std::sync::Arc;

use tracing::info;

use palisade_core::api::Server;
use palisade_core::bans::{Ban, BanRegistry};
use palisade_core::chat::MessageReceiver;
use palisade_core::commandsys::{CommandHandler, Translator};
use palisade_core::hooks::{BanHook, HookBus, PlayerHook};

use crate::time::parse_expiry;

/// Bans a player by name: `/ban <player> [reason] [amount unit]`.
///
/// A trailing `<amount> <unit>` pair turns the ban temporary; when the pair
/// does not parse it is folded back into the reason and the ban stays
/// permanent.
pub struct BanCommand {
    server: Arc<dyn Server>,
    bans: Arc<dyn BanRegistry>,
    hooks: Arc<dyn HookBus>,
    translator: Arc<dyn Translator>,
}

impl BanCommand {
    pub fn new(
        server: Arc<dyn Server>,
        bans: Arc<dyn BanRegistry>,
        hooks: Arc<dyn HookBus>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            server,
            bans,
            hooks,
            translator,
        }
    }
}

impl CommandHandler for BanCommand {
    fn execute(&self, caller: &dyn MessageReceiver, args: &[String]) {
        let Some(subject_name) = args.get(1) else {
            return;
        };
        let Some(subject) = self.server.match_known_player(subject_name) else {
            caller.notice(&format!(
                "{} {}",
                self.translator.translate("ban failed"),
                self.translator
                    .translate_format("unknown player", &[subject_name.as_str()]),
            ));
            return;
        };

        let mut reason = String::new();
        let mut expiry = None;
        if args.len() >= 4 {
            expiry = parse_expiry(&args[args.len() - 2], &args[args.len() - 1]);
        }
        if args.len() >= 3 {
            let reason_end = if expiry.is_some() {
                args.len() - 2
            } else {
                args.len()
            };
            reason = args[2..reason_end].join(" ");
        }

        let mut ban = Ban::new(subject.name()).with_moderator(caller.name());
        if !reason.is_empty() {
            ban = ban.with_reason(&reason);
        }
        if let Some(expiry) = expiry {
            ban = ban.with_expiry(expiry);
        }
        let reason = ban.reason.clone();

        self.bans.issue(ban);
        let mut hook = PlayerHook::Ban(BanHook {
            player: subject.name().to_string(),
            ip: subject.ip(),
            moderator: caller.name().to_string(),
            reason: reason.clone(),
            expiry,
        });
        self.hooks.call(&mut hook);

        info!(subject = subject.name(), moderator = caller.name(), "ban issued");
        caller.notice(
            &self
                .translator
                .translate_format("ban banned", &[subject.name()]),
        );
        if subject.is_online() {
            subject.kick(&reason);
        }
    }
}
