//! Command dispatch framework.
//!
//! Commands are registered as [`CommandNode`]s built from an immutable
//! [`CommandDescriptor`] plus a [`CommandHandler`]. Nodes form a tree via
//! parent/child links; an external registry resolves the alias for an input
//! line and calls [`CommandNode::parse`], which performs the permission and
//! argument-count gating before dispatching to the handler.

pub mod complete;
pub mod node;

pub use complete::{TabCompleteDispatch, TabCompleteError, match_to};
pub use node::{CommandNode, DispatchContext};

use crate::chat::MessageReceiver;
use crate::error::{Error, Result};

/// Immutable metadata describing one registered command.
///
/// Built with the `with_*` methods and validated when the owning
/// [`CommandNode`] is created.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    /// Command names; the first alias is canonical and doubles as the help
    /// lookup fallback.
    pub aliases: Vec<String>,
    /// Permission nodes; holding any one of them grants use. Empty means
    /// unrestricted.
    pub permissions: Vec<String>,
    /// What the command does, shown in help. Passed through the attached
    /// translator when one is present.
    pub description: String,
    /// Usage tip shown when parsing fails.
    pub tool_tip: String,
    /// Dotted path of the logical parent command; empty for root commands.
    pub parent: String,
    /// Override key for help registration; empty means register the aliases.
    pub help_lookup: String,
    /// Extra terms for help search.
    pub search_terms: Vec<String>,
    /// Minimum number of argument tokens (token 0 is the command word).
    pub min: usize,
    /// Maximum number of argument tokens; `None` means unbounded.
    pub max: Option<usize>,
}

impl CommandDescriptor {
    pub fn new(aliases: &[&str], description: &str) -> Self {
        Self {
            aliases: aliases.iter().map(ToString::to_string).collect(),
            permissions: Vec::new(),
            description: description.to_string(),
            tool_tip: String::new(),
            parent: String::new(),
            help_lookup: String::new(),
            search_terms: Vec::new(),
            min: 1,
            max: None,
        }
    }

    /// Set the permission nodes (any one grants use).
    #[must_use]
    pub fn with_permissions(mut self, permissions: &[&str]) -> Self {
        self.permissions = permissions.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the usage tip.
    #[must_use]
    pub fn with_tool_tip(mut self, tool_tip: &str) -> Self {
        self.tool_tip = tool_tip.to_string();
        self
    }

    /// Set the dotted parent path.
    #[must_use]
    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = parent.to_string();
        self
    }

    /// Set the help registration override key.
    #[must_use]
    pub fn with_help_lookup(mut self, help_lookup: &str) -> Self {
        self.help_lookup = help_lookup.to_string();
        self
    }

    /// Set the help search terms.
    #[must_use]
    pub fn with_search_terms(mut self, search_terms: &[&str]) -> Self {
        self.search_terms = search_terms.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the minimum argument-token count.
    #[must_use]
    pub fn with_min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    /// Set the maximum argument-token count.
    #[must_use]
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Registration-time validation.
    pub fn validate(&self) -> Result<()> {
        if self.aliases.is_empty() {
            return Err(Error::InvalidDescriptor("no aliases given".to_string()));
        }
        if let Some(alias) = self.aliases.iter().find(|a| a.trim().is_empty()) {
            return Err(Error::InvalidDescriptor(format!(
                "blank alias {alias:?} is not registrable"
            )));
        }
        if let Some(max) = self.max
            && max < self.min
        {
            return Err(Error::InvalidDescriptor(format!(
                "max tokens ({max}) below min tokens ({})",
                self.min
            )));
        }
        Ok(())
    }
}

/// Execution hook of a concrete command.
///
/// Invoked by [`CommandNode::parse`] after permission and argument-count
/// gating; `args` is the full token sequence, token 0 being the command
/// word. Faults raised in here are the registry's concern, not the
/// dispatch core's.
pub trait CommandHandler: Send + Sync {
    fn execute(&self, caller: &dyn MessageReceiver, args: &[String]);
}

/// Help rendering surface of the host.
///
/// The dispatch core only selects the lookup key; message construction is
/// entirely host-owned.
pub trait HelpSystem: Send + Sync {
    fn get_help(&self, caller: &dyn MessageReceiver, lookup: &str);
}

/// Dispatch-relevant switches, read at denial time.
pub trait DispatchSettings: Send + Sync {
    /// Whether to show the generic denial notice on a failed permission
    /// check. The notice never names the command or the missing permission.
    fn show_unknown_command(&self) -> bool;
}

/// Localization capability. Absence falls back to the raw key or string.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;

    fn translate_format(&self, key: &str, args: &[&str]) -> String;
}

/// Built-in English message table. Keys without an entry pass through raw,
/// matching the fallback behavior of an absent translator.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTranslator;

impl Translator for DefaultTranslator {
    fn translate(&self, key: &str) -> String {
        match key {
            "unknown command" => "Unknown command.".to_string(),
            "ban banned" => "Banned {}.".to_string(),
            "ban failed" => "Ban failed.".to_string(),
            "unknown player" => "Unknown player: {}".to_string(),
            "unban success" => "Unbanned {}.".to_string(),
            _ => key.to_string(),
        }
    }

    fn translate_format(&self, key: &str, args: &[&str]) -> String {
        let mut text = self.translate(key);
        for arg in args {
            if let Some(idx) = text.find("{}") {
                text.replace_range(idx..idx + 2, arg);
            }
        }
        text
    }
}
