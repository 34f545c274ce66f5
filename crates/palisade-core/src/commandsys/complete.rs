//! Tab-completion dispatch contract and suggestion matching.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use thiserror::Error;

use crate::chat::MessageReceiver;

/// Recoverable fault raised inside a completion dispatch.
///
/// Callers of [`crate::commandsys::CommandNode::tab_complete`] never see
/// this: the node boundary logs it and reports no suggestions.
#[derive(Debug, Error)]
#[error("tab completion failed: {reason}")]
pub struct TabCompleteError {
    reason: String,
}

impl TabCompleteError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Completion strategy bound to a command node.
///
/// `Ok(None)` means "nothing to suggest"; an `Err` is the explicit failure
/// kind, suppressed at the node boundary.
pub trait TabCompleteDispatch: Send + Sync {
    fn complete(
        &self,
        caller: &dyn MessageReceiver,
        args: &[String],
    ) -> Result<Option<Vec<String>>, TabCompleteError>;
}

/// Matches the token being completed against `candidates`.
///
/// Case-insensitive prefix matching; results are sorted best-first. An
/// empty token matches every candidate in the given order. Returns `None`
/// when nothing matches.
pub fn match_to(partial: &str, candidates: &[&str]) -> Option<Vec<String>> {
    if candidates.is_empty() {
        return None;
    }
    if partial.is_empty() {
        return Some(candidates.iter().map(ToString::to_string).collect());
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let atom = Atom::new(
        partial,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Prefix,
        false,
    );

    let mut buf = Vec::new();
    let mut scored: Vec<(String, u16)> = candidates
        .iter()
        .filter_map(|item| {
            let haystack = Utf32Str::new(item, &mut buf);
            let score = atom.score(haystack, &mut matcher)?;
            Some(((*item).to_string(), score))
        })
        .collect();

    if scored.is_empty() {
        return None;
    }
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    Some(scored.into_iter().map(|(text, _)| text).collect())
}
