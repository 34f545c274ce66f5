//! Runtime command nodes: permission-gated parsing, the sub-command tree,
//! and the tab-completion boundary.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::warn;

use crate::chat::MessageReceiver;
use crate::commandsys::complete::TabCompleteDispatch;
use crate::commandsys::{
    CommandDescriptor, CommandHandler, DispatchSettings, HelpSystem, Translator,
};
use crate::error::{Error, Result};

/// Collaborator wiring injected into every command node a module registers.
#[derive(Clone)]
pub struct DispatchContext {
    /// Renders usage guidance; the node only selects the lookup key.
    pub help: Arc<dyn HelpSystem>,
    /// Switches read at dispatch time.
    pub settings: Arc<dyn DispatchSettings>,
    /// Optional localization; absence falls back to raw strings.
    pub translator: Option<Arc<dyn Translator>>,
    /// Name of the registering module; owns the node's lifecycle.
    pub owner: String,
}

impl DispatchContext {
    pub fn new(
        help: Arc<dyn HelpSystem>,
        settings: Arc<dyn DispatchSettings>,
        owner: &str,
    ) -> Self {
        Self {
            help,
            settings,
            translator: None,
            owner: owner.to_string(),
        }
    }

    /// Attach a translator.
    #[must_use]
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }
}

/// One registered command.
///
/// Nodes are created during registration, shared as `Arc`, and live for the
/// server session. The child list and the parent back-reference are the only
/// mutable state; both sit behind mutexes acquired by readers and writers
/// alike, so lookups from the dispatch thread stay consistent while a loader
/// thread mutates the tree.
pub struct CommandNode {
    descriptor: CommandDescriptor,
    handler: Box<dyn CommandHandler>,
    completer: Option<Box<dyn TabCompleteDispatch>>,
    context: DispatchContext,
    children: Mutex<Vec<Arc<CommandNode>>>,
    parent: Mutex<Weak<CommandNode>>,
}

impl CommandNode {
    /// Create a node without a completion dispatch.
    ///
    /// Validates the descriptor; an invalid one fails registration here
    /// rather than surfacing at dispatch time.
    pub fn new(
        descriptor: CommandDescriptor,
        handler: Box<dyn CommandHandler>,
        context: DispatchContext,
    ) -> Result<Arc<Self>> {
        Self::with_completer_opt(descriptor, handler, None, context)
    }

    /// Create a node with a completion dispatch.
    pub fn with_completer(
        descriptor: CommandDescriptor,
        handler: Box<dyn CommandHandler>,
        completer: Box<dyn TabCompleteDispatch>,
        context: DispatchContext,
    ) -> Result<Arc<Self>> {
        Self::with_completer_opt(descriptor, handler, Some(completer), context)
    }

    fn with_completer_opt(
        descriptor: CommandDescriptor,
        handler: Box<dyn CommandHandler>,
        completer: Option<Box<dyn TabCompleteDispatch>>,
        context: DispatchContext,
    ) -> Result<Arc<Self>> {
        descriptor.validate()?;
        Ok(Arc::new(Self {
            descriptor,
            handler,
            completer,
            context,
            children: Mutex::new(Vec::new()),
            parent: Mutex::new(Weak::new()),
        }))
    }

    pub fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    /// Name of the module that registered this command.
    pub fn owner(&self) -> &str {
        &self.context.owner
    }

    /// Parse and dispatch an input that resolved to this node.
    ///
    /// Always reports the input as handled: alias resolution already
    /// happened in the registry, so there is no "not found" outcome here.
    /// `args` is the full token sequence, token 0 being the command word.
    pub fn parse(&self, caller: &dyn MessageReceiver, args: &[String]) -> bool {
        if !self.can_use(caller) {
            self.on_permission_denied(caller);
            return true;
        }
        if args.len() < self.descriptor.min
            || self.descriptor.max.is_some_and(|max| args.len() > max)
        {
            self.on_bad_syntax(caller, args);
            return true;
        }
        self.handler.execute(caller, args);
        true
    }

    /// Whether the caller may use this command: true iff the permission set
    /// is empty or the caller holds at least one listed permission.
    ///
    /// Pure; help and listing systems use this to filter visible commands
    /// without triggering denial messaging.
    pub fn can_use(&self, caller: &dyn MessageReceiver) -> bool {
        self.descriptor.permissions.is_empty()
            || self
                .descriptor
                .permissions
                .iter()
                .any(|perm| caller.has_permission(perm))
    }

    /// Description, translated when a translator is attached.
    pub fn locale_description(&self) -> String {
        match &self.context.translator {
            Some(translator) => translator.translate(&self.descriptor.description),
            None => self.descriptor.description.clone(),
        }
    }

    /// Direct child matching the alias, case-insensitively. First match
    /// wins, trying each child's full alias set in registration order.
    pub fn sub_command(&self, alias: &str) -> Option<Arc<CommandNode>> {
        self.lock_children()
            .iter()
            .find(|child| {
                child
                    .descriptor
                    .aliases
                    .iter()
                    .any(|a| a.eq_ignore_ascii_case(alias))
            })
            .cloned()
    }

    pub fn has_sub_command(&self, alias: &str) -> bool {
        self.sub_command(alias).is_some()
    }

    /// Direct children in registration order.
    pub fn sub_commands(&self) -> Vec<Arc<CommandNode>> {
        self.lock_children().clone()
    }

    /// Pre-order flatten of the descendant tree into `out`.
    ///
    /// A node adds itself only when it has a parent: a parent-less root is
    /// excluded from its own flatten (the registry enumerates roots itself)
    /// while its children are still visited.
    pub fn collect_sub_commands(self: &Arc<Self>, out: &mut Vec<Arc<CommandNode>>) {
        if self.parent().is_some() {
            out.push(Arc::clone(self));
        }
        for child in self.sub_commands() {
            child.collect_sub_commands(out);
        }
    }

    /// The parent node, if this node is currently attached to one.
    pub fn parent(&self) -> Option<Arc<CommandNode>> {
        self.lock_parent().upgrade()
    }

    /// Attach this node under `new_parent`, detaching from any current
    /// parent first.
    ///
    /// Membership is atomic with respect to concurrent traversal: when
    /// re-parenting, both affected child lists are locked (in stable address
    /// order) so the node is never visible under two parents, nor under
    /// none. Re-attaching to the current parent is idempotent. Linking a
    /// node under itself or under one of its own descendants is rejected.
    pub fn set_parent(self: &Arc<Self>, new_parent: &Arc<CommandNode>) -> Result<()> {
        if Arc::ptr_eq(self, new_parent) {
            return Err(Error::CyclicCommandTree(self.descriptor.aliases[0].clone()));
        }
        let mut cursor = new_parent.parent();
        while let Some(ancestor) = cursor {
            if Arc::ptr_eq(&ancestor, self) {
                return Err(Error::CyclicCommandTree(self.descriptor.aliases[0].clone()));
            }
            cursor = ancestor.parent();
        }

        match self.parent() {
            Some(ref old) if Arc::ptr_eq(old, new_parent) => {
                let mut children = new_parent.lock_children();
                if !children.iter().any(|c| Arc::ptr_eq(c, self)) {
                    children.push(Arc::clone(self));
                }
            }
            Some(ref old) => {
                // Stable lock order across both lists keeps concurrent
                // re-parents deadlock-free.
                let flip = (Arc::as_ptr(old) as usize) > (Arc::as_ptr(new_parent) as usize);
                let (first, second) = if flip {
                    (new_parent, old)
                } else {
                    (old, new_parent)
                };
                let mut first_children = first.lock_children();
                let mut second_children = second.lock_children();
                let (old_children, new_children) = if flip {
                    (&mut *second_children, &mut *first_children)
                } else {
                    (&mut *first_children, &mut *second_children)
                };
                old_children.retain(|c| !Arc::ptr_eq(c, self));
                if !new_children.iter().any(|c| Arc::ptr_eq(c, self)) {
                    new_children.push(Arc::clone(self));
                }
            }
            None => {
                let mut children = new_parent.lock_children();
                if !children.iter().any(|c| Arc::ptr_eq(c, self)) {
                    children.push(Arc::clone(self));
                }
            }
        }
        *self.lock_parent() = Arc::downgrade(new_parent);
        Ok(())
    }

    /// Remove this node from its parent's child list and clear the
    /// back-reference. Used at unregistration; children are left attached
    /// for the registry to re-home or drop.
    pub fn detach(self: &Arc<Self>) {
        if let Some(old) = self.parent() {
            old.lock_children().retain(|c| !Arc::ptr_eq(c, self));
        }
        *self.lock_parent() = Weak::new();
    }

    /// Completion suggestions for the current input, or `None`.
    ///
    /// A failure inside the dispatch is logged and reported as `None`;
    /// completion never disrupts the invoking session.
    pub fn tab_complete(&self, caller: &dyn MessageReceiver, args: &[String]) -> Option<Vec<String>> {
        let completer = self.completer.as_ref()?;
        match completer.complete(caller, args) {
            Ok(suggestions) => suggestions,
            Err(err) => {
                warn!(command = %self.descriptor.aliases[0], error = %err, "tab completion failed");
                None
            }
        }
    }

    /// Registration ordering: root commands before nested ones, shallower
    /// parent paths before deeper ones.
    ///
    /// This is a depth grouping, not a total order: two nodes at equal
    /// depth compare equal even under different parents. Storage that needs
    /// a total order chains this with [`Self::canonical_path`].
    pub fn registration_cmp(&self, other: &CommandNode) -> Ordering {
        let ours = &self.descriptor.parent;
        let theirs = &other.descriptor.parent;
        match (ours.is_empty(), theirs.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                let a = ours.split('.').count();
                let b = theirs.split('.').count();
                a.cmp(&b)
            }
        }
    }

    /// Dotted parent path plus canonical alias; stable identity for
    /// registries and help systems.
    pub fn canonical_path(&self) -> String {
        if self.descriptor.parent.is_empty() {
            self.descriptor.aliases[0].clone()
        } else {
            format!("{}.{}", self.descriptor.parent, self.descriptor.aliases[0])
        }
    }

    fn on_permission_denied(&self, caller: &dyn MessageReceiver) {
        if self.context.settings.show_unknown_command() {
            caller.notice(&self.translate_key("unknown command"));
        }
    }

    fn on_bad_syntax(&self, caller: &dyn MessageReceiver, _args: &[String]) {
        let lookup = if self.descriptor.help_lookup.is_empty() {
            &self.descriptor.aliases[0]
        } else {
            &self.descriptor.help_lookup
        };
        self.context.help.get_help(caller, lookup);
    }

    fn translate_key(&self, key: &str) -> String {
        match &self.context.translator {
            Some(translator) => translator.translate(key),
            None => key.to_string(),
        }
    }

    fn lock_children(&self) -> MutexGuard<'_, Vec<Arc<CommandNode>>> {
        self.children.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_parent(&self) -> MutexGuard<'_, Weak<CommandNode>> {
        self.parent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commandsys::complete::TabCompleteError;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    #[derive(Default)]
    struct TestCaller {
        perms: Vec<String>,
        notices: Mutex<Vec<String>>,
        messages: Mutex<Vec<String>>,
    }

    impl TestCaller {
        fn with_perms(perms: &[&str]) -> Self {
            Self {
                perms: perms.iter().map(ToString::to_string).collect(),
                ..Self::default()
            }
        }

        fn notices(&self) -> Vec<String> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl MessageReceiver for TestCaller {
        fn name(&self) -> &str {
            "Tester"
        }

        fn has_permission(&self, node: &str) -> bool {
            self.perms.iter().any(|p| p == node)
        }

        fn message(&self, text: &str) {
            self.messages.lock().unwrap().push(text.to_string());
        }

        fn notice(&self, text: &str) {
            self.notices.lock().unwrap().push(text.to_string());
        }
    }

    #[derive(Default)]
    struct TestHelp {
        lookups: Mutex<Vec<String>>,
    }

    impl HelpSystem for TestHelp {
        fn get_help(&self, _caller: &dyn MessageReceiver, lookup: &str) {
            self.lookups.lock().unwrap().push(lookup.to_string());
        }
    }

    struct Switch(bool);

    impl DispatchSettings for Switch {
        fn show_unknown_command(&self) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct CallRecorder {
        calls: AtomicUsize,
        last_args: Mutex<Vec<String>>,
    }

    struct RecordingHandler(Arc<CallRecorder>);

    impl CommandHandler for RecordingHandler {
        fn execute(&self, _caller: &dyn MessageReceiver, args: &[String]) {
            self.0.calls.fetch_add(1, AtomicOrdering::SeqCst);
            *self.0.last_args.lock().unwrap() = args.to_vec();
        }
    }

    struct NoopHandler;

    impl CommandHandler for NoopHandler {
        fn execute(&self, _caller: &dyn MessageReceiver, _args: &[String]) {}
    }

    struct FailingCompleter;

    impl TabCompleteDispatch for FailingCompleter {
        fn complete(
            &self,
            _caller: &dyn MessageReceiver,
            _args: &[String],
        ) -> std::result::Result<Option<Vec<String>>, TabCompleteError> {
            Err(TabCompleteError::new("backing store unavailable"))
        }
    }

    fn context(show_unknown: bool) -> (DispatchContext, Arc<TestHelp>) {
        let help = Arc::new(TestHelp::default());
        let ctx = DispatchContext::new(help.clone(), Arc::new(Switch(show_unknown)), "test-module");
        (ctx, help)
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    fn node(descriptor: CommandDescriptor) -> Arc<CommandNode> {
        let (ctx, _) = context(false);
        CommandNode::new(descriptor, Box::new(NoopHandler), ctx).unwrap()
    }

    #[test]
    fn can_use_with_empty_permission_set() {
        let cmd = node(CommandDescriptor::new(&["spawn"], "Teleport to spawn"));
        assert!(cmd.can_use(&TestCaller::default()));
    }

    #[test]
    fn can_use_requires_any_one_permission() {
        let cmd = node(
            CommandDescriptor::new(&["ban"], "Bans a player")
                .with_permissions(&["palisade.command.ban", "palisade.moderator"]),
        );
        assert!(cmd.can_use(&TestCaller::with_perms(&["palisade.moderator"])));
        assert!(!cmd.can_use(&TestCaller::with_perms(&["palisade.command.kick"])));
    }

    #[test]
    fn parse_denies_without_permission_and_never_executes() {
        let recorder = Arc::new(CallRecorder::default());
        let (ctx, _) = context(true);
        let cmd = CommandNode::new(
            CommandDescriptor::new(&["ban"], "Bans a player")
                .with_permissions(&["palisade.command.ban"])
                .with_min(2),
            Box::new(RecordingHandler(recorder.clone())),
            ctx,
        )
        .unwrap();

        let caller = TestCaller::default();
        assert!(cmd.parse(&caller, &args(&["ban", "Steve"])));
        assert_eq!(recorder.calls.load(AtomicOrdering::SeqCst), 0);
        assert_eq!(caller.notices(), vec!["unknown command".to_string()]);
    }

    #[test]
    fn denial_is_silent_when_switch_is_off() {
        let (ctx, _) = context(false);
        let cmd = CommandNode::new(
            CommandDescriptor::new(&["ban"], "Bans a player")
                .with_permissions(&["palisade.command.ban"]),
            Box::new(NoopHandler),
            ctx,
        )
        .unwrap();

        let caller = TestCaller::default();
        assert!(cmd.parse(&caller, &args(&["ban"])));
        assert!(caller.notices().is_empty());
    }

    #[test]
    fn parse_rejects_too_few_tokens_via_help() {
        let recorder = Arc::new(CallRecorder::default());
        let (ctx, help) = context(true);
        let cmd = CommandNode::new(
            CommandDescriptor::new(&["ban"], "Bans a player").with_min(2),
            Box::new(RecordingHandler(recorder.clone())),
            ctx,
        )
        .unwrap();

        assert!(cmd.parse(&TestCaller::default(), &args(&["ban"])));
        assert_eq!(recorder.calls.load(AtomicOrdering::SeqCst), 0);
        assert_eq!(help.lookups.lock().unwrap().clone(), vec!["ban".to_string()]);
    }

    #[test]
    fn parse_rejects_too_many_tokens() {
        let recorder = Arc::new(CallRecorder::default());
        let (ctx, _) = context(true);
        let cmd = CommandNode::new(
            CommandDescriptor::new(&["home"], "Go home").with_max(1),
            Box::new(RecordingHandler(recorder.clone())),
            ctx,
        )
        .unwrap();

        assert!(cmd.parse(&TestCaller::default(), &args(&["home", "extra"])));
        assert_eq!(recorder.calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn bad_syntax_prefers_help_lookup_over_alias() {
        let (ctx, help) = context(true);
        let cmd = CommandNode::new(
            CommandDescriptor::new(&["warp"], "Warp around")
                .with_help_lookup("warp.usage")
                .with_min(2),
            Box::new(NoopHandler),
            ctx,
        )
        .unwrap();

        cmd.parse(&TestCaller::default(), &args(&["warp"]));
        assert_eq!(
            help.lookups.lock().unwrap().clone(),
            vec!["warp.usage".to_string()]
        );
    }

    #[test]
    fn parse_executes_once_with_original_tokens() {
        let recorder = Arc::new(CallRecorder::default());
        let (ctx, _) = context(true);
        let cmd = CommandNode::new(
            CommandDescriptor::new(&["ban"], "Bans a player")
                .with_permissions(&["palisade.command.ban"])
                .with_min(2),
            Box::new(RecordingHandler(recorder.clone())),
            ctx,
        )
        .unwrap();

        let caller = TestCaller::with_perms(&["palisade.command.ban"]);
        let tokens = args(&["ban", "Steve", "griefing"]);
        assert!(cmd.parse(&caller, &tokens));
        assert_eq!(recorder.calls.load(AtomicOrdering::SeqCst), 1);
        assert_eq!(recorder.last_args.lock().unwrap().clone(), tokens);
        assert!(caller.notices().is_empty());
    }

    #[test]
    fn unbounded_max_accepts_many_tokens() {
        let recorder = Arc::new(CallRecorder::default());
        let (ctx, _) = context(true);
        let cmd = CommandNode::new(
            CommandDescriptor::new(&["ban"], "Bans a player").with_min(2),
            Box::new(RecordingHandler(recorder.clone())),
            ctx,
        )
        .unwrap();

        let many: Vec<String> = (0..32).map(|i| format!("t{i}")).collect();
        assert!(cmd.parse(&TestCaller::default(), &many));
        assert_eq!(recorder.calls.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn sub_command_lookup_is_case_insensitive() {
        let root = node(CommandDescriptor::new(&["warp"], "Warp root"));
        let child = node(
            CommandDescriptor::new(&["set", "create"], "Set a warp").with_parent("warp"),
        );
        child.set_parent(&root).unwrap();

        assert!(root.has_sub_command("SET"));
        let found = root.sub_command("Create").unwrap();
        assert!(Arc::ptr_eq(&found, &child));
        assert!(root.sub_command("delete").is_none());
    }

    #[test]
    fn reparenting_moves_membership_exactly_once() {
        let a = node(CommandDescriptor::new(&["a"], "a"));
        let b = node(CommandDescriptor::new(&["b"], "b"));
        let x = node(CommandDescriptor::new(&["x"], "x").with_parent("a"));

        x.set_parent(&a).unwrap();
        x.set_parent(&b).unwrap();

        assert!(a.sub_commands().is_empty());
        assert_eq!(b.sub_commands().len(), 1);
        assert!(Arc::ptr_eq(&x.parent().unwrap(), &b));

        // Idempotent on membership.
        x.set_parent(&b).unwrap();
        assert_eq!(b.sub_commands().len(), 1);
    }

    #[test]
    fn set_parent_rejects_self() {
        let a = node(CommandDescriptor::new(&["a"], "a"));
        assert!(matches!(
            a.set_parent(&a),
            Err(Error::CyclicCommandTree(_))
        ));
        assert!(a.parent().is_none());
    }

    #[test]
    fn set_parent_rejects_own_descendant() {
        let root = node(CommandDescriptor::new(&["root"], "root"));
        let child = node(CommandDescriptor::new(&["child"], "child").with_parent("root"));
        child.set_parent(&root).unwrap();

        assert!(matches!(
            root.set_parent(&child),
            Err(Error::CyclicCommandTree(_))
        ));
        assert!(root.parent().is_none());
        assert!(child.sub_commands().is_empty());
    }

    #[test]
    fn detach_clears_parent_and_membership() {
        let root = node(CommandDescriptor::new(&["root"], "root"));
        let child = node(CommandDescriptor::new(&["child"], "child").with_parent("root"));
        child.set_parent(&root).unwrap();

        child.detach();
        assert!(child.parent().is_none());
        assert!(root.sub_commands().is_empty());
    }

    #[test]
    fn flatten_is_preorder_and_excludes_parentless_root() {
        let root = node(CommandDescriptor::new(&["root"], "root"));
        let c1 = node(CommandDescriptor::new(&["c1"], "c1").with_parent("root"));
        let c2 = node(CommandDescriptor::new(&["c2"], "c2").with_parent("root"));
        let c1a = node(CommandDescriptor::new(&["c1a"], "c1a").with_parent("root.c1"));

        c1.set_parent(&root).unwrap();
        c2.set_parent(&root).unwrap();
        c1a.set_parent(&c1).unwrap();

        let mut flat = Vec::new();
        root.collect_sub_commands(&mut flat);

        let names: Vec<&str> = flat
            .iter()
            .map(|n| n.descriptor().aliases[0].as_str())
            .collect();
        assert_eq!(names, vec!["c1", "c1a", "c2"]);
    }

    #[test]
    fn tab_complete_without_completer_is_none() {
        let cmd = node(CommandDescriptor::new(&["ban"], "Bans a player"));
        assert!(cmd.tab_complete(&TestCaller::default(), &args(&["ban", "S"])).is_none());
    }

    #[test]
    fn tab_complete_failure_is_suppressed() {
        let (ctx, _) = context(false);
        let cmd = CommandNode::with_completer(
            CommandDescriptor::new(&["ban"], "Bans a player"),
            Box::new(NoopHandler),
            Box::new(FailingCompleter),
            ctx,
        )
        .unwrap();

        assert!(cmd.tab_complete(&TestCaller::default(), &args(&["ban", "S"])).is_none());
    }

    #[test]
    fn ordering_ranks_roots_before_nested() {
        let root = node(CommandDescriptor::new(&["root"], "root"));
        let other_root = node(CommandDescriptor::new(&["other"], "other"));
        let nested = node(CommandDescriptor::new(&["x"], "x").with_parent("a.b"));
        let deeper = node(CommandDescriptor::new(&["y"], "y").with_parent("c.d.e"));

        assert_eq!(root.registration_cmp(&other_root), Ordering::Equal);
        assert_eq!(root.registration_cmp(&nested), Ordering::Less);
        assert_eq!(nested.registration_cmp(&root), Ordering::Greater);
        assert_eq!(nested.registration_cmp(&deeper), Ordering::Less);
        assert_eq!(deeper.registration_cmp(&nested), Ordering::Greater);
    }

    #[test]
    fn equal_depth_compares_equal_across_parents() {
        let a = node(CommandDescriptor::new(&["a"], "a").with_parent("x.y"));
        let b = node(CommandDescriptor::new(&["b"], "b").with_parent("p.q"));
        assert_eq!(a.registration_cmp(&b), Ordering::Equal);
    }

    #[test]
    fn canonical_path_joins_parent_and_alias() {
        let root = node(CommandDescriptor::new(&["warp"], "warp"));
        let nested = node(CommandDescriptor::new(&["set"], "set").with_parent("warp"));
        assert_eq!(root.canonical_path(), "warp");
        assert_eq!(nested.canonical_path(), "warp.set");
    }

    #[test]
    fn node_records_its_owning_module() {
        let cmd = node(CommandDescriptor::new(&["ban"], "Bans a player"));
        assert_eq!(cmd.owner(), "test-module");
    }

    #[test]
    fn locale_description_falls_back_to_raw() {
        let cmd = node(CommandDescriptor::new(&["ban"], "Bans a player"));
        assert_eq!(cmd.locale_description(), "Bans a player");
    }
}
