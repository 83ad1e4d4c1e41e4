//! Shared data models: wizard answers, configuration objects, watch rules.

pub mod answers;
pub mod eslint;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One file-watcher rule: path fragments plus direction.
///
/// When `include` is true, `patterns` is an allow list; otherwise it is an
/// exclude list. An empty list means "everything except the default
/// exclusions" (node_modules, .git, .svn).
pub struct WatchRule {
    pub patterns: Vec<String>,
    pub include: bool,
}

impl Default for WatchRule {
    fn default() -> Self {
        WatchRule {
            patterns: Vec::new(),
            include: true,
        }
    }
}
