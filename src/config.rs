//! Configuration discovery and effective settings resolution.
//!
//! fee reads an optional `fee.toml` from the target root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `format`: `json`
//! - `skipInstall`: false
//! - `[install].bare`: `["prettier"]`
//! - `[watch.<type>]`: all known file types with empty pattern lists
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::idea::SCOPE_TABLE;
use crate::models::WatchRule;
use crate::modules::DEFAULT_BARE_INSTALL;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `fee.toml`.
pub struct FeeConfig {
    /// Output format for generated configs: json|yaml.
    pub format: Option<String>,
    #[serde(rename = "skipInstall")]
    pub skip_install: Option<bool>,
    #[serde(default)]
    pub install: Option<InstallCfg>,
    /// [watch.<type>] tables keyed by file type.
    #[serde(default)]
    pub watch: Option<HashMap<String, WatchCfg>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Installation tweaks under `[install]`.
pub struct InstallCfg {
    /// Plugin names that also pull in the bare package of the same name.
    pub bare: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// One `[watch.<type>]` table.
pub struct WatchCfg {
    #[serde(default)]
    pub patterns: Vec<String>,
    /// true = allow list, false = exclude list. Defaults to allow.
    pub include: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub format: String,
    pub skip_install: bool,
    pub bare_install: Vec<String>,
    /// File type -> watch rule, in deterministic order.
    pub watch: Vec<(String, WatchRule)>,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `fee.toml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("fee.toml").exists() || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `FeeConfig` from `fee.toml` if present.
pub fn load_config(root: &Path) -> Option<FeeConfig> {
    let path = root.join("fee.toml");
    if !path.exists() {
        return None;
    }
    let s = fs::read_to_string(&path).ok()?;
    toml::from_str(&s).ok()
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_format: Option<&str>,
    cli_skip_install: Option<bool>,
) -> Effective {
    let start = PathBuf::from(cli_root.unwrap_or("."));
    let root = detect_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    let format = cli_format
        .map(|s| s.to_string())
        .or(cfg.format)
        .unwrap_or_else(|| "json".to_string());

    let skip_install = cli_skip_install.or(cfg.skip_install).unwrap_or(false);

    let bare_install = cfg
        .install
        .and_then(|i| i.bare)
        .unwrap_or_else(|| DEFAULT_BARE_INSTALL.iter().map(|s| s.to_string()).collect());

    // Watch rules from [watch.<type>] tables; when none are configured,
    // fall back to every known file type with the default (empty) rule.
    let watch = match cfg.watch {
        Some(map) if !map.is_empty() => {
            let mut entries: Vec<(String, WatchRule)> = map
                .into_iter()
                .map(|(ty, w)| {
                    (
                        ty,
                        WatchRule {
                            patterns: w.patterns,
                            include: w.include.unwrap_or(true),
                        },
                    )
                })
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            entries
        }
        _ => SCOPE_TABLE
            .iter()
            .map(|(ty, _)| (ty.to_string(), WatchRule::default()))
            .collect(),
    };

    Effective {
        root,
        format,
        skip_install,
        bare_install,
        watch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, None);
        assert_eq!(eff.format, "json");
        assert!(!eff.skip_install);
        assert_eq!(eff.bare_install, vec!["prettier".to_string()]);
        let types: Vec<&str> = eff.watch.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(types, vec!["js", "scss", "md", "vue"]);
        assert!(eff.watch.iter().all(|(_, r)| r.patterns.is_empty() && r.include));
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("fee.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
format = "yaml"
skipInstall = true
[install]
bare = ["prettier", "stylelint"]
[watch.js]
patterns = ["src/"]
[watch.md]
patterns = ["node_modules/"]
include = false
    "#
        )
        .unwrap();

        // Resolve from a nested dir to exercise root detection
        let nested = root.join("packages/app");
        fs::create_dir_all(&nested).unwrap();
        let eff = resolve_effective(nested.to_str(), None, None);
        assert_eq!(eff.root, root);
        assert_eq!(eff.format, "yaml");
        assert!(eff.skip_install);
        assert_eq!(
            eff.bare_install,
            vec!["prettier".to_string(), "stylelint".to_string()]
        );
        assert_eq!(
            eff.watch,
            vec![
                (
                    "js".to_string(),
                    WatchRule {
                        patterns: vec!["src/".to_string()],
                        include: true
                    }
                ),
                (
                    "md".to_string(),
                    WatchRule {
                        patterns: vec!["node_modules/".to_string()],
                        include: false
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_cli_precedence_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("fee.toml"), "format = \"yaml\"\nskipInstall = true\n").unwrap();
        let eff = resolve_effective(root.to_str(), Some("json"), Some(false));
        assert_eq!(eff.format, "json");
        assert!(!eff.skip_install);
    }
}
