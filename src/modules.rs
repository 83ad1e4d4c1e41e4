//! npm package resolution for a synthesized config.
//!
//! Turns `plugins`/`extends` references into installable `name@version`
//! identifiers. Works on the pre-collapse `extends` list kept inside
//! `EslintConfig`, so callers never have to un-collapse a bare string.

use crate::models::eslint::EslintConfig;

/// The base linter package itself.
pub const ESLINT_PACKAGE: &str = "eslint";
/// Version tag applied to every resolved package.
const VERSION_TAG: &str = "latest";
const PLUGIN_PREFIX: &str = "eslint-plugin-";
const CONFIG_PREFIX: &str = "eslint-config-";
/// Extends entries with these prefixes resolve to built-in or
/// plugin-provided presets; they never map to an installable config package.
const RESERVED_PREFIXES: [&str; 2] = ["eslint:", "plugin:"];

/// Default set of plugins that are also installed as bare packages,
/// because the plugin wraps a standalone tool. Overridable via
/// `[install] bare` in fee.toml.
pub const DEFAULT_BARE_INSTALL: &[&str] = &["prettier"];

/// Resolve the deduplicated, insertion-ordered list of packages to install.
///
/// `bare_install` lists plugin names that additionally pull in the bare
/// package of the same name (see [`DEFAULT_BARE_INSTALL`]).
pub fn resolve_modules(
    cfg: &EslintConfig,
    include_eslint: bool,
    bare_install: &[String],
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for plugin in &cfg.plugins {
        push_unique(&mut out, format!("{PLUGIN_PREFIX}{plugin}@{VERSION_TAG}"));
        if bare_install.iter().any(|b| b == plugin) {
            push_unique(&mut out, format!("{plugin}@{VERSION_TAG}"));
        }
    }
    for entry in &cfg.extends {
        if RESERVED_PREFIXES.iter().any(|p| entry.starts_with(p)) {
            continue;
        }
        push_unique(&mut out, format!("{CONFIG_PREFIX}{entry}@{VERSION_TAG}"));
    }
    if include_eslint {
        push_unique(&mut out, format!("{ESLINT_PACKAGE}@{VERSION_TAG}"));
    }
    out
}

fn push_unique(out: &mut Vec<String>, pkg: String) {
    if !out.contains(&pkg) {
        out.push(pkg);
    }
}
