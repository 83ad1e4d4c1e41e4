//! Configuration synthesis from wizard answers.
//!
//! A fixed sequence of builder steps derives the ESLint config; later
//! steps may append to structures earlier steps initialized, so the order
//! here is load-bearing. In particular `extends` must end up with base
//! rule-sets first (eslint:recommended at the very front) and the
//! prettier-disable preset last, so later entries win on rule conflicts.

use crate::models::answers::{Answers, Framework, ModuleType, Purpose};
use crate::models::eslint::{EslintConfig, PrettierConfig};
use crate::severity;
use serde_json::{json, Value as Json};

/// Base preset every generated config starts from.
pub const BASE_PRESET: &str = "standard";
/// Preset enabling problem-finding rules; must sort before all others.
pub const RECOMMENDED_PRESET: &str = "eslint:recommended";
/// Preset disabling stylistic rules that conflict with Prettier; must be last.
pub const PRETTIER_PRESET: &str = "prettier";
/// Vue requires its own essential preset in addition to the plugin.
pub const VUE_PRESET: &str = "plugin:vue/essential";

/// Build an `EslintConfig` from a completed answer set.
pub fn synthesize(answers: &Answers) -> EslintConfig {
    let mut cfg = EslintConfig::default();
    apply_base(&mut cfg);
    apply_module_type(&mut cfg, answers.module_type);
    apply_envs(&mut cfg, answers);
    apply_framework(&mut cfg, answers.framework);
    apply_purpose(&mut cfg, answers.purpose);
    apply_prettier(&mut cfg, answers.prettier);
    severity::normalize(&mut cfg);
    cfg
}

/// Fixed Prettier options; emitted only when the answer set enables Prettier.
pub fn prettier_config() -> PrettierConfig {
    PrettierConfig::default()
}

fn apply_base(cfg: &mut EslintConfig) {
    cfg.extends.push(BASE_PRESET.to_string());
    cfg.parser_options
        .insert("ecmaVersion".to_string(), json!(2021));
    cfg.env.insert("es2021".to_string(), json!(true));
    cfg.globals
        .insert("Atomics".to_string(), json!("readonly"));
    cfg.globals
        .insert("SharedArrayBuffer".to_string(), json!("readonly"));
}

fn apply_module_type(cfg: &mut EslintConfig, module_type: ModuleType) {
    match module_type {
        ModuleType::Esm => {
            cfg.parser_options
                .insert("sourceType".to_string(), json!("module"));
        }
        ModuleType::CommonJs => {
            cfg.env.insert("commonjs".to_string(), json!(true));
        }
        ModuleType::None => {}
    }
}

fn apply_envs(cfg: &mut EslintConfig, answers: &Answers) {
    for env in &answers.env {
        cfg.env.insert(env.key().to_string(), json!(true));
    }
}

fn apply_framework(cfg: &mut EslintConfig, framework: Framework) {
    match framework {
        Framework::React => {
            let features = cfg
                .parser_options
                .entry("ecmaFeatures".to_string())
                .or_insert_with(|| json!({}));
            if let Json::Object(map) = features {
                map.insert("jsx".to_string(), json!(true));
            }
            cfg.plugins.push("react".to_string());
        }
        Framework::Vue => {
            cfg.plugins.push("vue".to_string());
            cfg.extends.push(VUE_PRESET.to_string());
        }
        Framework::None => {}
    }
}

fn apply_purpose(cfg: &mut EslintConfig, purpose: Purpose) {
    if purpose == Purpose::Problems {
        cfg.extends.insert(0, RECOMMENDED_PRESET.to_string());
    }
}

fn apply_prettier(cfg: &mut EslintConfig, enabled: bool) {
    if enabled {
        cfg.plugins.push("prettier".to_string());
        cfg.extends.push(PRETTIER_PRESET.to_string());
        // Report formatting drift as a lint error.
        cfg.rules
            .insert("prettier/prettier".to_string(), json!("error"));
    }
}
