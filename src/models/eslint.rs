//! ESLint and Prettier configuration objects.
//!
//! `EslintConfig` keeps `extends` as an ordered list while the config is
//! being built and resolved; the ESLint convention of collapsing a single
//! entry to a bare string (and omitting the field when empty) is applied
//! only when converting to JSON for serialization.

use serde::Serialize;
use serde_json::{Map, Value as Json};

#[derive(Debug, Clone, Default)]
/// Mutable ESLint configuration tree built by the synthesizer.
pub struct EslintConfig {
    /// Environment name -> enabled flag.
    pub env: Map<String, Json>,
    /// `parserOptions` entries.
    pub parser_options: Map<String, Json>,
    /// Ordered preset references. Order matters: base rule-sets first,
    /// overrides (e.g. the prettier-disable preset) last so they win.
    pub extends: Vec<String>,
    /// Ordered plugin names, without the `eslint-plugin-` prefix.
    pub plugins: Vec<String>,
    /// Rule id -> severity or [severity, options...].
    pub rules: Map<String, Json>,
    /// Global identifier -> access mode ("readonly"/"writable").
    pub globals: Map<String, Json>,
}

impl EslintConfig {
    /// Convert to the on-disk JSON shape.
    ///
    /// Empty sections are omitted and `extends` collapses to a bare string
    /// when it holds exactly one entry.
    pub fn to_json(&self) -> Json {
        let mut obj = Map::new();
        if !self.env.is_empty() {
            obj.insert("env".to_string(), Json::Object(self.env.clone()));
        }
        match self.extends.len() {
            0 => {}
            1 => {
                obj.insert("extends".to_string(), Json::String(self.extends[0].clone()));
            }
            _ => {
                obj.insert(
                    "extends".to_string(),
                    Json::Array(self.extends.iter().cloned().map(Json::String).collect()),
                );
            }
        }
        if !self.parser_options.is_empty() {
            obj.insert(
                "parserOptions".to_string(),
                Json::Object(self.parser_options.clone()),
            );
        }
        if !self.plugins.is_empty() {
            obj.insert(
                "plugins".to_string(),
                Json::Array(self.plugins.iter().cloned().map(Json::String).collect()),
            );
        }
        if !self.rules.is_empty() {
            obj.insert("rules".to_string(), Json::Object(self.rules.clone()));
        }
        if !self.globals.is_empty() {
            obj.insert("globals".to_string(), Json::Object(self.globals.clone()));
        }
        Json::Object(obj)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Prettier options written to `.prettierrc`. Fixed house style, not
/// derived from any answer.
pub struct PrettierConfig {
    pub print_width: u32,
    pub bracket_spacing: bool,
    pub semi: bool,
    pub tab_width: u32,
    pub single_quote: bool,
    pub jsx_single_quote: bool,
    pub jsx_bracket_same_line: bool,
    pub arrow_parens: String,
    pub end_of_line: String,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        PrettierConfig {
            print_width: 100,
            bracket_spacing: true,
            semi: true,
            tab_width: 4,
            single_quote: true,
            jsx_single_quote: false,
            jsx_bracket_same_line: false,
            arrow_parens: "avoid".to_string(),
            end_of_line: "lf".to_string(),
        }
    }
}
