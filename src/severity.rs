//! Rule severity normalization.
//!
//! ESLint accepts numeric severities (0/1/2) interchangeably with their
//! symbolic names. Generated configs always use the symbolic form; this
//! pass rewrites numeric values in place.

use crate::models::eslint::EslintConfig;
use serde_json::{Map, Value as Json};

const LEVELS: [&str; 3] = ["off", "warn", "error"];

/// Normalize every rule severity in `config` to its symbolic form.
pub fn normalize(config: &mut EslintConfig) {
    normalize_rules(&mut config.rules);
}

/// Rewrite numeric severities in a `rules` map.
///
/// Scalar numbers are replaced whole; for array values only the first
/// element (the severity slot) is touched, rule options are left alone.
/// Strings and unrecognized shapes pass through unchanged.
pub fn normalize_rules(rules: &mut Map<String, Json>) {
    for (_, value) in rules.iter_mut() {
        match value {
            Json::Number(_) => {
                let sym = symbolic(value);
                *value = sym;
            }
            Json::Array(items) => {
                if let Some(first) = items.first_mut() {
                    if first.is_number() {
                        let sym = symbolic(first);
                        *first = sym;
                    }
                }
            }
            _ => {}
        }
    }
}

/// Numeric severity to symbolic name; anything outside 0..=2 (including
/// negative and fractional numbers) maps to "off".
fn symbolic(n: &Json) -> Json {
    let name = n
        .as_u64()
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| LEVELS.get(i))
        .copied()
        .unwrap_or("off");
    Json::String(name.to_string())
}
