//! Placeholder substitution for Stencil.
//! Replaces literal `{{ key }}` tokens in template text with configuration
//! values. This is plain token replacement, not a templating language: no
//! expressions, no filters, no escaping.

use crate::config::Config;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

/// Computes the textual form of a configuration value.
///
/// Strings pass through unchanged; every other value is serialized as
/// 4-space-indented JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => {
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = Serializer::with_formatter(&mut buf, formatter);
            match other.serialize(&mut ser) {
                Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| other.to_string()),
                Err(_) => other.to_string(),
            }
        }
    }
}

/// Substitutes every `{{ key }}` token in `content` with the corresponding
/// configuration value.
///
/// Keys are processed in configuration order, one pass each; all occurrences
/// of a token are replaced. Tokens with no matching key are left verbatim.
/// The token syntax is exact: one space padding each side of the key.
pub fn render(content: &str, config: &Config) -> String {
    let mut rendered = content.to_string();
    for (key, value) in config.iter() {
        let token = format!("{{{{ {key} }}}}");
        if rendered.contains(&token) {
            rendered = rendered.replace(&token, &value_to_text(value));
        }
    }
    rendered
}
