use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::models::Config;
use crate::infrastructure::config::{ENV_PREFIX, ENV_SEPARATOR};

/// Render settings as `PMACONF_*` assignments, one per line, keys sorted.
///
/// Feeding the output back as environment reproduces `config` through
/// [`ConfigLoader`](crate::infrastructure::config::ConfigLoader). Unset
/// options and empty strings are left out; both are the defaults.
///
/// Strings are double-quoted. Figment parses unquoted values, so `1234`
/// would come back as an integer and `[0-9]` as an array.
pub fn render_env(config: &Config) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize settings")?;

    let mut lines = Vec::new();
    flatten(&mut lines, &mut Vec::new(), &value);

    Ok(lines.into_iter().map(|line| line + "\n").collect())
}

fn flatten<'a>(lines: &mut Vec<String>, path: &mut Vec<&'a str>, value: &'a Value) {
    let assignment = |path: &[&str], rendered: String| {
        format!(
            "{ENV_PREFIX}{}={rendered}",
            path.join(ENV_SEPARATOR).to_uppercase()
        )
    };

    match value {
        Value::Object(fields) => {
            for (name, field) in fields {
                path.push(name);
                flatten(lines, path, field);
                path.pop();
            }
        }
        Value::String(s) if !s.is_empty() => lines.push(assignment(path.as_slice(), quoted(s))),
        Value::Bool(b) => lines.push(assignment(path.as_slice(), b.to_string())),
        Value::Number(n) => lines.push(assignment(path.as_slice(), n.to_string())),
        // No list settings exist; nulls and empty strings are defaults
        Value::String(_) | Value::Null | Value::Array(_) => {}
    }
}

/// Double-quote `s` with the escapes figment's value parser understands.
fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
