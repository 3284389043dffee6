//! Human readable dump of entity payloads
//!
//! Used by every entity's `Display` impl. Output is a loose, indented tree
//! of the JSON payload, trimmed so a big playlist still fits on a screen:
//! long strings are cut, scalar lists are capped and deep nesting is elided.

use serde::Serialize;
use serde_json::Value;

const MAX_STRING_CHARS: usize = 100;
const MAX_LIST_ITEMS: usize = 10;
const MAX_DEPTH: usize = 3;

/// Rendered in place of a missing payload
pub const UNKNOWN_ENTITY: &str = "Unknown Entity";

/// Render `value` under a `[kind]` tag
pub fn render(kind: &str, value: &Value) -> String {
    if value.is_null() {
        return UNKNOWN_ENTITY.to_string();
    }
    format!("[{kind}] {}", visualize(value, 0, 0))
}

/// Render any serializable entity
pub fn render_entity<T: Serialize + ?Sized>(kind: &str, entity: &T) -> String {
    let value = serde_json::to_value(entity).unwrap_or(Value::Null);
    render(kind, &value)
}

/// Render a bare JSON value as a tree
pub fn visualize(value: &Value, indent: usize, depth: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => truncate(s),
        Value::Array(items) => visualize_array(items, indent, depth),
        Value::Object(map) => {
            if map.is_empty() {
                return format!("{{\n{}}}", pad(indent));
            }
            if depth > MAX_DEPTH {
                return "...".to_string();
            }
            let mut out = String::from("{\n");
            for (key, value) in map {
                out.push_str(&format!(
                    "  {}{key}: {}\n",
                    pad(indent),
                    visualize(value, indent + 1, depth + 1)
                ));
            }
            out.push_str(&pad(indent));
            out.push('}');
            out
        }
    }
}

fn visualize_array(items: &[Value], indent: usize, depth: usize) -> String {
    if depth + 1 > MAX_DEPTH {
        return "...".to_string();
    }

    let nested = matches!(
        items.first(),
        Some(Value::Object(_) | Value::Array(_) | Value::Null)
    );

    if nested {
        let mut out = String::from("[\n");
        for item in items {
            let rendered = visualize(item, 0, depth + 1);
            for line in rendered.lines() {
                out.push_str(&pad(indent + 1));
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str(&pad(indent));
        out.push(']');
        return out;
    }

    let shown = items
        .iter()
        .take(MAX_LIST_ITEMS)
        .map(scalar)
        .collect::<Vec<_>>()
        .join(", ");

    if items.len() > MAX_LIST_ITEMS {
        format!("[{shown}, {} more items]", items.len() - MAX_LIST_ITEMS)
    } else {
        format!("[{shown}]")
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn truncate(s: &str) -> String {
    match s.char_indices().nth(MAX_STRING_CHARS) {
        Some((cut, _)) => format!("{}...", s[..cut].trim_end()),
        None => s.to_string(),
    }
}

fn pad(indent: usize) -> String {
    "  ".repeat(indent)
}
