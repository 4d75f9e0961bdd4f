//! Printers: colored text lines and results-panel rendering.

use owo_colors::OwoColorize;
use serde_json::Value;

use crate::runner::RunOutcome;

pub struct TextPrinter {
    pub color: Option<String>,
}

impl TextPrinter {
    pub fn print(&self, text: &str) {
        if let Some(c) = self.color.as_deref() {
            match c {
                "green" => println!("{}", text.green()),
                "cyan" => println!("{}", text.cyan()),
                "magenta" => println!("{}", text.magenta()),
                "yellow" => println!("{}", text.yellow()),
                _ => println!("{}", text),
            }
        } else {
            println!("{}", text);
        }
    }
}

/// Textual form of an outcome, one panel line per element: a header naming
/// the algorithm, then the rendered value or the generic success message.
pub fn render_outcome(outcome: &RunOutcome, pretty: bool) -> Vec<String> {
    let mut lines = vec![format!("Algorithm: {}", outcome.selection)];
    match &outcome.value {
        None => lines.push("Algorithm executed successfully.".to_string()),
        Some(value) if value.is_array() || value.is_object() => {
            let rendered = render_value(value, pretty);
            lines.extend(rendered.lines().map(str::to_string));
        }
        Some(value) => lines.push(format!("Result: {}", render_value(value, pretty))),
    }
    lines
}

/// Structured values serialize to (optionally indented) JSON text; strings
/// print bare, without JSON quoting.
pub fn render_value(value: &Value, pretty: bool) -> String {
    match value {
        Value::String(s) => s.clone(),
        _ if pretty => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(value: Option<Value>) -> RunOutcome {
        RunOutcome {
            selection: "demo".to_string(),
            entry: "demo".to_string(),
            value,
        }
    }

    #[test]
    fn scalars_render_as_plain_text() {
        let lines = render_outcome(&outcome(Some(json!(42))), true);
        assert_eq!(lines, vec!["Algorithm: demo", "Result: 42"]);

        let lines = render_outcome(&outcome(Some(json!("done"))), true);
        assert_eq!(lines, vec!["Algorithm: demo", "Result: done"]);
    }

    #[test]
    fn unit_renders_the_success_message() {
        let lines = render_outcome(&outcome(None), true);
        assert_eq!(lines, vec!["Algorithm: demo", "Algorithm executed successfully."]);
    }

    #[test]
    fn structured_values_render_indented() {
        let lines = render_outcome(&outcome(Some(json!([1, 2, 3]))), true);
        assert_eq!(lines[0], "Algorithm: demo");
        assert_eq!(lines[1..].join("\n"), "[\n  1,\n  2,\n  3\n]");
    }

    #[test]
    fn compact_mode_keeps_structured_values_on_one_line() {
        let lines = render_outcome(&outcome(Some(json!({"n": 1}))), false);
        assert_eq!(lines, vec!["Algorithm: demo", "{\"n\":1}"]);
    }
}
