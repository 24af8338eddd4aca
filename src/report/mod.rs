//! Output formatting for parsed paths and batch check results.

use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::file::loader::Expression;
use crate::path::{KeyMatch, Node, Path, RenderOptions};

/// How a parsed path is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One node per line.
    #[default]
    Text,
    Yaml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}', expected 'text', 'yaml' or 'json'",
                other
            )),
        }
    }
}

/// Formats a parsed path in the requested format.
///
/// The text format lists each node with its attributes, followed by the
/// canonical rendering.
pub fn format_path(path: &Path, format: OutputFormat, options: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            write_nodes(&mut out, &path.nodes, 0)
                .and_then(|()| writeln!(out, "canonical: {}", path.render_with(options)))
                .context("Failed to format path as text")?;
            Ok(out)
        }
        OutputFormat::Yaml => serde_yaml::to_string(path).context("Failed to serialize path as YAML"),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(path).context("Failed to serialize path as JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn write_nodes(out: &mut String, nodes: &[Node], depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            Node::Object(object) => {
                writeln!(out, "{}object {:?}", indent, object.reference)?;
            }
            Node::List(list) => match &list.key_match {
                KeyMatch::Glob => writeln!(out, "{}list {:?} *", indent, list.key_field)?,
                KeyMatch::Value(value) => {
                    writeln!(out, "{}list {:?} = {:?}", indent, list.key_field, value)?
                }
            },
            Node::Path(path) => {
                writeln!(out, "{}path", indent)?;
                write_nodes(out, &path.nodes, depth + 1)?;
            }
        }
    }
    Ok(())
}

/// Formats one line of `check` output.
pub fn format_outcome(expression: &Expression, options: &RenderOptions) -> String {
    match &expression.result {
        Ok(path) => format!(
            "ok   {}: {}",
            expression.line,
            path.render_with(options)
        ),
        Err(err) => format!("FAIL {}: {}: {}", expression.line, expression.source, err),
    }
}
