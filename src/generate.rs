//! Worksheet generation: a resolved section tree rendered as markdown.
//!
//! Each section emits an H1 header and a horizontal rule, then a depth-first
//! walk of its materialized nodes. A field emits a heading carrying a pipe
//! and an empty answer slot on the next line; a container emits a bare
//! heading and recurses. Notes never reach the worksheet: they are
//! template-side guidance only. Generation is deterministic and total —
//! identical arguments produce byte-identical output.

use crate::error::Error;
use crate::resolve::{resolve_section, QuantityOverrides, ResolvedNode, UNBOUNDED_DEFAULT};
use crate::template::{Section, Template};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Layout preferences applied during generation.
pub struct GenerateOptions {
    /// Copies materialized for `[*]` nodes with no override.
    pub unbounded_default: usize,
    /// Dash count of the horizontal rule under each section header.
    ///
    /// Extraction accepts any rule of three or more dashes, so widths of
    /// three and up round-trip.
    pub rule_width: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            unbounded_default: UNBOUNDED_DEFAULT,
            rule_width: 3,
        }
    }
}

/// Generate a worksheet from template text with the default layout.
///
/// With a `section` filter only that section (first match by name) is
/// generated; otherwise every section is, in source order.
///
/// # Errors
///
/// Propagates compilation failures, and returns [`Error::SectionNotFound`]
/// if `section` matches no section name in the template.
pub fn generate(
    template_text: &str,
    section: Option<&str>,
    overrides: &QuantityOverrides,
) -> Result<String, Error> {
    generate_with(template_text, section, overrides, GenerateOptions::default())
}

/// Generate a worksheet with explicit layout options.
///
/// # Errors
///
/// Same failure modes as [`generate`].
pub fn generate_with(
    template_text: &str,
    section: Option<&str>,
    overrides: &QuantityOverrides,
    options: GenerateOptions,
) -> Result<String, Error> {
    let template = Template::compile(template_text)?;
    let selected: Vec<&Section> = match section {
        Some(name) => vec![template.section(name).ok_or_else(|| Error::SectionNotFound {
            name: name.to_string(),
        })?],
        None => template.sections.iter().collect(),
    };

    let mut lines: Vec<String> = Vec::new();
    for section in selected {
        if lines.last().is_some_and(|line| !line.is_empty()) {
            lines.push(String::new());
        }
        lines.push(format!("# {}", section.name));
        lines.push("-".repeat(options.rule_width));
        for node in resolve_section(section, overrides, options.unbounded_default) {
            render(&node, &mut lines);
        }
    }
    Ok(lines.join("\n"))
}

/// Emit one materialized node and its children as worksheet lines.
fn render(node: &ResolvedNode, lines: &mut Vec<String>) {
    let marks = "#".repeat(node.level);
    if node.is_field() {
        lines.push(format!("{marks} {} | ", node.name));
        lines.push(String::new());
    } else {
        lines.push(format!("{marks} {}", node.name));
        for child in &node.children {
            render(child, lines);
        }
    }
}

#[cfg(test)]
#[path = "tests/generate.rs"]
mod tests;
