//! Worksheet extraction: structured data recovered from completed worksheets.
//!
//! Extraction is independent of the template: the layout is recovered from
//! the text alone by scanning for `# Name` headers immediately followed by a
//! horizontal rule. Each section yields two views of its answers — a flat
//! name-to-answer map across all heading depths, and a hierarchical outline
//! preserving container nesting. Repeated field names accumulate in document
//! order rather than overwriting, which also covers name collisions between
//! different depths.

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
/// Answer text for a field name: one value, or several in document order.
///
/// Serializes untagged, so JSON output is a plain string or an array.
pub enum FieldValue {
    /// The field name appeared once in the section.
    Single(String),
    /// The field name appeared more than once (repetition, or a collision
    /// between depths).
    Repeated(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One node of a section's hierarchical outline.
pub struct FieldNode {
    /// Display name from the heading line.
    pub name: String,
    /// Heading depth, the count of leading `#` characters.
    pub level: usize,
    /// Answer text for fields; `None` for structural container headings.
    pub answer: Option<String>,
    /// Nested headings, in document order.
    pub children: Vec<FieldNode>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One worksheet section recovered from completed worksheet text.
pub struct ExtractedSection {
    /// Section name from the `# Name` header.
    pub name: String,
    /// Verbatim slice from the header line through the next section
    /// boundary, with trailing whitespace trimmed.
    pub raw_text: String,
    /// Flat field view: answers from every depth keyed by display name.
    pub fields: BTreeMap<String, FieldValue>,
    /// Hierarchical view preserving container nesting.
    pub outline: Vec<FieldNode>,
}

#[must_use]
/// Extract every section from worksheet text, in document order.
///
/// A worksheet with no section headers yields an empty vector.
pub fn extract_sections(worksheet: &str) -> Vec<ExtractedSection> {
    let lines: Vec<&str> = worksheet.lines().collect();
    let mut headers: Vec<(usize, String)> = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if let Some(name) = section_header(line, lines.get(index + 1).copied()) {
            headers.push((index, name));
        }
    }

    let mut sections = Vec::new();
    for (position, (start, name)) in headers.iter().enumerate() {
        let end = headers
            .get(position + 1)
            .map_or(lines.len(), |&(next, _)| next);
        let (fields, outline) = parse_body(&lines[start + 2..end]);
        sections.push(ExtractedSection {
            name: name.clone(),
            raw_text: lines[*start..end].join("\n").trim_end().to_string(),
            fields,
            outline,
        });
    }
    sections
}

#[must_use]
/// Extract all sections keyed by name.
///
/// The first occurrence wins when a section name repeats. A worksheet with
/// no sections yields an empty map.
pub fn extract_all(worksheet: &str) -> BTreeMap<String, ExtractedSection> {
    let mut sections = BTreeMap::new();
    for section in extract_sections(worksheet) {
        sections.entry(section.name.clone()).or_insert(section);
    }
    sections
}

/// Raw text of the named section (first match).
///
/// # Errors
///
/// Returns [`Error::SectionNotFound`] if no section header matches `name`.
pub fn extract_section(worksheet: &str, name: &str) -> Result<String, Error> {
    extract_sections(worksheet)
        .into_iter()
        .find(|section| section.name == name)
        .map(|section| section.raw_text)
        .ok_or_else(|| Error::SectionNotFound {
            name: name.to_string(),
        })
}

/// Flat field map of the named section (first match).
///
/// # Errors
///
/// Returns [`Error::SectionNotFound`] if no section header matches `name`.
pub fn extract_fields(worksheet: &str, name: &str) -> Result<BTreeMap<String, FieldValue>, Error> {
    extract_sections(worksheet)
        .into_iter()
        .find(|section| section.name == name)
        .map(|section| section.fields)
        .ok_or_else(|| Error::SectionNotFound {
            name: name.to_string(),
        })
}

/// Section name when `line` is an H1 header followed by a rule line.
fn section_header(line: &str, next: Option<&str>) -> Option<String> {
    let rest = line.trim().strip_prefix('#')?;
    if rest.starts_with('#') {
        return None;
    }
    let name = rest.trim();
    if name.is_empty() || !next.is_some_and(is_rule) {
        return None;
    }
    Some(name.to_string())
}

/// Whether a line is a horizontal rule of three or more dashes.
fn is_rule(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

/// Scan a section body into its flat field list and hierarchical outline.
///
/// A heading line containing a pipe opens a field: text after the pipe seeds
/// the answer inline, and subsequent non-heading lines accumulate until the
/// next heading. Headings without a pipe are containers: present in the
/// outline, absent from the flat map.
fn parse_body(body: &[&str]) -> (BTreeMap<String, FieldValue>, Vec<FieldNode>) {
    let mut outline: Vec<FieldNode> = Vec::new();
    // (level, index among its siblings) for each open heading
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut flat: Vec<(String, String)> = Vec::new();
    // open field: its index path into the outline, plus accumulated lines
    let mut current: Option<(Vec<usize>, Vec<String>)> = None;

    for raw in body {
        let line = raw.trim();
        if line.starts_with('#') {
            close_field(&mut outline, &mut current, &mut flat);
            let level = line.chars().take_while(|&c| c == '#').count();
            let rest = line[level..].trim();
            let (name, inline) = match rest.split_once('|') {
                Some((name, inline)) => (name.trim(), Some(inline.trim())),
                None => (rest, None),
            };
            while stack.last().is_some_and(|&(open, _)| open >= level) {
                stack.pop();
            }
            let mut siblings = &mut outline;
            for &(_, index) in &stack {
                siblings = &mut siblings[index].children;
            }
            stack.push((level, siblings.len()));
            siblings.push(FieldNode {
                name: name.to_string(),
                level,
                answer: None,
                children: Vec::new(),
            });
            if let Some(inline) = inline {
                let path = stack.iter().map(|&(_, index)| index).collect();
                let mut parts = Vec::new();
                if !inline.is_empty() {
                    parts.push(inline.to_string());
                }
                current = Some((path, parts));
            }
        } else if let Some((_, parts)) = current.as_mut() {
            parts.push(line.to_string());
        }
    }
    close_field(&mut outline, &mut current, &mut flat);

    let mut fields: BTreeMap<String, FieldValue> = BTreeMap::new();
    for (name, answer) in flat {
        let merged = match fields.remove(&name) {
            None => FieldValue::Single(answer),
            Some(FieldValue::Single(first)) => FieldValue::Repeated(vec![first, answer]),
            Some(FieldValue::Repeated(mut values)) => {
                values.push(answer);
                FieldValue::Repeated(values)
            }
        };
        fields.insert(name, merged);
    }
    (fields, outline)
}

/// Close the open field, writing its trimmed answer into the outline node
/// and the flat list.
fn close_field(
    outline: &mut Vec<FieldNode>,
    current: &mut Option<(Vec<usize>, Vec<String>)>,
    flat: &mut Vec<(String, String)>,
) {
    let Some((path, parts)) = current.take() else {
        return;
    };
    let Some((&last, ancestors)) = path.split_last() else {
        return;
    };
    let mut siblings = &mut *outline;
    for &index in ancestors {
        siblings = &mut siblings[index].children;
    }
    let node = &mut siblings[last];
    let answer = parts.join("\n").trim().to_string();
    flat.push((node.name.clone(), answer.clone()));
    node.answer = Some(answer);
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
